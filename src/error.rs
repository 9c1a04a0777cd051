use thiserror::Error;

use crate::model::ContactField;

#[derive(Debug, Error)]
pub enum RolodexError {
    #[error("invalid {field}")]
    Validation { field: ContactField },

    #[error("Contact already exists: {name}")]
    Duplicate { name: String },

    #[error("No contact at position {position}")]
    NotFound { position: usize },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failures reading or writing the contact file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record {position} has an invalid {field}")]
    InvalidRecord { position: usize, field: ContactField },

    #[error("name appears more than once: {name}")]
    DuplicateRecord { name: String },
}

pub type RolodexResult<T> = Result<T, RolodexError>;
