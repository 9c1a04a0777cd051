pub mod error;
pub mod validation;
pub mod model;
pub mod db;
pub mod store;
pub mod ops;
pub mod queries;
pub mod config;
pub mod cli;

pub use error::{RolodexError, RolodexResult, StorageError};
pub use model::{Contact, ContactField};
pub use store::{ContactStore, LoadOutcome};
