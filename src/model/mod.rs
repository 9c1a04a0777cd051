pub mod contact;

// Re-exports for convenience
pub use contact::{Contact, ContactField};
