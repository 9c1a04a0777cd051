//! The contact store: an ordered list of contacts owned by the running
//! process and mirrored to a single JSON file.
//!
//! Mutations live in [`crate::ops::contact_ops`], reads in
//! [`crate::queries::contact_queries`]. Both go through this type.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::db::contact_file;
use crate::error::RolodexResult;
use crate::model::Contact;

/// What `load` found on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No file yet; the store starts empty.
    Missing,
    /// The file was read; holds the number of contacts.
    Loaded(usize),
}

#[derive(Debug)]
pub struct ContactStore {
    path: PathBuf,
    pub(crate) contacts: Vec<Contact>,
}

impl ContactStore {
    /// Creates an empty store backed by `path`. Nothing is read until `load`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            contacts: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Replaces the in-memory list with the file contents.
    ///
    /// A missing file is not an error. An unreadable or malformed file
    /// leaves the store empty and returns the error so the caller can warn;
    /// the store stays usable either way.
    pub fn load(&mut self) -> RolodexResult<LoadOutcome> {
        match contact_file::read_all(&self.path) {
            Ok(Some(contacts)) => {
                info!(count = contacts.len(), path = %self.path.display(), "loaded contacts");
                self.contacts = contacts;
                Ok(LoadOutcome::Loaded(self.contacts.len()))
            }
            Ok(None) => {
                info!(path = %self.path.display(), "no contact file, starting empty");
                self.contacts.clear();
                Ok(LoadOutcome::Missing)
            }
            Err(e) => {
                info!(path = %self.path.display(), error = %e, "unreadable contact file, starting empty");
                self.contacts.clear();
                Err(e.into())
            }
        }
    }

    /// Writes the full in-memory list to disk, overwriting the file.
    pub fn save(&self) -> RolodexResult<()> {
        self.write(&self.contacts)
    }

    /// Persists `next` and only then makes it the in-memory list, so a
    /// failed write leaves the store as it was.
    pub(crate) fn commit(&mut self, next: Vec<Contact>) -> RolodexResult<()> {
        self.write(&next)?;
        self.contacts = next;
        Ok(())
    }

    fn write(&self, contacts: &[Contact]) -> RolodexResult<()> {
        match contact_file::write_all(&self.path, contacts) {
            Ok(()) => {
                info!(count = contacts.len(), path = %self.path.display(), "saved contacts");
                Ok(())
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to save contacts");
                Err(e.into())
            }
        }
    }

    /// Converts a 1-based position into an index, if it is in range.
    pub(crate) fn index_of(&self, position: usize) -> Option<usize> {
        if (1..=self.contacts.len()).contains(&position) {
            Some(position - 1)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{RolodexError, StorageError};
    use std::fs;
    use tempfile::TempDir;

    fn contact(name: &str) -> Contact {
        Contact {
            name: name.into(),
            phone: "555-123-4567".into(),
            email: "someone@example.com".into(),
        }
    }

    #[test]
    fn load_missing_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let mut store = ContactStore::new(dir.path().join("contacts.json"));
        assert_eq!(store.load().unwrap(), LoadOutcome::Missing);
        assert!(store.is_empty());
    }

    #[test]
    fn load_corrupt_file_starts_empty_with_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts.json");
        fs::write(&path, "not json at all").unwrap();

        let mut store = ContactStore::new(&path);
        store.contacts.push(contact("Stale"));
        let result = store.load();
        assert!(matches!(result, Err(RolodexError::Storage(StorageError::Json(_)))));
        assert!(store.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts.json");

        let mut store = ContactStore::new(&path);
        store.contacts = vec![contact("Alice"), contact("Bob"), contact("Carol")];
        store.save().unwrap();

        let mut fresh = ContactStore::new(&path);
        assert_eq!(fresh.load().unwrap(), LoadOutcome::Loaded(3));
        assert_eq!(fresh.contacts, store.contacts);
    }

    #[test]
    fn failed_commit_keeps_previous_state() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be makes every write fail.
        let path = dir.path().join("contacts.json");
        fs::create_dir(&path).unwrap();

        let mut store = ContactStore::new(&path);
        store.contacts = vec![contact("Alice")];
        let result = store.commit(vec![contact("Alice"), contact("Bob")]);
        assert!(matches!(result, Err(RolodexError::Storage(StorageError::Io(_)))));
        assert_eq!(store.contacts, vec![contact("Alice")]);
    }

    #[test]
    fn index_of_is_one_based() {
        let mut store = ContactStore::new("unused.json");
        store.contacts = vec![contact("Alice"), contact("Bob")];
        assert_eq!(store.index_of(0), None);
        assert_eq!(store.index_of(1), Some(0));
        assert_eq!(store.index_of(2), Some(1));
        assert_eq!(store.index_of(3), None);
    }
}
