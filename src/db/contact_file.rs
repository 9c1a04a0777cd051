use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::StorageError;
use crate::model::Contact;
use crate::validation;

/// Reads the whole contact file. Returns `Ok(None)` when the file does not
/// exist; any other failure, including a record that fails validation or
/// repeats an earlier name, is an error.
pub fn read_all(path: &Path) -> Result<Option<Vec<Contact>>, StorageError> {
    let json_str = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let contacts: Vec<Contact> = serde_json::from_str(&json_str)?;

    check_records(&contacts)?;
    Ok(Some(contacts))
}

fn check_records(contacts: &[Contact]) -> Result<(), StorageError> {
    let mut seen = HashSet::new();
    for (i, contact) in contacts.iter().enumerate() {
        if !seen.insert(contact.name.as_str()) {
            return Err(StorageError::DuplicateRecord {
                name: contact.name.clone(),
            });
        }
        if let Some(field) = validation::first_invalid_field(contact) {
            return Err(StorageError::InvalidRecord {
                position: i + 1,
                field,
            });
        }
    }
    Ok(())
}

/// Overwrites the contact file with the given sequence, creating missing
/// parent directories first. The data goes to a `.tmp` sibling that is then
/// renamed over the target, so the old file survives a failed write.
pub fn write_all(path: &Path, contacts: &[Contact]) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut json = serde_json::to_string_pretty(contacts)?;
    json.push('\n');
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}
