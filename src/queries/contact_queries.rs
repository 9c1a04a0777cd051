use crate::error::{RolodexError, RolodexResult};
use crate::model::Contact;
use crate::store::ContactStore;

impl ContactStore {
    /// All contacts in insertion order.
    pub fn list_all(&self) -> &[Contact] {
        &self.contacts
    }

    /// Contacts whose name contains `query`, ignoring case, in list order.
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        let lower = query.to_lowercase();
        self.contacts
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&lower))
            .collect()
    }

    pub fn get(&self, position: usize) -> RolodexResult<&Contact> {
        self.index_of(position)
            .map(|i| &self.contacts[i])
            .ok_or(RolodexError::NotFound { position })
    }
}
