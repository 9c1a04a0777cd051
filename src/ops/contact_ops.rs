use tracing::debug;

use crate::error::{RolodexError, RolodexResult};
use crate::model::{Contact, ContactField};
use crate::store::ContactStore;
use crate::validation::{self, check_field};

impl ContactStore {
    /// Validates and appends a new contact, then persists the list.
    pub fn add(&mut self, name: &str, phone: &str, email: &str) -> RolodexResult<Contact> {
        let contact = validation::check_contact(name, phone, email)?;

        if self.contacts.iter().any(|c| c.name == contact.name) {
            return Err(RolodexError::Duplicate { name: contact.name });
        }

        let mut next = self.contacts.clone();
        next.push(contact.clone());
        self.commit(next)?;

        debug!(name = %contact.name, "added contact");
        Ok(contact)
    }

    /// Updates the contact at a 1-based `position`. Unset fields keep their
    /// current value. Nothing changes unless every provided field is valid.
    pub fn edit(
        &mut self,
        position: usize,
        name: Option<&str>,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> RolodexResult<Contact> {
        let index = self
            .index_of(position)
            .ok_or(RolodexError::NotFound { position })?;

        let mut updated = self.contacts[index].clone();

        if let Some(n) = name {
            updated.name = check_field(ContactField::Name, n)?;
        }
        if let Some(p) = phone {
            updated.phone = check_field(ContactField::Phone, p)?;
        }
        if let Some(e) = email {
            updated.email = check_field(ContactField::Email, e)?;
        }

        let collides = self
            .contacts
            .iter()
            .enumerate()
            .any(|(i, c)| i != index && c.name == updated.name);
        if collides {
            return Err(RolodexError::Duplicate { name: updated.name });
        }

        let mut next = self.contacts.clone();
        next[index] = updated.clone();
        self.commit(next)?;

        debug!(position, name = %updated.name, "edited contact");
        Ok(updated)
    }

    /// Removes the contact at a 1-based `position` and persists the list.
    /// Later contacts move up by one. Confirmation is the caller's job.
    pub fn delete(&mut self, position: usize) -> RolodexResult<Contact> {
        let index = self
            .index_of(position)
            .ok_or(RolodexError::NotFound { position })?;

        let mut next = self.contacts.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        debug!(position, name = %removed.name, "deleted contact");
        Ok(removed)
    }
}
