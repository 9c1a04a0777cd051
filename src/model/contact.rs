use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three fields carried by every contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Phone,
    Email,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Phone, ContactField::Email];

    pub fn display_name(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Phone => "phone",
            ContactField::Email => "email",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A single entry in the contact list. The name is the unique key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    /// Builds a contact from raw input, trimming every field and rejecting
    /// the first one that fails validation.
    pub fn create(name: &str, phone: &str, email: &str) -> crate::error::RolodexResult<Self> {
        crate::validation::check_contact(name, phone, email)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}\nPhone: {}\nEmail: {}", self.name, self.phone, self.email)
    }
}
