use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{RolodexError, RolodexResult};
use crate::model::{Contact, ContactField};

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
});

const MIN_PHONE_DIGITS: usize = 10;

/// A name is valid when it is not blank (empty or whitespace-only).
pub fn validate_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// A phone number may contain digits, inner spaces, dashes, parentheses and
/// a leading `+`, and must carry at least ten digits. Callers trim first.
pub fn validate_phone(phone: &str) -> bool {
    if phone.trim() != phone {
        return false;
    }
    let body = phone.strip_prefix('+').unwrap_or(phone);

    let mut digits = 0;
    for c in body.chars() {
        match c {
            '0'..='9' => digits += 1,
            '-' | '(' | ')' => {}
            c if c.is_whitespace() => {}
            _ => return false,
        }
    }
    digits >= MIN_PHONE_DIGITS
}

/// Matches `local@domain.tld` with no whitespace and exactly one `@`.
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn is_valid(field: ContactField, value: &str) -> bool {
    match field {
        ContactField::Name => validate_name(value),
        ContactField::Phone => validate_phone(value),
        ContactField::Email => validate_email(value),
    }
}

/// Validates a single field, returning the trimmed value on success.
pub fn check_field(field: ContactField, value: &str) -> RolodexResult<String> {
    let trimmed = value.trim();
    if is_valid(field, trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(RolodexError::Validation { field })
    }
}

/// Validates a raw triple in field order and builds the contact.
pub fn check_contact(name: &str, phone: &str, email: &str) -> RolodexResult<Contact> {
    Ok(Contact {
        name: check_field(ContactField::Name, name)?,
        phone: check_field(ContactField::Phone, phone)?,
        email: check_field(ContactField::Email, email)?,
    })
}

/// Returns the first field of an existing contact that fails validation or
/// carries surrounding whitespace.
pub fn first_invalid_field(contact: &Contact) -> Option<ContactField> {
    ContactField::ALL.into_iter().find(|field| {
        let value = match field {
            ContactField::Name => &contact.name,
            ContactField::Phone => &contact.phone,
            ContactField::Email => &contact.email,
        };
        value.trim() != value || !is_valid(*field, value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_accepts_valid_string() {
        assert!(validate_name("Jane Doe"));
    }

    #[test]
    fn name_rejects_empty() {
        assert!(!validate_name(""));
    }

    #[test]
    fn name_rejects_whitespace_only() {
        assert!(!validate_name("  \t "));
    }

    #[test]
    fn phone_accepts_formatted_number() {
        assert!(validate_phone("+1-555-123-4567"));
        assert!(validate_phone("(555) 123 4567"));
        assert!(validate_phone("5551234567"));
    }

    #[test]
    fn phone_rejects_too_few_digits() {
        assert!(!validate_phone("555"));
        assert!(!validate_phone("555-123-456"));
    }

    #[test]
    fn phone_counts_digits_not_length() {
        // 17 characters but only 9 digits
        assert!(!validate_phone("5 5 5 1 2 3 4 5 6"));
    }

    #[test]
    fn phone_rejects_letters() {
        assert!(!validate_phone("555-123-4567x"));
        assert!(!validate_phone("call 5551234567"));
    }

    #[test]
    fn phone_rejects_inner_plus() {
        assert!(!validate_phone("555+1234567"));
    }

    #[test]
    fn email_accepts_standard_address() {
        assert!(validate_email("jane@x.com"));
        assert!(validate_email("first.last+tag@mail.example.org"));
    }

    #[test]
    fn email_rejects_missing_parts() {
        assert!(!validate_email("jane"));
        assert!(!validate_email("jane@"));
        assert!(!validate_email("@x.com"));
        assert!(!validate_email("jane@localhost"));
    }

    #[test]
    fn email_rejects_whitespace_and_double_at() {
        assert!(!validate_email("jane doe@x.com"));
        assert!(!validate_email("jane@@x.com"));
        assert!(!validate_email("jane@x@y.com"));
    }

    #[test]
    fn padded_values_are_rejected() {
        assert!(!validate_email(" jane@x.com\n"));
        assert!(!validate_phone("\t5551234567 "));
    }

    #[test]
    fn first_invalid_field_flags_padded_name() {
        let contact = Contact {
            name: " Jane ".into(),
            phone: "5551234567".into(),
            email: "jane@x.com".into(),
        };
        assert_eq!(first_invalid_field(&contact), Some(ContactField::Name));
    }

    #[test]
    fn check_contact_trims_fields() {
        let contact = check_contact("  Jane  ", " 5551234567 ", " jane@x.com ").unwrap();
        assert_eq!(contact.name, "Jane");
        assert_eq!(contact.phone, "5551234567");
        assert_eq!(contact.email, "jane@x.com");
    }

    #[test]
    fn check_contact_names_failing_field() {
        match check_contact("Jane", "555", "jane@x.com") {
            Err(RolodexError::Validation { field }) => assert_eq!(field, ContactField::Phone),
            other => panic!("expected phone validation error, got {:?}", other),
        }
        match check_contact("Jane", "5551234567", "nope") {
            Err(RolodexError::Validation { field }) => assert_eq!(field, ContactField::Email),
            other => panic!("expected email validation error, got {:?}", other),
        }
    }

    #[test]
    fn first_invalid_field_finds_bad_record() {
        let contact = Contact {
            name: "Jane".into(),
            phone: "5551234567".into(),
            email: "broken".into(),
        };
        assert_eq!(first_invalid_field(&contact), Some(ContactField::Email));
    }
}
