//! Contact model representing one named entry in the book.

use crate::domain::{EmailAddress, PhoneNumber};
use serde::{Deserialize, Serialize};

/// A named contact holding zero-or-more phone numbers and email addresses.
///
/// The name acts as the unique key (case-sensitive). Phones and emails
/// keep insertion order and permit duplicates. Values are stored as
/// validated domain types, so an invalid phone or email is
/// unrepresentable here; both serialize as plain JSON strings, which
/// makes the serialized form of a `Contact` exactly one element of the
/// export snapshot:
///
/// ```json
/// {"name":"Alice","phones":["+123456789"],"emails":["alice@example.com"]}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Unique, case-sensitive contact name
    pub name: String,

    /// Phone numbers in insertion order (duplicates allowed)
    pub phones: Vec<PhoneNumber>,

    /// Email addresses in insertion order (duplicates allowed)
    pub emails: Vec<EmailAddress>,
}

impl Contact {
    /// Create an empty contact with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            emails: Vec::new(),
        }
    }

    /// Append a phone number, preserving insertion order.
    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Append an email address, preserving insertion order.
    pub fn add_email(&mut self, email: EmailAddress) {
        self.emails.push(email);
    }

    /// True if any phone or email equals `value` exactly.
    pub fn has_value(&self, value: &str) -> bool {
        self.phones.iter().any(|p| p.as_str() == value)
            || self.emails.iter().any(|e| e.as_str() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone(s: &str) -> PhoneNumber {
        PhoneNumber::new(s).unwrap()
    }

    fn email(s: &str) -> EmailAddress {
        EmailAddress::new(s).unwrap()
    }

    #[test]
    fn test_contact_accumulates_values_in_order() {
        let mut contact = Contact::new("Alice");
        contact.add_phone(phone("+111"));
        contact.add_phone(phone("+222"));
        contact.add_phone(phone("+111")); // duplicates allowed
        contact.add_email(email("alice@example.com"));

        let phones: Vec<&str> = contact.phones.iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["+111", "+222", "+111"]);
        assert_eq!(contact.emails.len(), 1);
    }

    #[test]
    fn test_contact_has_value() {
        let mut contact = Contact::new("Alice");
        contact.add_phone(phone("+123456789"));
        contact.add_email(email("alice@example.com"));

        assert!(contact.has_value("+123456789"));
        assert!(contact.has_value("alice@example.com"));
        assert!(!contact.has_value("+999"));
        assert!(!contact.has_value("Alice")); // names are not searched values
    }

    #[test]
    fn test_contact_serializes_to_export_shape() {
        let mut contact = Contact::new("Alice");
        contact.add_phone(phone("+123456789"));
        contact.add_email(email("alice@example.com"));

        let json = serde_json::to_string(&contact).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Alice","phones":["+123456789"],"emails":["alice@example.com"]}"#
        );
    }

    #[test]
    fn test_contact_round_trips_through_json() {
        let mut contact = Contact::new("Alice");
        contact.add_phone(phone("+123456789"));

        let json = serde_json::to_string(&contact).unwrap();
        let back: Contact = serde_json::from_str(&json).unwrap();
        assert_eq!(back, contact);
    }
}
