//! In-memory, name-keyed contact store.
//!
//! Lookups go through a `HashMap` index while the contacts themselves
//! live in a `Vec`, so iteration (and therefore export) always follows
//! first-created-first-listed order.

use crate::domain::{EmailAddress, PhoneNumber};
use crate::models::Contact;
use std::collections::HashMap;

/// The session's collection of contacts, keyed by case-sensitive name.
///
/// Contacts are created implicitly by the first successful add for an
/// unseen name and are never deleted, so every stored contact holds at
/// least one phone or email.
#[derive(Debug, Default)]
pub struct ContactStore {
    /// Contacts in creation order
    contacts: Vec<Contact>,

    /// Name -> position in `contacts`
    index: HashMap<String, usize>,
}

impl ContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of contacts in the store.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// True if the store holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Look up a contact by exact name.
    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.index.get(name).map(|&pos| &self.contacts[pos])
    }

    /// Append a phone number to the named contact, creating the contact
    /// on first use. The caller has already validated the number.
    pub fn add_phone(&mut self, name: &str, phone: PhoneNumber) {
        self.entry(name).add_phone(phone);
    }

    /// Append an email address to the named contact, creating the
    /// contact on first use.
    pub fn add_email(&mut self, name: &str, email: EmailAddress) {
        self.entry(name).add_email(email);
    }

    /// Contacts whose phone or email list contains `query` verbatim, in
    /// creation order. Exact string match only.
    pub fn find_by_value(&self, query: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|contact| contact.has_value(query))
            .collect()
    }

    /// Iterate all contacts in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    fn entry(&mut self, name: &str) -> &mut Contact {
        let pos = *self.index.entry(name.to_string()).or_insert_with(|| {
            self.contacts.push(Contact::new(name));
            self.contacts.len() - 1
        });
        &mut self.contacts[pos]
    }
}
