//! Command execution against the contact store.
//!
//! The executor is the only writer of the store. Every command produces
//! exactly one [`Outcome`]; nothing escapes as a panic or an error.
//! Validation failures, lookup misses, and export IO failures all come
//! back as reply text, and only `exit` terminates the session.

use crate::command::Command;
use crate::domain::{EmailAddress, PhoneNumber, ValidationError};
use crate::export;
use crate::store::ContactStore;

/// Static help listing: command, one-line description, example where
/// applicable.
const HELP_TEXT: &str = "\
Available commands:
  exit                        Exit the program
  help                        Show this message
  add <name> phone <number>   Add a phone number (example: add Alice phone +123456789)
  add <name> email <address>  Add an email address (example: add Alice email alice@example.com)
  show <name>                 Show a contact's phones and emails
  find <value>                Find contacts by exact phone number or email
  export <path>               Export all contacts to a JSON file";

/// The result of executing one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Reply text; the session continues.
    Reply(String),

    /// Farewell text; the session should terminate.
    Terminate(String),
}

impl Outcome {
    /// The text to display, whichever variant this is.
    pub fn message(&self) -> &str {
        match self {
            Self::Reply(message) | Self::Terminate(message) => message,
        }
    }

    /// True if the session should end after this outcome.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminate(_))
    }
}

/// The contact store together with the command executor that drives it.
#[derive(Debug, Default)]
pub struct ContactBook {
    store: ContactStore,
}

impl ContactBook {
    /// Create a contact book with an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the underlying store.
    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    /// Validate and execute one command.
    ///
    /// Commands that fail their validity predicate are rejected with the
    /// specific reason and leave the store untouched.
    pub fn execute(&mut self, command: Command) -> Outcome {
        tracing::debug!(?command, "Executing command");

        if let Err(reason) = command.validate() {
            return Self::reject(reason);
        }

        match command {
            Command::Exit => Outcome::Terminate("Goodbye.".to_string()),
            Command::Help => Outcome::Reply(HELP_TEXT.to_string()),
            Command::AddPhone { name, phone } => match PhoneNumber::new(phone) {
                Ok(phone) => {
                    let reply = format!("Added phone {} to {}.", phone, name);
                    self.store.add_phone(&name, phone);
                    Outcome::Reply(reply)
                }
                // validate() has already accepted the format
                Err(reason) => Self::reject(reason),
            },
            Command::AddEmail { name, email } => match EmailAddress::new(email) {
                Ok(email) => {
                    let reply = format!("Added email {} to {}.", email, name);
                    self.store.add_email(&name, email);
                    Outcome::Reply(reply)
                }
                Err(reason) => Self::reject(reason),
            },
            Command::Show { name } => match self.store.get(&name) {
                Some(contact) => Outcome::Reply(format!(
                    "Contact {}: phones [{}], emails [{}]",
                    contact.name,
                    join(contact.phones.iter().map(|p| p.as_str())),
                    join(contact.emails.iter().map(|e| e.as_str())),
                )),
                None => Outcome::Reply(format!("Contact {} not found.", name)),
            },
            Command::Find { query } => {
                let found = self.store.find_by_value(&query);
                if found.is_empty() {
                    Outcome::Reply("No contacts with that phone or email.".to_string())
                } else {
                    Outcome::Reply(format!(
                        "Found contacts: {}",
                        join(found.iter().map(|c| c.name.as_str()))
                    ))
                }
            }
            Command::Export { path } => match export::write_snapshot(&self.store, &path) {
                Ok(()) => Outcome::Reply(format!("Exported contacts to {}.", path)),
                Err(err) => {
                    tracing::warn!(%err, "Export failed");
                    Outcome::Reply(format!("Error: {}", err))
                }
            },
        }
    }

    fn reject(reason: ValidationError) -> Outcome {
        tracing::debug!(%reason, "Command failed validation");
        Outcome::Reply(format!("Error: {}", reason))
    }
}

fn join<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.collect::<Vec<_>>().join(", ")
}
