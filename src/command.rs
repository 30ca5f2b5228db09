//! Command grammar: parsing raw input lines into typed commands.
//!
//! Parsing is pure and total: every line maps to exactly one [`Command`],
//! and anything unrecognized degrades to [`Command::Help`] instead of
//! failing. Field validation is a separate, equally pure step
//! ([`Command::validate`]) so that validity is a function of the command
//! alone, never of store state.

use crate::domain::errors::require_non_blank;
use crate::domain::{EmailAddress, PhoneNumber, ValidationError};

/// A parsed, typed representation of one user-issued instruction.
///
/// This is a closed set: the executor matches exhaustively, so adding a
/// variant is a compile-time-checked change everywhere it is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Terminate the session
    Exit,

    /// Show the command listing
    Help,

    /// Add a phone number to a (possibly new) contact
    AddPhone { name: String, phone: String },

    /// Add an email address to a (possibly new) contact
    AddEmail { name: String, email: String },

    /// Show one contact's full record
    Show { name: String },

    /// Find contacts holding a phone or email equal to the query
    Find { query: String },

    /// Write a JSON snapshot of all contacts to a file
    Export { path: String },
}

/// Parse one raw input line into a [`Command`].
///
/// Tokenization splits on single spaces with no quoting or escaping; a
/// name or value containing a space truncates to its first token. This
/// matches the historical behavior and is deliberate.
///
/// Dispatch precedence:
/// 1. whole line `exit` (case-insensitive)
/// 2. whole line `help` (case-insensitive)
/// 3. `show <name>` / `find <query>` / `export <path>`, exactly 2 tokens
/// 4. `add <name> phone|email <value>`, at least 4 tokens
/// 5. everything else falls back to `Help`
pub fn parse(line: &str) -> Command {
    let tokens: Vec<&str> = line.split(' ').collect();

    if line.eq_ignore_ascii_case("exit") {
        return Command::Exit;
    }
    if line.eq_ignore_ascii_case("help") {
        return Command::Help;
    }
    if tokens.len() == 2 {
        let keyword = tokens[0];
        if keyword.eq_ignore_ascii_case("show") {
            return Command::Show {
                name: tokens[1].to_string(),
            };
        }
        if keyword.eq_ignore_ascii_case("find") {
            return Command::Find {
                query: tokens[1].to_string(),
            };
        }
        if keyword.eq_ignore_ascii_case("export") {
            return Command::Export {
                path: tokens[1].to_string(),
            };
        }
    }
    if line.starts_with("add ") && tokens.len() >= 4 {
        let name = tokens[1].to_string();
        let value = tokens[3].to_string();
        return match tokens[2].to_lowercase().as_str() {
            "phone" => Command::AddPhone { name, phone: value },
            "email" => Command::AddEmail { name, email: value },
            _ => Command::Help,
        };
    }

    Command::Help
}

impl Command {
    /// Check this command's validity predicate.
    ///
    /// Pure and stateless: the result depends only on the command's own
    /// fields. `Exit` and `Help` are always valid; `show`/`find`/`export`
    /// require a non-blank argument; the add commands require a
    /// well-formed phone or email.
    ///
    /// # Errors
    ///
    /// Returns the specific [`ValidationError`] for the failing field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Exit | Self::Help => Ok(()),
            Self::AddPhone { phone, .. } => {
                if !PhoneNumber::is_valid(phone) {
                    return Err(ValidationError::InvalidPhone(phone.clone()));
                }
                Ok(())
            }
            Self::AddEmail { email, .. } => {
                if !EmailAddress::is_valid(email) {
                    return Err(ValidationError::InvalidEmail(email.clone()));
                }
                Ok(())
            }
            Self::Show { name } => require_non_blank(name, "name"),
            Self::Find { query } => require_non_blank(query, "query"),
            Self::Export { path } => require_non_blank(path, "path"),
        }
    }
}
