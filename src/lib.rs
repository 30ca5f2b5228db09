//! Contact Book - an interactive command-line contact manager.
//!
//! This library implements the full pipeline behind the `contact-book`
//! binary: raw input line -> parser -> typed command -> executor ->
//! reply text, over an in-memory, insertion-ordered contact store with
//! validated phone and email fields and one-shot JSON export.
//!
//! # Architecture
//!
//! - **command**: parsing raw lines into the closed `Command` sum type
//! - **domain**: validated value objects (phone numbers, email addresses)
//! - **models**: the `Contact` record
//! - **store**: the in-memory, name-keyed contact store
//! - **executor**: applies commands to the store, producing outcomes
//! - **export**: JSON snapshot serialization
//! - **repl**: the interactive read-execute-print loop
//! - **config**: configuration from environment variables
//! - **error**: custom error types for precise error handling

// Re-export commonly used types
pub mod command;
pub mod config;
pub mod domain;
pub mod error;
pub mod executor;
pub mod export;
pub mod models;
pub mod repl;
pub mod store;

pub use command::{parse, Command};
pub use config::Config;
pub use domain::{EmailAddress, PhoneNumber, ValidationError};
pub use error::{ConfigError, ExportError};
pub use executor::{ContactBook, Outcome};
pub use models::Contact;
pub use repl::ReplSession;
pub use store::ContactStore;
