//! Domain validation errors.

use std::fmt;

/// Errors that can occur during command field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty or whitespace-only.
    BlankField(&'static str),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankField(field) => write!(f, "{} must not be blank", field),
            Self::InvalidEmail(email) => write!(f, "invalid email format: {}", email),
            Self::InvalidPhone(phone) => write!(f, "invalid phone format: {}", phone),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check that a command field is not empty or whitespace-only.
pub fn require_non_blank(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField(field));
    }
    Ok(())
}
