//! User validation utilities

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::domain::DomainError;

/// `local@domain.tld`: one `@`, no whitespace, dotted domain with non-empty labels
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").expect("email pattern is a valid regex")
});

/// Fields of a user record that callers supply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Name,
    Email,
    Department,
}

impl UserField {
    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Department => "department",
        }
    }

    /// Human-readable label used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Department => "Department",
        }
    }
}

impl std::fmt::Display for UserField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("{} is required", .0.label())]
    MissingField(UserField),

    #[error("Invalid email format")]
    InvalidEmail(String),
}

impl From<UserValidationError> for DomainError {
    fn from(err: UserValidationError) -> Self {
        match &err {
            UserValidationError::MissingField(field) => {
                DomainError::missing_field(field.as_str(), err.to_string())
            }
            UserValidationError::InvalidEmail(_) => {
                DomainError::invalid_format(UserField::Email.as_str(), err.to_string())
            }
        }
    }
}

/// Require a non-empty value for `field`
pub fn require_non_empty(field: UserField, value: &str) -> Result<(), UserValidationError> {
    if value.is_empty() {
        return Err(UserValidationError::MissingField(field));
    }

    Ok(())
}

/// Require `value` to look like an email address
///
/// Rules:
/// - Exactly one `@` with a non-empty local part
/// - No whitespace anywhere
/// - Domain has at least one `.` and no empty labels
pub fn require_valid_email(value: &str) -> Result<(), UserValidationError> {
    if !EMAIL_PATTERN.is_match(value) {
        return Err(UserValidationError::InvalidEmail(value.to_string()));
    }

    Ok(())
}
