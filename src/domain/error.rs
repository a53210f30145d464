use thiserror::Error;

/// Core domain errors
///
/// Every variant except `Internal` is a caller-correctable outcome that the
/// HTTP layer maps to a specific status code.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Missing field '{field}': {message}")]
    MissingField { field: String, message: String },

    #[error("Invalid format for '{field}': {message}")]
    InvalidFormat { field: String, message: String },

    #[error("Email already exists: {email}")]
    DuplicateEmail { email: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn invalid_format(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            email: email.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether the caller can fix the request and retry
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Internal { .. })
    }
}
