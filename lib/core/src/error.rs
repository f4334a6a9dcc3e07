use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Catalog source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Entry already exists: {name} at {address}")]
    Duplicate { name: String, address: String },
}

impl Error {
    /// True for errors caused by the caller's input rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::Duplicate { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationErrorKind {
    NotANumber,
    OutOfRange,
    Required,
}

/// A rejected input field, with the reason it was rejected
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, field: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            field,
            message: message.into(),
        }
    }

    pub fn not_a_number(field: &'static str) -> Self {
        Self::new(ValidationErrorKind::NotANumber, field, "expected a number")
    }

    pub fn required(field: &'static str) -> Self {
        Self::new(ValidationErrorKind::Required, field, "is required")
    }

    pub fn out_of_range(field: &'static str, message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::OutOfRange, field, message)
    }
}
