//! Error types shared across the domain.

use std::fmt;
use thiserror::Error;

/// A value that could not be parsed or a move a state machine refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("'{field}' is required")]
    Required { field: String },

    #[error("'{field}' is invalid: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("cannot move from {from} to {to}")]
    InvalidTransition { from: String, to: String },
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required { field: field.into() }
    }

    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_transition(from: impl fmt::Debug, to: impl fmt::Debug) -> Self {
        ValidationError::InvalidTransition {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }
}

/// Stable error codes, used in logs and API bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationFailed,
    DuplicateEmail,
    DatabaseError,
    UpstreamUnavailable,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::DuplicateEmail => "DUPLICATE_EMAIL",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::UpstreamUnavailable => "UPSTREAM_UNAVAILABLE",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised by infrastructure code before it is mapped onto a port error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{code}] {message}")]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
}

impl DomainError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::new(ErrorCode::ValidationFailed, err.to_string())
    }
}
