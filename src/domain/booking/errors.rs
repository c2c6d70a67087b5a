//! Booking error types.
//!
//! Every failure a visitor can see is reduced to [`FieldErrors`], a map from
//! form field to a human-readable message.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::domain::foundation::ErrorCode;

pub const DUPLICATE_EMAIL_MESSAGE: &str = "A booking with this email already exists. \
     Please use a different email address or contact support to modify your existing booking.";
pub const SUBMIT_FAILED_MESSAGE: &str =
    "Failed to submit booking. Please try again later or contact support.";

/// Form field an error is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BookingField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    BookingType,
    PreferredDate,
    PreferredTime,
    Message,
    /// Combined date and time, distinct from the two "required" checks.
    Datetime,
    /// Whole-form failure not attributable to a single field.
    Submit,
}

impl BookingField {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingField::FirstName => "firstName",
            BookingField::LastName => "lastName",
            BookingField::Email => "email",
            BookingField::PhoneNumber => "phoneNumber",
            BookingField::BookingType => "bookingType",
            BookingField::PreferredDate => "preferredDate",
            BookingField::PreferredTime => "preferredTime",
            BookingField::Message => "message",
            BookingField::Datetime => "datetime",
            BookingField::Submit => "submit",
        }
    }
}

impl fmt::Display for BookingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Field-keyed validation messages, one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<BookingField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// A map holding a single error.
    pub fn single(field: BookingField, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(field, message);
        errors
    }

    /// Records `message` for `field` unless the field already has one.
    pub fn insert(&mut self, field: BookingField, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: BookingField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: BookingField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> Vec<BookingField> {
        self.0.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BookingField, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(field, msg)| format!("{}: {}", field, msg)).collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Outcome of a rejected booking submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Booking validation failed: {0}")]
    Validation(FieldErrors),

    #[error("A booking with this email already exists")]
    DuplicateEmail,

    #[error("Booking rejected by store: {0}")]
    Rejected(String),

    #[error("Booking store unavailable: {0}")]
    Unavailable(String),
}

impl BookingError {
    /// Field-keyed view used by the form and the HTTP layer.
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            BookingError::Validation(errors) => errors.clone(),
            BookingError::DuplicateEmail => {
                FieldErrors::single(BookingField::Email, DUPLICATE_EMAIL_MESSAGE)
            }
            BookingError::Rejected(message) => FieldErrors::single(BookingField::Submit, message.clone()),
            BookingError::Unavailable(_) => {
                FieldErrors::single(BookingField::Submit, SUBMIT_FAILED_MESSAGE)
            }
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            BookingError::Validation(_) | BookingError::Rejected(_) => ErrorCode::ValidationFailed,
            BookingError::DuplicateEmail => ErrorCode::DuplicateEmail,
            BookingError::Unavailable(_) => ErrorCode::UpstreamUnavailable,
        }
    }
}

impl From<FieldErrors> for BookingError {
    fn from(errors: FieldErrors) -> Self {
        BookingError::Validation(errors)
    }
}
