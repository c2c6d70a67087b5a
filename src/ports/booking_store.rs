//! Booking store port.
//!
//! Persists accepted bookings. The store enforces one booking per email
//! address; a second create with the same (lowercased) email fails with
//! [`StoreError::DuplicateEmail`].

use async_trait::async_trait;

use crate::domain::booking::{BookingError, BookingRecord, NewBooking};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Persistence port for booking records.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Creates a pending booking and returns the stored record.
    ///
    /// # Errors
    ///
    /// - `DuplicateEmail` if a booking already exists for the email
    /// - `Rejected` if the store refused the request with a message
    /// - `Unavailable` on transport or backend failure
    async fn create(&self, booking: &NewBooking) -> Result<BookingRecord, StoreError>;
}

/// Errors returned by booking store implementations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Email already has a booking.
    #[error("a booking with this email already exists")]
    DuplicateEmail,

    /// Store refused the booking; the message is safe to show the visitor.
    #[error("booking rejected: {0}")]
    Rejected(String),

    /// Store could not be reached or failed internally.
    #[error("booking store unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for BookingError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => BookingError::DuplicateEmail,
            StoreError::Rejected(message) => BookingError::Rejected(message),
            StoreError::Unavailable(reason) => BookingError::Unavailable(reason),
        }
    }
}

impl From<DomainError> for StoreError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::DuplicateEmail => StoreError::DuplicateEmail,
            ErrorCode::ValidationFailed => StoreError::Rejected(err.message),
            _ => StoreError::Unavailable(err.to_string()),
        }
    }
}
