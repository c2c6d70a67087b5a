//! Data Transfer Objects for booking endpoints.
//!
//! Availability responses reuse the query results directly; this module
//! holds the booking and error bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::booking::{BookingRecord, BookingStatus, BookingType, FieldErrors};
use crate::domain::foundation::BookingId;

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Summary of a created booking.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub id: BookingId,
    pub booking_type: BookingType,
    pub preferred_date: DateTime<Utc>,
    pub status: BookingStatus,
}

impl From<&BookingRecord> for BookingSummary {
    fn from(record: &BookingRecord) -> Self {
        Self {
            id: record.id,
            booking_type: record.booking_type,
            preferred_date: record.preferred_at,
            status: record.status,
        }
    }
}

/// Body of `201 Created` for a booking.
#[derive(Debug, Clone, Serialize)]
pub struct BookingResponse {
    pub booking: BookingSummary,
}

/// Field-keyed error body returned for rejected submissions.
#[derive(Debug, Clone, Serialize)]
pub struct FieldErrorsResponse {
    pub errors: FieldErrors,
}

/// Error body for malformed requests.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}
