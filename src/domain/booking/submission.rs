//! Booking submission, its validated form, and the persisted record.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::booking_type::BookingType;
use super::slot::slot_value;
use crate::domain::foundation::{BookingId, Timestamp, ValidationError};

/// Raw booking form as entered by the visitor.
///
/// Date and time stay as form strings; the validator owns parsing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSubmission {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    pub booking_type: BookingType,
    #[serde(default)]
    pub preferred_date: String,
    #[serde(default)]
    pub preferred_time: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Submission that passed validation, with normalized fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedBooking {
    pub first_name: String,
    pub last_name: String,
    /// Trimmed and lowercased.
    pub email: String,
    pub phone_number: Option<String>,
    pub booking_type: BookingType,
    /// Business-local calendar date.
    pub preferred_date: NaiveDate,
    /// Business-local slot start.
    pub preferred_time: NaiveTime,
    /// Absolute instant of the slot start.
    pub preferred_at: DateTime<Utc>,
    pub message: Option<String>,
}

impl ValidatedBooking {
    pub fn customer_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Store request for this booking.
    pub fn to_new_booking(&self) -> NewBooking {
        NewBooking {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            booking_type: self.booking_type,
            preferred_at: self.preferred_at,
            preferred_time: slot_value(self.preferred_time),
            message: self.message.clone(),
        }
    }
}

/// Request handed to the booking store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub booking_type: BookingType,
    /// Date and time combined into one instant.
    #[serde(rename = "preferredDate")]
    pub preferred_at: DateTime<Utc>,
    pub preferred_time: String,
    pub message: Option<String>,
}

/// Lifecycle status of a stored booking. New bookings are always pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown booking status '{}'", other),
            )),
        }
    }
}

/// Persisted booking. Created once per accepted submission, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub id: BookingId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub booking_type: BookingType,
    #[serde(rename = "preferredDate")]
    pub preferred_at: DateTime<Utc>,
    pub preferred_time: String,
    pub message: Option<String>,
    pub status: BookingStatus,
    pub created_at: Timestamp,
}

impl BookingRecord {
    /// Materializes a pending record for a store request.
    pub fn pending(id: BookingId, booking: NewBooking, created_at: Timestamp) -> Self {
        Self {
            id,
            first_name: booking.first_name,
            last_name: booking.last_name,
            email: booking.email,
            phone_number: booking.phone_number,
            booking_type: booking.booking_type,
            preferred_at: booking.preferred_at,
            preferred_time: booking.preferred_time,
            message: booking.message,
            status: BookingStatus::Pending,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn validated() -> ValidatedBooking {
        ValidatedBooking {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@example.com".into(),
            phone_number: None,
            booking_type: BookingType::Call,
            preferred_date: NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
            preferred_time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            preferred_at: Utc.with_ymd_and_hms(2024, 6, 5, 9, 30, 0).unwrap(),
            message: None,
        }
    }

    #[test]
    fn submission_deserializes_from_camel_case() {
        let json = r#"{
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@example.com",
            "bookingType": "consultation",
            "preferredDate": "2024-06-05",
            "preferredTime": "10:00",
            "message": "Automate invoicing"
        }"#;
        let submission: BookingSubmission = serde_json::from_str(json).unwrap();

        assert_eq!(submission.booking_type, BookingType::Consultation);
        assert_eq!(submission.phone_number, None);
        assert_eq!(submission.preferred_time, "10:00");
    }

    #[test]
    fn missing_text_fields_default_to_empty() {
        let submission: BookingSubmission = serde_json::from_str(r#"{"bookingType":"call"}"#).unwrap();
        assert!(submission.first_name.is_empty());
        assert!(submission.preferred_date.is_empty());
    }

    #[test]
    fn new_booking_combines_date_and_time() {
        let request = validated().to_new_booking();
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["preferredDate"], "2024-06-05T09:30:00Z");
        assert_eq!(json["preferredTime"], "09:30");
        assert_eq!(json["bookingType"], "call");
        assert!(json["phoneNumber"].is_null());
    }

    #[test]
    fn pending_record_copies_request() {
        let id = BookingId::new();
        let record = BookingRecord::pending(id, validated().to_new_booking(), Timestamp::now());

        assert_eq!(record.id, id);
        assert_eq!(record.status, BookingStatus::Pending);
        assert_eq!(record.email, "jane@example.com");
    }

    #[test]
    fn customer_name_joins_first_and_last() {
        assert_eq!(validated().customer_name(), "Jane Doe");
    }

    #[test]
    fn status_round_trips_through_str() {
        assert_eq!("pending".parse::<BookingStatus>(), Ok(BookingStatus::Pending));
        assert!("cancelled".parse::<BookingStatus>().is_err());
    }
}
