//! Booking type definitions.
//!
//! The booking type is the single source of the advance-notice policy. Every
//! availability and validation check asks [`BookingType::advance_notice_hours`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Kind of session a visitor can book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingType {
    /// Short discovery call.
    /// - 24 hours advance notice
    /// - Message optional
    Call,

    /// Strategy consultation.
    /// - 48 hours advance notice
    /// - Message describing the customer's needs is required
    Consultation,
}

impl BookingType {
    pub const ALL: [BookingType; 2] = [BookingType::Call, BookingType::Consultation];

    /// Minimum lead time between "now" and a bookable slot.
    pub fn advance_notice_hours(&self) -> i64 {
        match self {
            BookingType::Call => 24,
            BookingType::Consultation => 48,
        }
    }

    /// Human-readable notice requirement, e.g. "at least 24 hours in advance".
    pub fn advance_notice_text(&self) -> String {
        format!("at least {} hours in advance", self.advance_notice_hours())
    }

    /// Returns true if the free-text message must be filled in.
    pub fn requires_message(&self) -> bool {
        matches!(self, BookingType::Consultation)
    }

    /// Returns the display label for this booking type.
    pub fn label(&self) -> &'static str {
        match self {
            BookingType::Call => "Discovery Call",
            BookingType::Consultation => "Free Consultation",
        }
    }

    /// Informational session length.
    pub fn duration_text(&self) -> &'static str {
        match self {
            BookingType::Call => "15 minutes",
            BookingType::Consultation => "30 minutes",
        }
    }

    /// Wire name (`"call"` / `"consultation"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingType::Call => "call",
            BookingType::Consultation => "consultation",
        }
    }
}

impl fmt::Display for BookingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(BookingType::Call),
            "consultation" => Ok(BookingType::Consultation),
            _ => Err(ValidationError::invalid_format(
                "bookingType",
                "must be \"call\" or \"consultation\"",
            )),
        }
    }
}
