//! Booking module - availability rules, form validation and notifications.
//!
//! # Module Organization
//!
//! - `booking_type` - Call vs. consultation policy (notice, message rule)
//! - `holiday` - Fixed closure-day table
//! - `slot` - 30-minute business-hour slots
//! - `availability` - Date and slot eligibility over an injected clock
//! - `submission` - Form input, validated booking, stored record
//! - `validation` - Field-keyed form validation
//! - `errors` - Field errors and submission failures
//! - `notification` - Team alert and customer confirmation payload

mod availability;
mod booking_type;
mod errors;
mod holiday;
mod notification;
mod slot;
mod submission;
mod validation;

pub use availability::{
    format_date_for_display, is_weekend, AvailabilityEngine, UnavailableReason, MAX_AVAILABLE_DATES,
    SCAN_WINDOW_DAYS,
};
pub use booking_type::BookingType;
pub use errors::{BookingError, BookingField, FieldErrors, DUPLICATE_EMAIL_MESSAGE, SUBMIT_FAILED_MESSAGE};
pub use holiday::{holidays_for_year, Holiday, HolidayCalendar};
pub use notification::BookingNotification;
pub use slot::{
    is_slot_start, parse_slot_time, slot_label, slot_starts, slot_value, TimeSlot, BUSINESS_CLOSE_HOUR,
    BUSINESS_OPEN_HOUR, SLOTS_PER_DAY, SLOT_MINUTES,
};
pub use submission::{BookingRecord, BookingStatus, BookingSubmission, NewBooking, ValidatedBooking};
pub use validation::{is_valid_email, is_valid_phone, sanitize, BookingValidator};
