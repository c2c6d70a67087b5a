//! Booking handlers.
//!
//! ## Commands
//! - Submitting a booking form
//!
//! ## Queries
//! - Available dates for a booking type
//! - Time slots of a date

mod get_available_dates;
mod get_time_slots;
mod submit_booking;

// Commands
pub use submit_booking::{
    NotificationTask, SubmitBookingCommand, SubmitBookingHandler, SubmitBookingResult,
    DEFAULT_STORE_TIMEOUT,
};

// Queries
pub use get_available_dates::{
    AvailableDate, GetAvailableDatesHandler, GetAvailableDatesQuery, GetAvailableDatesResult,
};
pub use get_time_slots::{GetTimeSlotsHandler, GetTimeSlotsQuery, GetTimeSlotsResult};
