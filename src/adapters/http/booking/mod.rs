//! HTTP adapter for booking endpoints.
//!
//! - `GET /api/availability/:booking_type/dates` - Bookable dates
//! - `GET /api/availability/:booking_type/dates/:date/slots` - Slots of a date
//! - `POST /api/bookings` - Submit a booking

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{BookingApiError, BookingAppState};
pub use routes::{booking_router, booking_routes};
