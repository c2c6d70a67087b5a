//! Axum router configuration for booking endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_booking, get_available_dates, get_time_slots, BookingAppState};

/// Booking API routes, relative to `/api`.
///
/// # Routes
/// - `GET /availability/:booking_type/dates` - Bookable dates
/// - `GET /availability/:booking_type/dates/:date/slots` - Slots of one date
/// - `POST /bookings` - Submit a booking
pub fn booking_routes() -> Router<BookingAppState> {
    Router::new()
        .route("/availability/:booking_type/dates", get(get_available_dates))
        .route(
            "/availability/:booking_type/dates/:date/slots",
            get(get_time_slots),
        )
        .route("/bookings", post(create_booking))
}

/// Booking router mounted at `/api`.
pub fn booking_router() -> Router<BookingAppState> {
    Router::new().nest("/api", booking_routes())
}
