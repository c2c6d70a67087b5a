//! HTTP handlers for booking endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::NaiveDate;

use crate::application::handlers::booking::{
    GetAvailableDatesHandler, GetAvailableDatesQuery, GetTimeSlotsHandler, GetTimeSlotsQuery,
    SubmitBookingCommand, SubmitBookingHandler,
};
use crate::domain::booking::{
    AvailabilityEngine, BookingError, BookingField, BookingSubmission, BookingType, FieldErrors,
};
use crate::domain::foundation::ValidationError;

use super::dto::{BookingResponse, BookingSummary, ErrorResponse, FieldErrorsResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for booking endpoints.
#[derive(Clone)]
pub struct BookingAppState {
    pub engine: Arc<AvailabilityEngine>,
    pub submit_handler: Arc<SubmitBookingHandler>,
}

impl BookingAppState {
    pub fn new(engine: Arc<AvailabilityEngine>, submit_handler: Arc<SubmitBookingHandler>) -> Self {
        Self {
            engine,
            submit_handler,
        }
    }

    pub fn available_dates_handler(&self) -> GetAvailableDatesHandler {
        GetAvailableDatesHandler::new(self.engine.clone())
    }

    pub fn time_slots_handler(&self) -> GetTimeSlotsHandler {
        GetTimeSlotsHandler::new(self.engine.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/availability/:booking_type/dates
pub async fn get_available_dates(
    State(state): State<BookingAppState>,
    Path(booking_type): Path<String>,
) -> Result<impl IntoResponse, BookingApiError> {
    let booking_type: BookingType = booking_type.parse()?;
    let result = state
        .available_dates_handler()
        .handle(GetAvailableDatesQuery { booking_type });
    Ok(Json(result))
}

/// GET /api/availability/:booking_type/dates/:date/slots
pub async fn get_time_slots(
    State(state): State<BookingAppState>,
    Path((booking_type, date)): Path<(String, String)>,
) -> Result<impl IntoResponse, BookingApiError> {
    let booking_type: BookingType = booking_type.parse()?;
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|_| {
        BookingApiError::InvalidRequest(ValidationError::invalid_format("date", "expected YYYY-MM-DD"))
    })?;

    let result = state
        .time_slots_handler()
        .handle(GetTimeSlotsQuery { booking_type, date });
    Ok(Json(result))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/bookings - Submit a booking
pub async fn create_booking(
    State(state): State<BookingAppState>,
    payload: Result<Json<BookingSubmission>, JsonRejection>,
) -> Result<impl IntoResponse, BookingApiError> {
    let Json(submission) = payload?;
    let result = state
        .submit_handler
        .handle(SubmitBookingCommand { submission })
        .await?;

    // Notification keeps running detached.
    let response = BookingResponse {
        booking: BookingSummary::from(&result.record),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

const INVALID_BOOKING_TYPE_MESSAGE: &str = "Please choose a discovery call or a free consultation";
const INVALID_BODY_MESSAGE: &str = "The booking request could not be read";

/// API error mapped to an HTTP response.
#[derive(Debug)]
pub enum BookingApiError {
    /// Malformed path parameter.
    InvalidRequest(ValidationError),
    /// Rejected submission.
    Booking(BookingError),
}

impl From<ValidationError> for BookingApiError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidRequest(err)
    }
}

/// Unreadable bodies become form errors so the client always sees `{errors}`.
impl From<JsonRejection> for BookingApiError {
    fn from(rejection: JsonRejection) -> Self {
        let detail = rejection.body_text();
        tracing::debug!(detail = %detail, "Rejected booking body");

        let errors = if detail.contains(BookingField::BookingType.as_str()) {
            FieldErrors::single(BookingField::BookingType, INVALID_BOOKING_TYPE_MESSAGE)
        } else {
            FieldErrors::single(BookingField::Submit, INVALID_BODY_MESSAGE)
        };
        Self::Booking(BookingError::Validation(errors))
    }
}

impl From<BookingError> for BookingApiError {
    fn from(err: BookingError) -> Self {
        Self::Booking(err)
    }
}

impl IntoResponse for BookingApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            BookingApiError::InvalidRequest(err) => {
                let body = ErrorResponse::new("INVALID_REQUEST", err.to_string());
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            BookingApiError::Booking(err) => {
                let status = match &err {
                    BookingError::Validation(_) | BookingError::Rejected(_) => StatusCode::BAD_REQUEST,
                    BookingError::DuplicateEmail => StatusCode::CONFLICT,
                    BookingError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                let body = FieldErrorsResponse {
                    errors: err.field_errors(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}
