//! GetTimeSlotsHandler - Query handler for the slots of one date.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::booking::{
    format_date_for_display, AvailabilityEngine, BookingType, TimeSlot, UnavailableReason,
};

/// Query for the time slots of `date`.
#[derive(Debug, Clone, Copy)]
pub struct GetTimeSlotsQuery {
    pub booking_type: BookingType,
    pub date: NaiveDate,
}

/// Slots of a date plus whether the date itself can be booked.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTimeSlotsResult {
    pub booking_type: BookingType,
    pub date: NaiveDate,
    pub display_date: String,
    pub date_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unavailable_reason: Option<UnavailableReason>,
    pub slots: Vec<TimeSlot>,
}

/// Handler for the time-slots query.
pub struct GetTimeSlotsHandler {
    engine: Arc<AvailabilityEngine>,
}

impl GetTimeSlotsHandler {
    pub fn new(engine: Arc<AvailabilityEngine>) -> Self {
        Self { engine }
    }

    pub fn handle(&self, query: GetTimeSlotsQuery) -> GetTimeSlotsResult {
        let reason = self.engine.unavailable_reason(query.date, query.booking_type);

        GetTimeSlotsResult {
            booking_type: query.booking_type,
            date: query.date,
            display_date: format_date_for_display(query.date),
            date_available: reason.is_none(),
            unavailable_reason: reason,
            slots: self.engine.time_slots(query.date, query.booking_type),
        }
    }
}
