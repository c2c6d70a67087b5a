//! GetAvailableDatesHandler - Query handler listing bookable dates.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::booking::{format_date_for_display, AvailabilityEngine, BookingType};

/// Query for the dates a booking type can be scheduled on.
#[derive(Debug, Clone, Copy)]
pub struct GetAvailableDatesQuery {
    pub booking_type: BookingType,
}

/// A bookable date with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailableDate {
    pub date: NaiveDate,
    pub label: String,
}

/// Result of the available-dates query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAvailableDatesResult {
    pub booking_type: BookingType,
    pub advance_notice_hours: i64,
    pub advance_notice_text: String,
    pub dates: Vec<AvailableDate>,
}

/// Handler for the available-dates query.
pub struct GetAvailableDatesHandler {
    engine: Arc<AvailabilityEngine>,
}

impl GetAvailableDatesHandler {
    pub fn new(engine: Arc<AvailabilityEngine>) -> Self {
        Self { engine }
    }

    pub fn handle(&self, query: GetAvailableDatesQuery) -> GetAvailableDatesResult {
        let dates = self
            .engine
            .available_dates(query.booking_type)
            .into_iter()
            .map(|date| AvailableDate {
                date,
                label: format_date_for_display(date),
            })
            .collect();

        GetAvailableDatesResult {
            booking_type: query.booking_type,
            advance_notice_hours: query.booking_type.advance_notice_hours(),
            advance_notice_text: query.booking_type.advance_notice_text(),
            dates,
        }
    }
}
