//! Calendar availability engine.
//!
//! Computes which dates and time slots can be booked for a [`BookingType`].
//! All calendar arithmetic happens in the business timezone, a fixed UTC
//! offset shared by the engine, the slot picker and the validator. "Now" is
//! read from the injected [`Clock`] once per top-level call, so two calls can
//! disagree if the clock moves between them.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc, Weekday};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use super::booking_type::BookingType;
use super::holiday::HolidayCalendar;
use super::slot::{slot_starts, TimeSlot};
use crate::domain::foundation::Clock;

/// Upper bound on dates returned by [`AvailabilityEngine::available_dates`].
pub const MAX_AVAILABLE_DATES: usize = 60;
/// Calendar days scanned when collecting available dates.
pub const SCAN_WINDOW_DAYS: i64 = 90;

/// Why a date cannot be booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnavailableReason {
    Weekend,
    Holiday { name: String },
    InsufficientNotice,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnavailableReason::Weekend => write!(f, "Weekend"),
            UnavailableReason::Holiday { name } => write!(f, "{}", name),
            UnavailableReason::InsufficientNotice => write!(f, "Not available"),
        }
    }
}

/// Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Long display form, e.g. "Monday, June 3, 2024".
pub fn format_date_for_display(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Pure availability rules over an injected clock and a fixed holiday table.
pub struct AvailabilityEngine {
    clock: Arc<dyn Clock>,
    zone: FixedOffset,
    holidays: HolidayCalendar,
}

impl AvailabilityEngine {
    /// Creates an engine whose holiday table covers the current business year
    /// and the next one.
    pub fn new(clock: Arc<dyn Clock>, zone: FixedOffset) -> Self {
        let today = clock.now().with_timezone(&zone).date_naive();
        Self {
            holidays: HolidayCalendar::around(today),
            clock,
            zone,
        }
    }

    /// Creates an engine with an explicit holiday table.
    pub fn with_holidays(clock: Arc<dyn Clock>, zone: FixedOffset, holidays: HolidayCalendar) -> Self {
        Self {
            clock,
            zone,
            holidays,
        }
    }

    pub fn zone(&self) -> FixedOffset {
        self.zone
    }

    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    /// Current wall time in the business timezone.
    pub fn local_now(&self) -> NaiveDateTime {
        self.clock.now().with_timezone(&self.zone).naive_local()
    }

    /// Converts a business-local date/time to its absolute instant.
    pub fn to_instant(&self, local: NaiveDateTime) -> DateTime<Utc> {
        let utc = local - Duration::seconds(i64::from(self.zone.local_minus_utc()));
        Utc.from_utc_datetime(&utc)
    }

    /// Earliest local instant a booking of this type may start after
    /// (exclusive) when "now" is `now`.
    pub fn notice_threshold(&self, booking_type: BookingType, now: NaiveDateTime) -> NaiveDateTime {
        now + Duration::hours(booking_type.advance_notice_hours())
    }

    /// True when the local instant is strictly after now + advance notice.
    pub fn meets_notice(&self, booking_type: BookingType, at: NaiveDateTime, now: NaiveDateTime) -> bool {
        at > self.notice_threshold(booking_type, now)
    }

    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        is_weekend(date)
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(date)
    }

    pub fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        self.holidays.name_for(date)
    }

    /// Day-granularity eligibility of a date.
    ///
    /// A date is either fully eligible or fully excluded; finer filtering of
    /// individual slots is left to [`AvailabilityEngine::time_slots`].
    pub fn is_date_available(&self, date: NaiveDate, booking_type: BookingType) -> bool {
        self.unavailable_reason(date, booking_type).is_none()
    }

    /// Reason a date is excluded, or `None` if it can be booked.
    pub fn unavailable_reason(&self, date: NaiveDate, booking_type: BookingType) -> Option<UnavailableReason> {
        self.unavailable_reason_at(date, booking_type, self.local_now())
    }

    /// Same as [`AvailabilityEngine::unavailable_reason`] against a caller-supplied "now".
    pub fn unavailable_reason_at(
        &self,
        date: NaiveDate,
        booking_type: BookingType,
        now: NaiveDateTime,
    ) -> Option<UnavailableReason> {
        if is_weekend(date) {
            return Some(UnavailableReason::Weekend);
        }
        if let Some(name) = self.holiday_name(date) {
            return Some(UnavailableReason::Holiday {
                name: name.to_string(),
            });
        }
        if date < self.notice_threshold(booking_type, now).date() {
            return Some(UnavailableReason::InsufficientNotice);
        }
        None
    }

    /// Bookable dates in increasing order, scanning forward from today.
    pub fn available_dates(&self, booking_type: BookingType) -> Vec<NaiveDate> {
        let now = self.local_now();
        let today = now.date();

        (0..SCAN_WINDOW_DAYS)
            .map(|offset| today + Duration::days(offset))
            .filter(|date| self.unavailable_reason_at(*date, booking_type, now).is_none())
            .take(MAX_AVAILABLE_DATES)
            .collect()
    }

    /// All 16 business-hour slots of `date`, flagged by advance notice.
    pub fn time_slots(&self, date: NaiveDate, booking_type: BookingType) -> Vec<TimeSlot> {
        let now = self.local_now();

        slot_starts()
            .map(|start| {
                let available = self.meets_notice(booking_type, date.and_time(start), now);
                TimeSlot::new(start, available)
            })
            .collect()
    }
}
