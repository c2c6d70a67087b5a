//! Business-hour time slots.

use chrono::{NaiveTime, Timelike};
use serde::Serialize;

/// First slot of the day starts at this hour.
pub const BUSINESS_OPEN_HOUR: u32 = 9;
/// Exclusive end of business hours; the last slot starts 30 minutes earlier.
pub const BUSINESS_CLOSE_HOUR: u32 = 17;
/// Slot granularity.
pub const SLOT_MINUTES: u32 = 30;
/// Number of slots in a business day.
pub const SLOTS_PER_DAY: usize =
    ((BUSINESS_CLOSE_HOUR - BUSINESS_OPEN_HOUR) * 60 / SLOT_MINUTES) as usize;

/// One bookable 30-minute interval on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    /// 24-hour "HH:MM" value submitted with a booking.
    pub value: String,
    /// 12-hour display label, e.g. "4:30 PM".
    pub label: String,
    pub available: bool,
}

impl TimeSlot {
    pub fn new(start: NaiveTime, available: bool) -> Self {
        Self {
            value: slot_value(start),
            label: slot_label(start),
            available,
        }
    }
}

/// Start times of every slot, 09:00 through 16:30.
pub fn slot_starts() -> impl Iterator<Item = NaiveTime> {
    (0..SLOTS_PER_DAY as u32).filter_map(|i| {
        let minutes = BUSINESS_OPEN_HOUR * 60 + i * SLOT_MINUTES;
        NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
    })
}

/// True when `time` is exactly the start of one of the business-hour slots.
pub fn is_slot_start(time: NaiveTime) -> bool {
    time.second() == 0
        && time.nanosecond() == 0
        && time.minute() % SLOT_MINUTES == 0
        && (BUSINESS_OPEN_HOUR..BUSINESS_CLOSE_HOUR).contains(&time.hour())
}

/// Parses a form time value ("HH:MM" or "HH:MM:SS").
pub fn parse_slot_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

pub fn slot_value(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

pub fn slot_label(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn sixteen_slots_from_nine_to_half_past_four() {
        let starts: Vec<_> = slot_starts().collect();
        assert_eq!(starts.len(), 16);
        assert_eq!(starts.first(), Some(&t(9, 0)));
        assert_eq!(starts.last(), Some(&t(16, 30)));
    }

    #[test]
    fn labels_use_twelve_hour_clock() {
        assert_eq!(slot_label(t(9, 0)), "9:00 AM");
        assert_eq!(slot_label(t(12, 0)), "12:00 PM");
        assert_eq!(slot_label(t(12, 30)), "12:30 PM");
        assert_eq!(slot_label(t(16, 30)), "4:30 PM");
    }

    #[test]
    fn values_are_zero_padded() {
        assert_eq!(slot_value(t(9, 30)), "09:30");
        assert_eq!(TimeSlot::new(t(14, 0), true).value, "14:00");
    }

    #[test]
    fn slot_start_checks_grid_and_hours() {
        assert!(is_slot_start(t(9, 0)));
        assert!(is_slot_start(t(16, 30)));
        assert!(!is_slot_start(t(17, 0)));
        assert!(!is_slot_start(t(8, 30)));
        assert!(!is_slot_start(t(10, 15)));
        assert!(!is_slot_start(NaiveTime::from_hms_opt(10, 0, 1).unwrap()));
    }

    #[test]
    fn parses_form_time_values() {
        assert_eq!(parse_slot_time("09:30"), Some(t(9, 30)));
        assert_eq!(parse_slot_time("14:00:00"), Some(t(14, 0)));
        assert_eq!(parse_slot_time("2pm"), None);
        assert_eq!(parse_slot_time(""), None);
    }
}
