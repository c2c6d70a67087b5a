//! Fixed holiday table.
//!
//! Dates are fixed month/day approximations (Memorial Day on May 29, Labor Day
//! on September 4, Thanksgiving on November 23) rather than nth-weekday rules.
//! The table covers a reference year and the year after it and never changes
//! once built.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// A named closure day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
}

const FIXED_HOLIDAYS: [(u32, u32, &str); 6] = [
    (1, 1, "New Year's Day"),
    (5, 29, "Memorial Day"),
    (7, 4, "Independence Day"),
    (9, 4, "Labor Day"),
    (11, 23, "Thanksgiving Day"),
    (12, 25, "Christmas Day"),
];

/// Holidays observed in a single calendar year.
pub fn holidays_for_year(year: i32) -> Vec<Holiday> {
    FIXED_HOLIDAYS
        .iter()
        .filter_map(|(month, day, name)| {
            NaiveDate::from_ymd_opt(year, *month, *day).map(|date| Holiday {
                date,
                name: (*name).to_string(),
            })
        })
        .collect()
}

/// Immutable holiday table for a reference year and the following year.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    holidays: Vec<Holiday>,
}

impl HolidayCalendar {
    /// Builds the table for `reference_year` and `reference_year + 1`.
    pub fn for_year(reference_year: i32) -> Self {
        let mut holidays = holidays_for_year(reference_year);
        holidays.extend(holidays_for_year(reference_year + 1));
        Self { holidays }
    }

    /// Builds the table around the year `today` falls in.
    pub fn around(today: NaiveDate) -> Self {
        Self::for_year(today.year())
    }

    /// Name of the holiday falling on `date`, if any.
    pub fn name_for(&self, date: NaiveDate) -> Option<&str> {
        self.holidays
            .iter()
            .find(|h| h.date == date)
            .map(|h| h.name.as_str())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.name_for(date).is_some()
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }
}
