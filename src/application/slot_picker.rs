//! Date and time selection for the booking form.
//!
//! Selecting a date always clears the selected time. Slots are only computed
//! once a date is chosen; until then the time selector is disabled. Every
//! eligibility rule is delegated to [`AvailabilityEngine`].

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::domain::booking::{
    parse_slot_time, slot_value, AvailabilityEngine, BookingType, TimeSlot, UnavailableReason,
};

/// Selection refused by the picker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    #[error("date {date} is not available: {reason}")]
    DateUnavailable { date: NaiveDate, reason: UnavailableReason },

    #[error("select a date first")]
    NoDateSelected,

    #[error("'{0}' is not a time slot")]
    UnknownSlot(String),

    #[error("the {0} slot is not available")]
    SlotUnavailable(String),
}

/// Picker state for one booking type.
pub struct SlotPicker {
    engine: Arc<AvailabilityEngine>,
    booking_type: BookingType,
    dates: Vec<NaiveDate>,
    slots: Vec<TimeSlot>,
    selected_date: Option<NaiveDate>,
    selected_time: Option<NaiveTime>,
}

impl SlotPicker {
    pub fn new(engine: Arc<AvailabilityEngine>, booking_type: BookingType) -> Self {
        let dates = engine.available_dates(booking_type);
        Self {
            engine,
            booking_type,
            dates,
            slots: Vec::new(),
            selected_date: None,
            selected_time: None,
        }
    }

    pub fn booking_type(&self) -> BookingType {
        self.booking_type
    }

    /// Switches booking type; the notice policy changes so selections are dropped.
    pub fn set_booking_type(&mut self, booking_type: BookingType) {
        if self.booking_type != booking_type {
            self.booking_type = booking_type;
            self.reset();
        }
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Slots of the selected date; empty until a date is chosen.
    pub fn time_slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn selected_time(&self) -> Option<NaiveTime> {
        self.selected_time
    }

    /// Selected time as a form value ("HH:MM").
    pub fn selected_time_value(&self) -> Option<String> {
        self.selected_time.map(slot_value)
    }

    pub fn is_time_selector_enabled(&self) -> bool {
        self.selected_date.is_some()
    }

    pub fn select_date(&mut self, date: NaiveDate) -> Result<(), PickerError> {
        self.selected_time = None;

        if let Some(reason) = self.engine.unavailable_reason(date, self.booking_type) {
            return Err(PickerError::DateUnavailable { date, reason });
        }

        self.selected_date = Some(date);
        self.slots = self.engine.time_slots(date, self.booking_type);
        Ok(())
    }

    /// Selects the slot whose value is `value` ("HH:MM").
    pub fn select_time(&mut self, value: &str) -> Result<(), PickerError> {
        if self.selected_date.is_none() {
            return Err(PickerError::NoDateSelected);
        }

        let time = parse_slot_time(value).ok_or_else(|| PickerError::UnknownSlot(value.to_string()))?;
        let wanted = slot_value(time);
        let slot = self
            .slots
            .iter()
            .find(|slot| slot.value == wanted)
            .ok_or_else(|| PickerError::UnknownSlot(value.to_string()))?;

        if !slot.available {
            return Err(PickerError::SlotUnavailable(slot.label.clone()));
        }

        self.selected_time = Some(time);
        Ok(())
    }

    /// Recomputes dates and slots against the current clock, dropping
    /// selections that are no longer available.
    pub fn refresh(&mut self) {
        self.dates = self.engine.available_dates(self.booking_type);

        let Some(date) = self.selected_date else {
            return;
        };
        if !self.engine.is_date_available(date, self.booking_type) {
            self.clear_selection();
            return;
        }

        self.slots = self.engine.time_slots(date, self.booking_type);
        if let Some(time) = self.selected_time {
            let value = slot_value(time);
            let still_open = self.slots.iter().any(|slot| slot.value == value && slot.available);
            if !still_open {
                self.selected_time = None;
            }
        }
    }

    /// Clears both selections and recomputes the date list.
    pub fn reset(&mut self) {
        self.clear_selection();
        self.dates = self.engine.available_dates(self.booking_type);
    }

    fn clear_selection(&mut self) {
        self.selected_date = None;
        self.selected_time = None;
        self.slots.clear();
    }
}
