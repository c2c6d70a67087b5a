//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers
//! (read). The submission flow and slot picker hold per-form interaction state
//! on top of the handlers.

pub mod handlers;
pub mod slot_picker;
pub mod submission_flow;

pub use handlers::booking::{
    AvailableDate, GetAvailableDatesHandler, GetAvailableDatesQuery, GetAvailableDatesResult,
    GetTimeSlotsHandler, GetTimeSlotsQuery, GetTimeSlotsResult, NotificationTask,
    SubmitBookingCommand, SubmitBookingHandler, SubmitBookingResult,
};
pub use slot_picker::{PickerError, SlotPicker};
pub use submission_flow::{BookingFlow, SubmissionPhase, SubmissionState, SubmitRefused};
