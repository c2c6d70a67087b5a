//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, the clock capability and error types
//! that form the vocabulary of the booking domain.

mod clock;
mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::BookingId;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
