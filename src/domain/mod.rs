//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, clock, errors)
//! - `booking` - Availability rules, booking validation and notifications

pub mod booking;
pub mod foundation;
