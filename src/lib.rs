//! Consultancy Booking - discovery call and consultation scheduling
//!
//! Computes bookable dates and half-hour slots for each booking type,
//! validates booking forms, stores accepted bookings and notifies the team.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
