//! In-Memory Booking Store Adapter
//!
//! Keeps bookings in a map keyed by email. Used when no database is
//! configured, and in tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::booking::{BookingRecord, NewBooking};
use crate::domain::foundation::{BookingId, Timestamp};
use crate::ports::{BookingStore, StoreError};

/// In-memory booking storage
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookingStore {
    bookings: Arc<RwLock<HashMap<String, BookingRecord>>>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored bookings
    pub async fn count(&self) -> usize {
        self.bookings.read().await.len()
    }

    /// Booking stored for `email`, if any
    pub async fn find_by_email(&self, email: &str) -> Option<BookingRecord> {
        self.bookings.read().await.get(&email.to_lowercase()).cloned()
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn create(&self, booking: &NewBooking) -> Result<BookingRecord, StoreError> {
        let key = booking.email.to_lowercase();

        // Check and insert under one write lock.
        let mut bookings = self.bookings.write().await;
        if bookings.contains_key(&key) {
            return Err(StoreError::DuplicateEmail);
        }

        let record = BookingRecord::pending(BookingId::new(), booking.clone(), Timestamp::now());
        bookings.insert(key, record.clone());
        Ok(record)
    }
}
