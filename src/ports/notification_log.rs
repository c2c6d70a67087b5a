//! Notification log port.
//!
//! Records each delivery attempt for a booking. Writes are best-effort: a
//! failed write is logged and never affects delivery or the booking.

use async_trait::async_trait;

use crate::domain::booking::BookingNotification;
use crate::domain::foundation::{BookingId, DomainError, Timestamp};

/// Kind of notification sent for a new booking.
pub const BOOKING_CREATED: &str = "booking_created";

/// Outcome of a delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    Sent,
    Failed,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Sent => "sent",
            DeliveryStatus::Failed => "failed",
        }
    }
}

/// One row of the notification log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationLogEntry {
    pub booking_id: BookingId,
    pub notification_type: &'static str,
    pub recipient_email: String,
    pub sent_at: Timestamp,
    pub status: DeliveryStatus,
}

impl NotificationLogEntry {
    pub fn booking_created(notification: &BookingNotification, status: DeliveryStatus) -> Self {
        Self {
            booking_id: notification.booking_id,
            notification_type: BOOKING_CREATED,
            recipient_email: notification.customer_email.clone(),
            sent_at: Timestamp::now(),
            status,
        }
    }
}

#[async_trait]
pub trait NotificationLog: Send + Sync {
    async fn record(&self, entry: &NotificationLogEntry) -> Result<(), DomainError>;
}
