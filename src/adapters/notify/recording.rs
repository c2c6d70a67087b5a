//! Notifier decorator that records every delivery attempt.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::booking::BookingNotification;
use crate::ports::{BookingNotifier, DeliveryStatus, NotificationError, NotificationLog, NotificationLogEntry};

/// Wraps a notifier and writes the outcome to a [`NotificationLog`].
///
/// A failed log write is logged and dropped; the delivery result is
/// returned unchanged.
pub struct RecordingNotifier {
    inner: Arc<dyn BookingNotifier>,
    log: Arc<dyn NotificationLog>,
}

impl RecordingNotifier {
    pub fn new(inner: Arc<dyn BookingNotifier>, log: Arc<dyn NotificationLog>) -> Self {
        Self { inner, log }
    }
}

#[async_trait]
impl BookingNotifier for RecordingNotifier {
    async fn notify(&self, notification: &BookingNotification) -> Result<(), NotificationError> {
        let result = self.inner.notify(notification).await;

        let status = match &result {
            Ok(()) => DeliveryStatus::Sent,
            Err(_) => DeliveryStatus::Failed,
        };
        let entry = NotificationLogEntry::booking_created(notification, status);
        if let Err(e) = self.log.record(&entry).await {
            tracing::warn!(
                booking_id = %notification.booking_id,
                "Failed to record notification: {}",
                e
            );
        }

        result
    }
}
