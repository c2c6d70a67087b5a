//! Notification adapters.
//!
//! - `LoggingNotifier` - Renders emails into the log
//! - `WebhookNotifier` - Posts signed JSON to a webhook
//! - `DisabledNotifier` - Drops notifications
//! - `RecordingNotifier` - Records each attempt in a notification log

mod logging;
mod recording;
mod webhook;

use async_trait::async_trait;

use crate::domain::booking::BookingNotification;
use crate::ports::{BookingNotifier, NotificationError};

pub use logging::{EmailIdentity, LoggingNotifier};
pub use recording::RecordingNotifier;
pub use webhook::{sign_payload, WebhookConfig, WebhookNotifier, SIGNATURE_HEADER};

/// Notifier used when notifications are switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledNotifier;

#[async_trait]
impl BookingNotifier for DisabledNotifier {
    async fn notify(&self, notification: &BookingNotification) -> Result<(), NotificationError> {
        tracing::debug!(booking_id = %notification.booking_id, "Notifications disabled; skipping");
        Ok(())
    }
}
