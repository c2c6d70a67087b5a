//! Booking notifier port.
//!
//! Delivers the team alert and the customer confirmation for a stored
//! booking. Delivery is best-effort: a failure is logged by the caller and
//! never undoes the booking.

use async_trait::async_trait;

use crate::domain::booking::BookingNotification;

#[async_trait]
pub trait BookingNotifier: Send + Sync {
    /// Sends both notifications for `notification`.
    async fn notify(&self, notification: &BookingNotification) -> Result<(), NotificationError>;
}

/// Errors from notification delivery.
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    /// Delivery endpoint could not be reached or answered with an error.
    #[error("notification delivery failed: {0}")]
    Delivery(String),

    /// Notifier is misconfigured.
    #[error("notifier misconfigured: {0}")]
    Configuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_notifier_is_object_safe() {
        fn _accepts_dyn(_notifier: &dyn BookingNotifier) {}
    }
}
