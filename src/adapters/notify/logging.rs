//! Notifier that renders both emails and writes them to the log.
//!
//! Stands in for a mail provider in development.

use async_trait::async_trait;

use crate::domain::booking::BookingNotification;
use crate::ports::{BookingNotifier, NotificationError};

/// Sender and recipient details for rendered emails.
#[derive(Debug, Clone)]
pub struct EmailIdentity {
    pub team_email: String,
    pub from_email: String,
    pub from_name: String,
}

/// Logs rendered notifications through `tracing`.
pub struct LoggingNotifier {
    identity: EmailIdentity,
}

impl LoggingNotifier {
    pub fn new(identity: EmailIdentity) -> Self {
        Self { identity }
    }

    fn from_header(&self) -> String {
        format!("{} <{}>", self.identity.from_name, self.identity.from_email)
    }
}

#[async_trait]
impl BookingNotifier for LoggingNotifier {
    async fn notify(&self, notification: &BookingNotification) -> Result<(), NotificationError> {
        if self.identity.team_email.trim().is_empty() {
            return Err(NotificationError::Configuration("team email is not set".to_string()));
        }

        tracing::info!(
            booking_id = %notification.booking_id,
            from = %self.from_header(),
            to = %self.identity.team_email,
            subject = %notification.team_subject(),
            body = %notification.render_team_alert(),
            "Team booking alert"
        );
        tracing::info!(
            booking_id = %notification.booking_id,
            from = %self.from_header(),
            to = %notification.customer_email,
            subject = %notification.customer_subject(),
            body = %notification.render_customer_confirmation(),
            "Customer booking confirmation"
        );
        Ok(())
    }
}
