//! SubmitBookingHandler - Command handler for accepting a booking.
//!
//! Validates the form, writes it to the store once, then hands the
//! notification to a background task. Notification failures are logged and
//! never change the outcome.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::domain::booking::{
    BookingError, BookingNotification, BookingRecord, BookingSubmission, BookingValidator,
    ValidatedBooking,
};
use crate::ports::{BookingNotifier, BookingStore};

/// Default bound on a single store call.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(10);

/// Command to submit a booking form.
#[derive(Debug, Clone)]
pub struct SubmitBookingCommand {
    pub submission: BookingSubmission,
}

/// Result of a stored booking.
#[derive(Debug)]
pub struct SubmitBookingResult {
    pub record: BookingRecord,
    /// Background delivery of the notifications. May be dropped.
    pub notification: NotificationTask,
}

/// Handle to the detached notification task.
#[derive(Debug)]
pub struct NotificationTask {
    handle: JoinHandle<bool>,
}

impl NotificationTask {
    /// Waits for delivery and returns whether it succeeded.
    pub async fn wait(self) -> bool {
        self.handle.await.unwrap_or(false)
    }
}

/// Handler for booking submissions.
pub struct SubmitBookingHandler {
    validator: Arc<BookingValidator>,
    store: Arc<dyn BookingStore>,
    notifier: Arc<dyn BookingNotifier>,
    store_timeout: Duration,
}

impl SubmitBookingHandler {
    pub fn new(
        validator: Arc<BookingValidator>,
        store: Arc<dyn BookingStore>,
        notifier: Arc<dyn BookingNotifier>,
    ) -> Self {
        Self {
            validator,
            store,
            notifier,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }

    pub fn validator(&self) -> &BookingValidator {
        &self.validator
    }

    pub async fn handle(&self, cmd: SubmitBookingCommand) -> Result<SubmitBookingResult, BookingError> {
        let booking = self.validate(&cmd.submission)?;
        self.submit_validated(booking).await
    }

    /// Runs the validator. No store interaction.
    pub fn validate(&self, submission: &BookingSubmission) -> Result<ValidatedBooking, BookingError> {
        self.validator.validate(submission).map_err(|errors| {
            tracing::debug!(
                booking_type = %submission.booking_type,
                fields = %errors,
                "Booking failed validation"
            );
            BookingError::Validation(errors)
        })
    }

    /// Writes a validated booking and schedules its notifications.
    pub async fn submit_validated(&self, booking: ValidatedBooking) -> Result<SubmitBookingResult, BookingError> {
        let request = booking.to_new_booking();

        let record = match tokio::time::timeout(self.store_timeout, self.store.create(&request)).await {
            Ok(Ok(record)) => record,
            Ok(Err(e)) => {
                let err = BookingError::from(e);
                match &err {
                    BookingError::DuplicateEmail => {
                        tracing::info!(email = %request.email, "Duplicate booking email")
                    }
                    _ => tracing::error!(
                        email = %request.email,
                        error_code = %err.code(),
                        "Booking store failed: {}",
                        err
                    ),
                }
                return Err(err);
            }
            Err(_) => {
                tracing::error!(
                    email = %request.email,
                    timeout_secs = self.store_timeout.as_secs(),
                    "Booking store timed out"
                );
                return Err(BookingError::Unavailable("store call timed out".to_string()));
            }
        };

        tracing::info!(
            booking_id = %record.id,
            booking_type = %record.booking_type,
            "Booking stored"
        );

        let notification = self.spawn_notification(BookingNotification::new(record.id, &booking));
        Ok(SubmitBookingResult { record, notification })
    }

    fn spawn_notification(&self, notification: BookingNotification) -> NotificationTask {
        let notifier = Arc::clone(&self.notifier);
        let handle = tokio::spawn(async move {
            match notifier.notify(&notification).await {
                Ok(()) => {
                    tracing::debug!(booking_id = %notification.booking_id, "Booking notifications sent");
                    true
                }
                Err(e) => {
                    tracing::warn!(
                        booking_id = %notification.booking_id,
                        "Booking notification failed: {}",
                        e
                    );
                    false
                }
            }
        });
        NotificationTask { handle }
    }
}
