//! Booking submission state machine.
//!
//! Drives one booking form through `Idle → Validating → Submitting →
//! Confirmed`, with `Rejected` reachable from validation and submission.
//! `Confirmed` stays put until [`BookingFlow::reset`] is called.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::booking::{BookingRecord, BookingSubmission, FieldErrors};
use crate::domain::foundation::StateMachine;

use super::handlers::booking::{NotificationTask, SubmitBookingHandler};

/// Phase of a submission, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionPhase {
    Idle,
    Validating,
    Submitting,
    Confirmed,
    Rejected,
}

impl StateMachine for SubmissionPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SubmissionPhase::*;
        matches!(
            (self, target),
            (Idle, Validating)
                | (Validating, Submitting)
                | (Validating, Rejected)
                | (Submitting, Confirmed)
                | (Submitting, Rejected)
                | (Rejected, Validating)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SubmissionPhase::*;
        match self {
            Idle => vec![Validating],
            Validating => vec![Submitting, Rejected],
            Submitting => vec![Confirmed, Rejected],
            Rejected => vec![Validating],
            Confirmed => vec![],
        }
    }
}

/// Observable state of the booking form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Confirmed(BookingRecord),
    Rejected(FieldErrors),
}

impl SubmissionState {
    pub fn phase(&self) -> SubmissionPhase {
        match self {
            SubmissionState::Idle => SubmissionPhase::Idle,
            SubmissionState::Validating => SubmissionPhase::Validating,
            SubmissionState::Submitting => SubmissionPhase::Submitting,
            SubmissionState::Confirmed(_) => SubmissionPhase::Confirmed,
            SubmissionState::Rejected(_) => SubmissionPhase::Rejected,
        }
    }

    /// Submit affordance is disabled while a submission is in flight.
    pub fn can_submit(&self) -> bool {
        self.phase().can_transition_to(&SubmissionPhase::Validating)
    }

    pub fn record(&self) -> Option<&BookingRecord> {
        match self {
            SubmissionState::Confirmed(record) => Some(record),
            _ => None,
        }
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            SubmissionState::Rejected(errors) => Some(errors),
            _ => None,
        }
    }
}

/// A submit that the current state does not allow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRefused {
    #[error("a submission is already in progress")]
    InProgress,

    #[error("booking already confirmed; reset the form to book again")]
    AlreadyConfirmed,
}

/// One booking form's submission lifecycle.
pub struct BookingFlow {
    handler: Arc<SubmitBookingHandler>,
    state: Mutex<SubmissionState>,
    notification: Mutex<Option<NotificationTask>>,
}

impl BookingFlow {
    pub fn new(handler: Arc<SubmitBookingHandler>) -> Self {
        Self {
            handler,
            state: Mutex::new(SubmissionState::Idle),
            notification: Mutex::new(None),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.lock_state().clone()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.lock_state().phase()
    }

    /// Validates and submits `submission`, returning the settled state.
    ///
    /// Refused while a submission is in flight or after confirmation.
    pub async fn submit(&self, submission: &BookingSubmission) -> Result<SubmissionState, SubmitRefused> {
        self.begin()?;

        let booking = match self.handler.validate(submission) {
            Ok(booking) => booking,
            Err(e) => return Ok(self.advance(SubmissionState::Rejected(e.field_errors()))),
        };
        self.advance(SubmissionState::Submitting);

        let settled = match self.handler.submit_validated(booking).await {
            Ok(result) => {
                *self.lock_notification() = Some(result.notification);
                SubmissionState::Confirmed(result.record)
            }
            Err(e) => SubmissionState::Rejected(e.field_errors()),
        };
        Ok(self.advance(settled))
    }

    /// Returns the form to `Idle`.
    ///
    /// Refused while a submission is in flight; a started store write
    /// cannot be cancelled.
    pub fn reset(&self) -> Result<(), SubmitRefused> {
        let mut state = self.lock_state();
        match state.phase() {
            SubmissionPhase::Validating | SubmissionPhase::Submitting => Err(SubmitRefused::InProgress),
            _ => {
                *state = SubmissionState::Idle;
                Ok(())
            }
        }
    }

    /// Takes the notification task of the last confirmed booking, if any.
    pub fn take_notification(&self) -> Option<NotificationTask> {
        self.lock_notification().take()
    }

    fn begin(&self) -> Result<(), SubmitRefused> {
        let mut state = self.lock_state();
        match state.phase().transition_to(SubmissionPhase::Validating) {
            Ok(_) => {
                *state = SubmissionState::Validating;
                Ok(())
            }
            Err(_) if state.phase() == SubmissionPhase::Confirmed => Err(SubmitRefused::AlreadyConfirmed),
            Err(_) => Err(SubmitRefused::InProgress),
        }
    }

    /// Applies `next` if the machine allows it and returns the resulting state.
    fn advance(&self, next: SubmissionState) -> SubmissionState {
        let mut state = self.lock_state();
        match state.phase().transition_to(next.phase()) {
            Ok(_) => *state = next,
            Err(e) => tracing::warn!(error = %e, "Dropping out-of-order submission state change"),
        }
        state.clone()
    }

    fn lock_state(&self) -> MutexGuard<'_, SubmissionState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock_notification(&self) -> MutexGuard<'_, Option<NotificationTask>> {
        self.notification.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
