//! Appeal form state and submission workflow.
//!
//! DESIGN
//! ======
//! Submission is split into three steps so a reactive view never holds a
//! borrow across the network await:
//!
//! 1. [`AppealState::begin_submit`] validates locally and moves to
//!    `Submitting`, or records a validation failure without any request.
//! 2. [`send_appeal`] performs the single outbound call.
//! 3. [`AppealState::finish_submit`] applies the outcome.
//!
//! ERROR HANDLING
//! ==============
//! Every failure lands back in an interactive state. Submission failures
//! always show the same generic message; the server detail only reaches the
//! log.

#[cfg(test)]
#[path = "appeal_test.rs"]
mod appeal_test;

use crate::net::api::{ApiError, AppealRequest, AppealTransport};

/// User-facing appeal failures. `Display` is the exact on-screen text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AppealError {
    /// Reason missing or whitespace-only. Never reaches the network.
    #[error("Please provide a reason for your appeal.")]
    Validation,
    /// The backend call failed or returned a non-2xx status.
    #[error("Failed to submit appeal. Please try again.")]
    Submission,
}

/// Lifecycle of one appeal form instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppealStatus {
    #[default]
    Idle,
    Submitting,
    /// Terminal: the form is replaced by a confirmation screen.
    Submitted,
    /// Recoverable: the user may edit and retry.
    Failed(AppealError),
}

/// Local state owned by the appeal form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppealState {
    pub reason: String,
    pub status: AppealStatus,
}

impl AppealState {
    pub fn is_submitting(&self) -> bool {
        self.status == AppealStatus::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.status == AppealStatus::Submitted
    }

    pub fn error(&self) -> Option<AppealError> {
        match self.status {
            AppealStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    fn reason_is_blank(&self) -> bool {
        self.reason.trim().is_empty()
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.reason_is_blank() && matches!(self.status, AppealStatus::Idle | AppealStatus::Failed(_))
    }

    /// Validate and enter `Submitting`.
    ///
    /// Returns the request body to send, or `None` when nothing should be
    /// sent: validation failed (recorded as `Failed(Validation)`), a request
    /// is already in flight, or the appeal was already submitted.
    pub fn begin_submit(&mut self) -> Option<AppealRequest> {
        match self.status {
            AppealStatus::Submitting | AppealStatus::Submitted => return None,
            AppealStatus::Idle | AppealStatus::Failed(_) => {}
        }
        if self.reason_is_blank() {
            self.status = AppealStatus::Failed(AppealError::Validation);
            return None;
        }
        self.status = AppealStatus::Submitting;
        Some(AppealRequest { appeal_reason: self.reason.clone() })
    }

    /// Apply the outcome of [`send_appeal`].
    ///
    /// Returns `true` exactly when the appeal was accepted, which is the
    /// caller's cue to run its refresh callback.
    pub fn finish_submit(&mut self, outcome: Result<(), AppealError>) -> bool {
        match outcome {
            Ok(()) => {
                self.status = AppealStatus::Submitted;
                true
            }
            Err(err) => {
                self.status = AppealStatus::Failed(err);
                false
            }
        }
    }
}

/// Send one appeal and collapse any failure into [`AppealError::Submission`].
///
/// # Errors
///
/// Returns [`AppealError::Submission`] when the transport fails or the
/// backend answers with a non-2xx status.
pub async fn send_appeal<T: AppealTransport>(
    transport: &T,
    certificate_id: &str,
    request: &AppealRequest,
) -> Result<(), AppealError> {
    transport
        .post_appeal(certificate_id, request)
        .await
        .map_err(|err| {
            log_submission_failure(certificate_id, &err);
            AppealError::Submission
        })
}

fn log_submission_failure(certificate_id: &str, err: &ApiError) {
    match err.detail() {
        Some(detail) => {
            leptos::logging::warn!("appeal submission failed: certificate={certificate_id} {err}: {detail}");
        }
        None => leptos::logging::warn!("appeal submission failed: certificate={certificate_id} {err}"),
    }
}
