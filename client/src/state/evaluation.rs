//! Evaluation records and the orchestration state of the evaluation page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend answers `POST /certificate/{id}/process` with either a flat
//! record or a nested `decision` / `llm_results` document.
//! [`EvaluationResult::from_response`] folds both into one read-only record;
//! views never look at raw JSON.
//!
//! DESIGN
//! ======
//! `decision` is the sole discriminant for which actions a result offers.
//! Decisions other than ACCEPTED and REJECTED are kept verbatim and offer
//! neither action set.

#[cfg(test)]
#[path = "evaluation_test.rs"]
mod evaluation_test;

use serde_json::Value;

use crate::net::api::ApiError;
use crate::state::dialog::{ConfirmationRequest, DialogVariant, MessageKind, MessageRequest};
use crate::state::processing::ProcessingState;

const UNKNOWN_DECISION: &str = "UNKNOWN";

/// Terminal classification of an evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted,
    Rejected,
    /// Anything else the backend sent, kept for display.
    Unknown(String),
}

impl Decision {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "ACCEPTED" => Self::Accepted,
            "REJECTED" => Self::Rejected,
            other => Self::Unknown(other.to_owned()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
            Self::Unknown(raw) => raw,
        }
    }

    /// Badge tone: only acceptance reads as positive.
    pub fn tone(&self) -> &'static str {
        match self {
            Self::Accepted => "positive",
            Self::Rejected | Self::Unknown(_) => "negative",
        }
    }
}

impl Default for Decision {
    fn default() -> Self {
        Self::Unknown(UNKNOWN_DECISION.to_owned())
    }
}

/// Read-only evaluation record supplied to the results and appeal views.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EvaluationResult {
    pub filename: Option<String>,
    pub decision: Decision,
    pub credits: Option<f64>,
    pub requested_training_type: Option<String>,
    pub training_hours: Option<f64>,
    pub degree_relevance: Option<String>,
    pub supporting_evidence: Option<String>,
    pub challenging_evidence: Option<String>,
    pub justification: Option<String>,
    pub student_degree: Option<String>,
}

impl EvaluationResult {
    /// Normalise a processing response.
    ///
    /// Each field resolves from the nested `decision` object first, then the
    /// LLM evaluation block, then the flat top-level field.
    pub fn from_response(payload: &Value) -> Self {
        let decision_obj = payload.get("decision").filter(|v| v.is_object());
        let certificate = payload.get("certificate");
        let student = payload.get("student");
        let llm_eval = payload.pointer("/llm_results/evaluation_results/results");

        let top = Some(payload);

        let decision = first_text(&[
            (decision_obj, "ai_decision"),
            (llm_eval, "decision"),
            (top, "decision"),
        ])
        .map(|raw| Decision::parse(&raw))
        .unwrap_or_default();

        Self {
            filename: first_text(&[(certificate, "filename"), (top, "filename")]),
            decision,
            credits: first_number(&[
                (decision_obj, "credits_awarded"),
                (llm_eval, "credits_qualified"),
                (llm_eval, "credits_calculated"),
                (top, "credits"),
            ]),
            requested_training_type: first_text(&[
                (certificate, "training_type"),
                (top, "requested_training_type"),
                (llm_eval, "requested_training_type"),
            ]),
            training_hours: first_number(&[
                (decision_obj, "total_working_hours"),
                (llm_eval, "total_working_hours"),
                (llm_eval, "training_hours"),
                (top, "training_hours"),
            ]),
            degree_relevance: first_text(&[
                (decision_obj, "degree_relevance"),
                (llm_eval, "degree_relevance"),
                (top, "degree_relevance"),
            ]),
            supporting_evidence: first_text(&[
                (decision_obj, "supporting_evidence"),
                (llm_eval, "supporting_evidence"),
                (top, "supporting_evidence"),
            ]),
            challenging_evidence: first_text(&[
                (decision_obj, "challenging_evidence"),
                (llm_eval, "challenging_evidence"),
                (top, "challenging_evidence"),
            ]),
            justification: first_text(&[
                (decision_obj, "ai_justification"),
                (llm_eval, "justification"),
                (top, "justification"),
            ]),
            student_degree: first_text(&[(student, "degree"), (top, "student_degree")]),
        }
    }
}

fn first_text(sources: &[(Option<&Value>, &str)]) -> Option<String> {
    sources.iter().find_map(|(obj, key)| str_field(*obj, key))
}

fn first_number(sources: &[(Option<&Value>, &str)]) -> Option<f64> {
    sources.iter().find_map(|(obj, key)| num_field(*obj, key))
}

fn str_field(obj: Option<&Value>, key: &str) -> Option<String> {
    obj?.get(key)?
        .as_str()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_owned)
}

fn num_field(obj: Option<&Value>, key: &str) -> Option<f64> {
    obj?.get(key)?.as_f64()
}

/// A button offered by the results view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultAction {
    BackToDashboard,
    SendForApproval,
    RequestReview,
    SubmitNewApplication,
}

impl ResultAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::BackToDashboard => "Back to Dashboard",
            Self::SendForApproval => "Send for Approval",
            Self::RequestReview => "Request Review",
            Self::SubmitNewApplication => "Submit New Application",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::BackToDashboard => "btn btn--neutral",
            Self::SendForApproval => "btn btn--primary",
            Self::RequestReview => "btn btn--warning",
            Self::SubmitNewApplication => "btn btn--positive",
        }
    }
}

/// Actions offered for a result, in display order.
pub fn offered_actions(result: Option<&EvaluationResult>) -> Vec<ResultAction> {
    let mut actions = vec![ResultAction::BackToDashboard];
    match result.map(|r| &r.decision) {
        Some(Decision::Accepted) => actions.push(ResultAction::SendForApproval),
        Some(Decision::Rejected) => {
            actions.push(ResultAction::RequestReview);
            actions.push(ResultAction::SubmitNewApplication);
        }
        Some(Decision::Unknown(_)) | None => {}
    }
    actions
}

/// Route of the landing page.
pub const DASHBOARD_PATH: &str = "/";

/// Where a "back" action should land.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReturnTarget {
    #[default]
    Dashboard,
    Results,
}

/// Which view the evaluation page is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EvaluationView {
    #[default]
    Processing,
    Results,
    RequestReview,
}

/// An action waiting behind a confirmation dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingAction {
    CancelProcessing,
    SendForApproval,
    SubmitNewApplication,
}

impl PendingAction {
    pub fn confirmation(self) -> ConfirmationRequest {
        match self {
            Self::CancelProcessing => ConfirmationRequest {
                title: "Cancel processing?".to_owned(),
                message: "The evaluation keeps running on the server, but its result will not be shown here."
                    .to_owned(),
                confirm_text: "Cancel Processing".to_owned(),
                cancel_text: "Keep Waiting".to_owned(),
                variant: DialogVariant::Danger,
            },
            Self::SendForApproval => ConfirmationRequest {
                title: "Send for approval?".to_owned(),
                message: "The accepted evaluation will be forwarded to a reviewer for final approval.".to_owned(),
                confirm_text: "Send".to_owned(),
                cancel_text: "Cancel".to_owned(),
                variant: DialogVariant::Primary,
            },
            Self::SubmitNewApplication => ConfirmationRequest {
                title: "Start a new application?".to_owned(),
                message: "This evaluation will be closed. This action cannot be undone.".to_owned(),
                confirm_text: "Start Over".to_owned(),
                cancel_text: "Cancel".to_owned(),
                variant: DialogVariant::Danger,
            },
        }
    }
}

/// Orchestration state for `/certificate/:id`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EvaluationState {
    pub view: EvaluationView,
    pub processing: ProcessingState,
    pub results: Option<EvaluationResult>,
    pub error: Option<String>,
    pub pending: Option<PendingAction>,
    pub message: Option<MessageRequest>,
    pub approval_in_flight: bool,
    pub appeal_filed: bool,
    /// Set once the user walks away from processing; late outcomes are dropped.
    pub abandoned: bool,
}

impl EvaluationState {
    /// Open the processing modal. Upload is already done when this runs.
    pub fn begin_processing(&mut self) {
        *self = Self {
            processing: ProcessingState { stage: 1, progress: 25 },
            ..Self::default()
        };
    }

    pub fn is_processing(&self) -> bool {
        self.view == EvaluationView::Processing && !self.abandoned
    }

    /// Advance the waiting display. No-op once processing ended.
    pub fn tick(&mut self) {
        if self.is_processing() {
            self.processing.tick();
        }
    }

    /// Apply the processing outcome unless the user already walked away.
    ///
    /// An open cancel gate is closed; there is nothing left to cancel.
    pub fn complete_processing(&mut self, outcome: Result<EvaluationResult, ApiError>) {
        if self.abandoned {
            return;
        }
        if self.pending == Some(PendingAction::CancelProcessing) {
            self.pending = None;
        }
        match outcome {
            Ok(result) => {
                self.processing.finish();
                self.results = Some(result);
                self.error = None;
            }
            Err(err) => {
                leptos::logging::warn!("certificate processing failed: {err}");
                self.results = None;
                self.error = Some(processing_error_message(&err));
            }
        }
        self.view = EvaluationView::Results;
    }

    pub fn abandon(&mut self) {
        self.abandoned = true;
        self.pending = None;
    }

    /// Handle a back action. Returns the route to leave to, if any.
    pub fn return_to(&mut self, target: ReturnTarget) -> Option<&'static str> {
        match target {
            ReturnTarget::Dashboard => Some(DASHBOARD_PATH),
            ReturnTarget::Results => {
                self.view = EvaluationView::Results;
                None
            }
        }
    }

    /// Take the action behind the open confirmation dialog.
    ///
    /// Cancelling processing abandons it. A second approval request while one
    /// is in flight is swallowed.
    pub fn confirm_pending(&mut self) -> Option<PendingAction> {
        let action = self.pending.take()?;
        match action {
            PendingAction::CancelProcessing => self.abandon(),
            PendingAction::SendForApproval => {
                if self.approval_in_flight {
                    return None;
                }
                self.approval_in_flight = true;
            }
            PendingAction::SubmitNewApplication => {}
        }
        Some(action)
    }

    pub fn open_review(&mut self) {
        if self.results.as_ref().is_some_and(|r| r.decision == Decision::Rejected) {
            self.view = EvaluationView::RequestReview;
        }
    }

    pub fn approval_outcome(&mut self, outcome: Result<(), ApiError>) {
        self.approval_in_flight = false;
        self.message = Some(match outcome {
            Ok(()) => MessageRequest {
                kind: MessageKind::Success,
                title: "Sent for approval".to_owned(),
                message: "Your application has been forwarded for approval. You will be notified of the outcome."
                    .to_owned(),
            },
            Err(err) => {
                leptos::logging::warn!("send for approval failed: {err}");
                MessageRequest {
                    kind: MessageKind::Error,
                    title: "Sending failed".to_owned(),
                    message: "Failed to send for approval. Please try again.".to_owned(),
                }
            }
        });
    }
}

/// User-facing text for a processing failure.
pub fn processing_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { status: 404, .. } => "Certificate not found".to_owned(),
        ApiError::Status { status: 400, detail } => detail
            .clone()
            .unwrap_or_else(|| "Invalid data provided.".to_owned()),
        ApiError::Status { status, .. } => format!("HTTP {status}: Server error. Please try again later."),
        ApiError::Transport(_) => "Network error. Please check your connection.".to_owned(),
        ApiError::Rejected(message) => message.clone(),
        ApiError::Decode(_) | ApiError::Unavailable => "Failed to process document. Please try again.".to_owned(),
    }
}
