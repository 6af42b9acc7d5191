//! Evaluation outcome view.
//!
//! DESIGN
//! ======
//! The decision alone selects which action buttons appear (see
//! [`offered_actions`]). The view never navigates; every button maps to one
//! callback in [`ResultsActions`].

#[cfg(test)]
#[path = "results_view_test.rs"]
mod results_view_test;

use leptos::prelude::*;

use crate::components::step_indicator::StepIndicator;
use crate::state::evaluation::{EvaluationResult, ResultAction, ReturnTarget, offered_actions};
use crate::util::format::{
    NOT_SPECIFIED, credits_label, hours_label, or_placeholder, relevance_label, training_type_label,
};

const NO_FILENAME: &str = "Document";
const NO_SUPPORTING: &str = "No supporting evidence available.";
const NO_CHALLENGING: &str = "No challenging evidence available.";
const NO_JUSTIFICATION: &str = "No justification available.";

/// Outbound callbacks of the results view.
#[derive(Clone, Copy)]
pub struct ResultsActions {
    pub on_back_to_dashboard: Callback<ReturnTarget>,
    pub on_send_for_approval: Callback<()>,
    pub on_request_review: Callback<()>,
    pub on_submit_new_application: Callback<()>,
}

impl ResultsActions {
    pub fn dispatch(self, action: ResultAction) {
        match action {
            ResultAction::BackToDashboard => self.on_back_to_dashboard.run(ReturnTarget::Dashboard),
            ResultAction::SendForApproval => self.on_send_for_approval.run(()),
            ResultAction::RequestReview => self.on_request_review.run(()),
            ResultAction::SubmitNewApplication => self.on_submit_new_application.run(()),
        }
    }
}

/// Display strings for one result, with placeholders already applied.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultDisplay {
    pub filename: String,
    pub decision: String,
    pub decision_class: String,
    pub credits: String,
    pub training_type: String,
    pub training_hours: String,
    pub relevance: String,
    pub degree: String,
    pub supporting: String,
    pub challenging: String,
    pub justification: String,
}

impl ResultDisplay {
    pub fn from_result(result: &EvaluationResult) -> Self {
        Self {
            filename: or_placeholder(result.filename.as_deref(), NO_FILENAME),
            decision: result.decision.label().to_owned(),
            decision_class: format!("decision-badge decision-badge--{}", result.decision.tone()),
            credits: credits_label(result.credits),
            training_type: training_type_label(result.requested_training_type.as_deref()),
            training_hours: hours_label(result.training_hours),
            relevance: relevance_label(result.degree_relevance.as_deref()),
            degree: or_placeholder(result.student_degree.as_deref(), NOT_SPECIFIED),
            supporting: or_placeholder(result.supporting_evidence.as_deref(), NO_SUPPORTING),
            challenging: or_placeholder(result.challenging_evidence.as_deref(), NO_CHALLENGING),
            justification: or_placeholder(result.justification.as_deref(), NO_JUSTIFICATION),
        }
    }
}

fn action_buttons(result: Option<&EvaluationResult>, actions: ResultsActions) -> impl IntoView + use<> {
    offered_actions(result)
        .into_iter()
        .map(|action| {
            view! {
                <button class=action.class() type="button" on:click=move |_| actions.dispatch(action)>
                    {action.label()}
                </button>
            }
        })
        .collect_view()
}

#[component]
pub fn ResultsView(
    #[prop(into)] results: Signal<Option<EvaluationResult>>,
    #[prop(into)] error: Signal<Option<String>>,
    actions: ResultsActions,
) -> impl IntoView {
    view! {
        <div class="results-view">
            <StepIndicator current=3/>
            <Show when=move || error.get().is_some()>
                <div class="results-view__error" role="alert">{move || error.get().unwrap_or_default()}</div>
            </Show>
            {move || match results.get() {
                None => {
                    view! {
                        <div class="results-view__empty">
                            <p>"No results available"</p>
                            <div class="results-view__actions">{action_buttons(None, actions)}</div>
                        </div>
                    }
                        .into_any()
                }
                Some(result) => {
                    let display = ResultDisplay::from_result(&result);
                    view! {
                        <div class="results-view__card">
                            <div class="results-view__heading">
                                <h2>"Processing Complete!"</h2>
                                <span class="results-view__filename">{display.filename}</span>
                            </div>
                            <div class="results-view__summary">
                                <span class=display.decision_class>{display.decision}</span>
                                <span class="results-view__credits">{display.credits}</span>
                            </div>
                            <dl class="results-view__facts">
                                <dt>"Training type"</dt>
                                <dd>{display.training_type}</dd>
                                <dt>"Training hours"</dt>
                                <dd>{display.training_hours}</dd>
                                <dt>"Degree relevance"</dt>
                                <dd>{display.relevance}</dd>
                                <dt>"Student degree"</dt>
                                <dd>{display.degree}</dd>
                            </dl>
                            <div class="results-view__evidence">
                                <section class="evidence-box evidence-box--supporting">
                                    <h3>"Supporting evidence"</h3>
                                    <p>{display.supporting}</p>
                                </section>
                                <section class="evidence-box evidence-box--challenging">
                                    <h3>"Challenging evidence"</h3>
                                    <p>{display.challenging}</p>
                                </section>
                            </div>
                            <section class="results-view__justification">
                                <h3>"Justification"</h3>
                                <p>{display.justification}</p>
                            </section>
                            <div class="results-view__actions">{action_buttons(Some(&result), actions)}</div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
