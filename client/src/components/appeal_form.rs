//! Appeal form for rejected evaluations.
//!
//! Owns its [`AppealState`]; everything outside the form is reached through
//! [`AppealActions`].

#[cfg(test)]
#[path = "appeal_form_test.rs"]
mod appeal_form_test;

use leptos::prelude::*;

use crate::components::step_indicator::StepIndicator;
use crate::state::appeal::AppealState;
use crate::state::evaluation::{EvaluationResult, ReturnTarget};
use crate::util::format::{credits_label, or_placeholder, training_type_label};

const GUIDELINES: &[&str] = &[
    "Explain which part of the evaluation you believe is incorrect.",
    "Point to the sections of your certificate that support your case.",
    "Mention any context the certificate does not show, such as part-time hours.",
    "A reviewer will look at your appeal; you will be notified of the outcome.",
];

/// Outbound callbacks of the appeal form.
#[derive(Clone, Copy)]
pub struct AppealActions {
    pub on_back: Callback<ReturnTarget>,
    /// Run once after the backend accepts the appeal.
    pub on_refresh_applications: Option<Callback<()>>,
}

/// Summary block shown above the reason field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppealSummary {
    pub document: String,
    pub training_type: String,
    pub credits: String,
}

impl AppealSummary {
    pub fn from_result(result: &EvaluationResult) -> Self {
        Self {
            document: or_placeholder(result.filename.as_deref(), "Document"),
            training_type: training_type_label(result.requested_training_type.as_deref()),
            credits: credits_label(result.credits),
        }
    }
}

/// Label of the submit button for the current state.
pub fn submit_label(state: &AppealState) -> &'static str {
    if state.is_submitting() { "Submitting..." } else { "Submit Appeal" }
}

#[component]
pub fn AppealForm(
    results: EvaluationResult,
    #[prop(into)] certificate_id: String,
    actions: AppealActions,
) -> impl IntoView {
    let state = RwSignal::new(AppealState::default());
    let summary = AppealSummary::from_result(&results);

    let submit = Callback::new(move |()| {
        let Some(request) = state.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            use crate::net::api::HttpApi;
            use crate::state::appeal::send_appeal;

            let certificate_id = certificate_id.clone();
            leptos::task::spawn_local(async move {
                let outcome = send_appeal(&HttpApi, &certificate_id, &request).await;
                let accepted = state.try_update(|s| s.finish_submit(outcome)).unwrap_or(false);
                if let Some(refresh) = actions.on_refresh_applications.filter(|_| accepted) {
                    refresh.run(());
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&certificate_id, request);
        }
    });

    let form = move || {
        let summary = summary.clone();
        view! {
            <div class="appeal-form__summary">
                <h3>"Application summary"</h3>
                <dl>
                    <dt>"Document"</dt>
                    <dd>{summary.document}</dd>
                    <dt>"Decision"</dt>
                    <dd><span class="decision-badge decision-badge--negative">"REJECTED"</span></dd>
                    <dt>"Training type"</dt>
                    <dd>{summary.training_type}</dd>
                    <dt>"Credits"</dt>
                    <dd>{summary.credits}</dd>
                </dl>
            </div>
            <div class="appeal-form__guidelines">
                <h3>"Appeal Guidelines"</h3>
                <ul>{GUIDELINES.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}</ul>
            </div>
            <form
                class="appeal-form__form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <label class="appeal-form__label" for="appeal-reason">"Reason for appeal"</label>
                <textarea
                    id="appeal-reason"
                    class="appeal-form__reason"
                    rows="6"
                    placeholder="Describe why the evaluation should be reconsidered..."
                    prop:value=move || state.with(|s| s.reason.clone())
                    prop:disabled=move || state.with(AppealState::is_submitting)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.reason = value);
                    }
                ></textarea>
                <Show when=move || state.with(|s| s.error().is_some())>
                    <p class="appeal-form__error" role="alert">
                        {move || state.with(|s| s.error().map(|err| err.to_string()).unwrap_or_default())}
                    </p>
                </Show>
                <div class="appeal-form__actions">
                    <button
                        class="btn"
                        type="button"
                        disabled=move || state.with(AppealState::is_submitting)
                        on:click=move |_| actions.on_back.run(ReturnTarget::Results)
                    >
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || !state.with(AppealState::can_submit)
                    >
                        {move || state.with(submit_label)}
                    </button>
                </div>
            </form>
        }
    };

    view! {
        <div class="appeal-form">
            <StepIndicator current=3/>
            <h2 class="appeal-form__title">"Request Review"</h2>
            <Show when=move || state.with(AppealState::is_submitted) fallback=form>
                <div class="appeal-form__done">
                    <div class="appeal-form__done-icon">"✔"</div>
                    <h2>"Appeal Submitted!"</h2>
                    <p>"Your appeal has been recorded. A reviewer will re-examine your certificate."</p>
                    <button
                        class="btn btn--primary"
                        type="button"
                        on:click=move |_| actions.on_back.run(ReturnTarget::Dashboard)
                    >
                        "Back to Dashboard"
                    </button>
                </div>
            </Show>
        </div>
    }
}
