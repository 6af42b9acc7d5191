//! Evaluation page for one certificate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/certificate/:id` once the upload is done. It drives the
//! processing request, then swaps between the results view and the appeal
//! form. All confirmation gates and notices are rendered here; the child
//! views only report intent through callbacks.
//!
//! TRADE-OFFS
//! ==========
//! Cancelling does not abort the processing request. The page stops
//! listening instead, so a late outcome is dropped.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::appeal_form::{AppealActions, AppealForm};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::message_dialog::MessageDialog;
use crate::components::processing_modal::ProcessingModal;
use crate::components::results_view::{ResultsActions, ResultsView};
use crate::state::evaluation::{EvaluationState, EvaluationView, PendingAction, ReturnTarget, DASHBOARD_PATH};

#[cfg(feature = "hydrate")]
const TICK_INTERVAL: std::time::Duration = std::time::Duration::from_secs(2);

#[component]
pub fn EvaluationPage() -> impl IntoView {
    let params = use_params_map();
    let certificate_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let evaluation = RwSignal::new(EvaluationState::default());
    let leave_to = RwSignal::new(None::<&'static str>);
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(path) = leave_to.get() {
            leave_to.set(None);
            navigate(path, NavigateOptions::default());
        }
    });

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use crate::state::evaluation::EvaluationResult;

        let alive = Arc::new(AtomicBool::new(true));
        let alive_ticker = alive.clone();
        let alive_request = alive.clone();
        let id = certificate_id.get_untracked();

        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(TICK_INTERVAL).await;
                if !alive_ticker.load(Ordering::Relaxed) {
                    break;
                }
                let still_processing = evaluation
                    .try_update(|s| {
                        s.tick();
                        s.is_processing()
                    })
                    .unwrap_or(false);
                if !still_processing {
                    break;
                }
            }
        });

        leptos::task::spawn_local(async move {
            evaluation.update(EvaluationState::begin_processing);
            let outcome = crate::net::api::process_certificate(&id)
                .await
                .map(|payload| EvaluationResult::from_response(&payload));
            if let Ok(result) = &outcome {
                leptos::logging::log!("certificate {id} evaluated: {}", result.decision.label());
            }
            if alive_request.load(Ordering::Relaxed) {
                if evaluation.try_update(|s| s.complete_processing(outcome)).is_none() {
                    leptos::logging::log!("certificate {id}: page disposed before processing finished");
                }
            }
        });

        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let request_confirmation = move |action: PendingAction| evaluation.update(|s| s.pending = Some(action));

    let on_back = Callback::new(move |target: ReturnTarget| {
        if let Some(path) = evaluation.try_update(|s| s.return_to(target)).flatten() {
            leave_to.set(Some(path));
        }
    });

    let results_actions = ResultsActions {
        on_back_to_dashboard: on_back,
        on_send_for_approval: Callback::new(move |()| request_confirmation(PendingAction::SendForApproval)),
        on_request_review: Callback::new(move |()| evaluation.update(EvaluationState::open_review)),
        on_submit_new_application: Callback::new(move |()| {
            request_confirmation(PendingAction::SubmitNewApplication);
        }),
    };

    let appeal_actions = AppealActions {
        on_back,
        on_refresh_applications: Some(Callback::new(move |()| evaluation.update(|s| s.appeal_filed = true))),
    };

    let on_confirm = Callback::new(move |()| {
        let Some(action) = evaluation.try_update(EvaluationState::confirm_pending).flatten() else {
            return;
        };
        match action {
            PendingAction::CancelProcessing | PendingAction::SubmitNewApplication => {
                leave_to.set(Some(DASHBOARD_PATH));
            }
            PendingAction::SendForApproval => {
                #[cfg(feature = "hydrate")]
                {
                    let id = certificate_id.get_untracked();
                    leptos::task::spawn_local(async move {
                        let outcome = crate::net::api::send_for_approval(&id).await;
                        if evaluation.try_update(|s| s.approval_outcome(outcome)).is_none() {
                            leptos::logging::log!("certificate {id}: page disposed before approval finished");
                        }
                    });
                }
            }
        }
    });

    let view_kind = Memo::new(move |_| evaluation.with(|s| s.view));

    view! {
        <div class="evaluation-page">
            <header class="evaluation-page__header toolbar">
                <a class="toolbar__title" href=DASHBOARD_PATH>"Work Certificate Evaluation"</a>
                <span class="toolbar__divider"></span>
                <span class="toolbar__certificate">{move || certificate_id.get()}</span>
                <Show when=move || evaluation.with(|s| s.appeal_filed)>
                    <span class="chip chip--pending">"Appeal pending"</span>
                </Show>
            </header>
            <main class="evaluation-page__body">
                {move || match view_kind.get() {
                    EvaluationView::Processing => ().into_any(),
                    EvaluationView::Results => {
                        view! {
                            <ResultsView
                                results=Signal::derive(move || evaluation.with(|s| s.results.clone()))
                                error=Signal::derive(move || evaluation.with(|s| s.error.clone()))
                                actions=results_actions
                            />
                        }
                            .into_any()
                    }
                    EvaluationView::RequestReview => {
                        let results = evaluation.with_untracked(|s| s.results.clone()).unwrap_or_default();
                        view! {
                            <AppealForm
                                results=results
                                certificate_id=certificate_id.get_untracked()
                                actions=appeal_actions
                            />
                        }
                            .into_any()
                    }
                }}
            </main>
            <ProcessingModal
                is_open=Signal::derive(move || evaluation.with(EvaluationState::is_processing))
                processing=Signal::derive(move || evaluation.with(|s| s.processing))
                on_cancel=Callback::new(move |()| request_confirmation(PendingAction::CancelProcessing))
            />
            <ConfirmDialog
                is_open=Signal::derive(move || evaluation.with(|s| s.pending.is_some()))
                request=Signal::derive(move || {
                    evaluation.with(|s| s.pending.map(PendingAction::confirmation).unwrap_or_default())
                })
                on_confirm=on_confirm
                on_cancel=Callback::new(move |()| evaluation.update(|s| s.pending = None))
            />
            <MessageDialog
                is_open=Signal::derive(move || evaluation.with(|s| s.message.is_some()))
                request=Signal::derive(move || evaluation.with(|s| s.message.clone().unwrap_or_default()))
                on_close=Callback::new(move |()| evaluation.update(|s| s.message = None))
            />
        </div>
    }
}
