//! Modal shown while a certificate is being evaluated.

#[cfg(all(test, feature = "ssr"))]
#[path = "processing_modal_test.rs"]
mod processing_modal_test;

use leptos::prelude::*;

use crate::state::processing::{ProcessingState, stage_rows};

/// Progress bar plus the six-stage list. The header close icon and the
/// footer link are two triggers for the same `on_cancel`.
#[component]
pub fn ProcessingModal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] processing: Signal<ProcessingState>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <div class="dialog-backdrop">
                <div class="dialog processing-modal" role="dialog" aria-modal="true">
                    <div class="processing-modal__header">
                        <h2>"Processing Certificate"</h2>
                        <button
                            class="processing-modal__close"
                            type="button"
                            title="Cancel processing"
                            on:click=move |_| on_cancel.run(())
                        >
                            "✕"
                        </button>
                    </div>
                    <div class="processing-modal__spinner" aria-hidden="true"></div>
                    <p class="processing-modal__current">{move || processing.get().current_label()}</p>
                    <div class="processing-modal__bar">
                        <div class="processing-modal__fill" style=move || processing.get().progress_style()></div>
                    </div>
                    <ul class="processing-modal__stages">
                        {move || {
                            stage_rows(processing.get().stage)
                                .into_iter()
                                .map(|(label, status)| {
                                    view! {
                                        <li class=format!(
                                            "processing-modal__stage processing-modal__stage--{}",
                                            status.modifier(),
                                        )>
                                            <span class="processing-modal__dot"></span>
                                            {label}
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                    <div class="processing-modal__footer">
                        <button class="btn btn--link" type="button" on:click=move |_| on_cancel.run(())>
                            "Cancel Processing"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
