//! Generic "are you sure" gate. Callers decide what confirming means.

#[cfg(all(test, feature = "ssr"))]
#[path = "confirm_dialog_test.rs"]
mod confirm_dialog_test;

use leptos::prelude::*;

use crate::state::dialog::ConfirmationRequest;

/// Renders nothing while `is_open` is false. The only exits are the two
/// buttons, each mapped to one callback.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] request: Signal<ConfirmationRequest>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            {move || {
                let request = request.get();
                let style = request.variant.style();
                view! {
                    <div class="dialog-backdrop">
                        <div class="dialog dialog--confirm" role="alertdialog" aria-modal="true">
                            <div class=style.icon_class>{style.icon}</div>
                            <h2 class="dialog__title">{request.title}</h2>
                            <p class="dialog__message">{request.message}</p>
                            <div class="dialog__actions">
                                <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                                    {request.cancel_text}
                                </button>
                                <button class=style.confirm_class type="button" on:click=move |_| on_confirm.run(())>
                                    {request.confirm_text}
                                </button>
                            </div>
                        </div>
                    </div>
                }
            }}
        </Show>
    }
}
