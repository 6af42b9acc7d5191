//! Single-button notice for outcomes of background actions.

use leptos::prelude::*;

use crate::state::dialog::MessageRequest;

#[component]
pub fn MessageDialog(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] request: Signal<MessageRequest>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            {move || {
                let request = request.get();
                view! {
                    <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                        <div
                            class=format!("dialog dialog--message dialog--{}", request.kind.modifier())
                            role="dialog"
                            on:click=move |ev| ev.stop_propagation()
                        >
                            {request.kind.icon().map(|icon| view! { <div class="dialog__icon">{icon}</div> })}
                            <h2 class="dialog__title">{request.title}</h2>
                            <p class="dialog__message">{request.message}</p>
                            <div class="dialog__actions">
                                <button class="btn btn--primary" type="button" on:click=move |_| on_close.run(())>
                                    "OK"
                                </button>
                            </div>
                        </div>
                    </div>
                }
            }}
        </Show>
    }
}
