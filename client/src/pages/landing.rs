//! Landing page: pick a certificate and start its evaluation.
//!
//! This is also the "dashboard" target every back action returns to.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Trim and check a user-entered certificate id.
///
/// # Errors
///
/// Returns the message to show when the id is empty or carries characters
/// outside ASCII letters, digits, `-` and `_`.
pub fn validate_certificate_id(raw: &str) -> Result<String, &'static str> {
    let id = raw.trim();
    if id.is_empty() {
        return Err("Enter a certificate ID first.");
    }
    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err("Certificate IDs may only contain letters, digits, '-' and '_'.");
    }
    Ok(id.to_owned())
}

pub fn evaluation_path(certificate_id: &str) -> String {
    format!("/certificate/{certificate_id}")
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let certificate_id = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_certificate_id(&certificate_id.get()) {
            Ok(id) => {
                info.set(String::new());
                navigate(&evaluation_path(&id), NavigateOptions::default());
            }
            Err(message) => info.set(message.to_owned()),
        }
    };

    view! {
        <div class="landing-page">
            <div class="landing-card">
                <h1>"Work Certificate Evaluation"</h1>
                <p class="landing-card__subtitle">
                    "Evaluate an uploaded work certificate for practical training credits."
                </p>
                <form class="landing-card__form" on:submit=on_submit>
                    <label class="landing-card__label" for="certificate-id">"Certificate ID"</label>
                    <input
                        id="certificate-id"
                        class="landing-card__input"
                        type="text"
                        placeholder="e.g. 3f2a9c1e"
                        prop:value=move || certificate_id.get()
                        on:input=move |ev| certificate_id.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">"Evaluate"</button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="landing-card__info">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
