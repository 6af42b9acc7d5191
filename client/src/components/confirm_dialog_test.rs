use leptos::tachys::view::RenderHtml;

use super::*;
use crate::state::dialog::DialogVariant;

fn render(is_open: bool, request: ConfirmationRequest) -> String {
    Owner::new().with(|| {
        view! {
            <ConfirmDialog
                is_open=is_open
                request=request
                on_confirm=Callback::new(|()| {})
                on_cancel=Callback::new(|()| {})
            />
        }
        .to_html()
    })
}

#[test]
fn closed_dialog_renders_no_content() {
    let html = render(false, ConfirmationRequest::default());
    assert!(!html.contains("dialog"), "{html}");
    assert!(!html.contains("Are you sure?"), "{html}");
    assert!(!html.contains("<button"), "{html}");
}

#[test]
fn open_dialog_renders_title_and_both_buttons() {
    let html = render(true, ConfirmationRequest::default());
    assert!(html.contains("dialog-backdrop"), "{html}");
    assert!(html.contains("Are you sure?"), "{html}");
    assert!(html.contains("This action cannot be undone."), "{html}");
    assert!(html.contains("Cancel"), "{html}");
    assert!(html.contains("Confirm"), "{html}");
    assert_eq!(html.matches("<button").count(), 2, "{html}");
    assert!(html.contains("btn btn--danger"), "{html}");
}

#[test]
fn open_dialog_uses_custom_text_and_variant() {
    let request = ConfirmationRequest {
        title: "Send for approval?".to_owned(),
        message: "Forward to a reviewer.".to_owned(),
        confirm_text: "Send".to_owned(),
        cancel_text: "Back".to_owned(),
        variant: DialogVariant::Primary,
    };
    let html = render(true, request);
    assert!(html.contains("Send for approval?"), "{html}");
    assert!(html.contains("Send"), "{html}");
    assert!(html.contains("Back"), "{html}");
    assert!(html.contains("btn btn--primary"), "{html}");
    assert!(!html.contains("btn--danger"), "{html}");
}
