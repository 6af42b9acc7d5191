use leptos::tachys::view::RenderHtml;

use super::*;

fn render(is_open: bool, processing: ProcessingState) -> String {
    Owner::new().with(|| {
        view! { <ProcessingModal is_open=is_open processing=processing on_cancel=Callback::new(|()| {})/> }
            .to_html()
    })
}

#[test]
fn stage_two_marks_rows_and_bar() {
    let html = render(true, ProcessingState { stage: 2, progress: 45 });
    assert_eq!(html.matches("processing-modal__stage--completed").count(), 2, "{html}");
    assert_eq!(html.matches("processing-modal__stage--active").count(), 1, "{html}");
    assert_eq!(html.matches("processing-modal__stage--pending").count(), 3, "{html}");
    assert!(html.contains("width: 45%"), "{html}");
    assert!(html.contains("Content Analysis"), "{html}");
}

#[test]
fn both_cancel_triggers_are_rendered() {
    let html = render(true, ProcessingState { stage: 1, progress: 25 });
    assert!(html.contains("processing-modal__close"), "{html}");
    assert!(html.contains("✕"), "{html}");
    assert!(html.contains("Cancel Processing"), "{html}");
    assert_eq!(html.matches("<button").count(), 2, "{html}");
}

#[test]
fn out_of_range_stage_shows_fallback_label() {
    let html = render(true, ProcessingState { stage: 9, progress: 100 });
    assert!(html.contains("Processing..."), "{html}");
    assert_eq!(html.matches("processing-modal__stage--completed").count(), 6, "{html}");
}

#[test]
fn closed_modal_renders_nothing() {
    let html = render(false, ProcessingState { stage: 2, progress: 45 });
    assert!(!html.contains("processing-modal"), "{html}");
}
