use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use super::*;

struct MockTransport {
    reply: Result<(), ApiError>,
    calls: Cell<usize>,
    sent: RefCell<Vec<(String, AppealRequest)>>,
}

impl MockTransport {
    fn replying(reply: Result<(), ApiError>) -> Self {
        Self { reply, calls: Cell::new(0), sent: RefCell::new(Vec::new()) }
    }
}

impl AppealTransport for MockTransport {
    async fn post_appeal(&self, certificate_id: &str, request: &AppealRequest) -> Result<(), ApiError> {
        self.calls.set(self.calls.get() + 1);
        self.sent.borrow_mut().push((certificate_id.to_owned(), request.clone()));
        self.reply.clone()
    }
}

/// Drive the form the way the view does: begin, send, finish, refresh.
fn submit(state: &mut AppealState, transport: &MockTransport, refreshes: &Cell<usize>) {
    let Some(request) = state.begin_submit() else {
        return;
    };
    assert!(state.is_submitting());
    let outcome = block_on(send_appeal(transport, "cert-123", &request));
    if state.finish_submit(outcome) {
        refreshes.set(refreshes.get() + 1);
    }
}

fn state_with(reason: &str) -> AppealState {
    AppealState { reason: reason.to_owned(), ..AppealState::default() }
}

#[test]
fn blank_reasons_fail_validation_without_network() {
    for reason in ["", " ", "\n\t  "] {
        let transport = MockTransport::replying(Ok(()));
        let refreshes = Cell::new(0);
        let mut state = state_with(reason);
        submit(&mut state, &transport, &refreshes);
        assert_eq!(state.status, AppealStatus::Failed(AppealError::Validation));
        assert_eq!(state.error().map(|e| e.to_string()).as_deref(), Some("Please provide a reason for your appeal."));
        assert_eq!(transport.calls.get(), 0);
        assert_eq!(refreshes.get(), 0);
    }
}

#[test]
fn success_reaches_submitted_and_refreshes_once() {
    let transport = MockTransport::replying(Ok(()));
    let refreshes = Cell::new(0);
    let mut state = state_with("The training matched my degree.");
    submit(&mut state, &transport, &refreshes);

    assert!(state.is_submitted());
    assert_eq!(state.error(), None);
    assert_eq!(refreshes.get(), 1);
    assert_eq!(transport.calls.get(), 1);
    let sent = transport.sent.borrow();
    assert_eq!(sent[0].0, "cert-123");
    assert_eq!(sent[0].1.appeal_reason, "The training matched my degree.");
}

#[test]
fn server_rejection_shows_generic_message() {
    let transport = MockTransport::replying(Err(ApiError::Status {
        status: 400,
        detail: Some("Appeal window closed".to_owned()),
    }));
    let refreshes = Cell::new(0);
    let mut state = state_with("please");
    submit(&mut state, &transport, &refreshes);

    assert!(!state.is_submitting());
    assert_eq!(state.status, AppealStatus::Failed(AppealError::Submission));
    assert_eq!(
        state.error().map(|e| e.to_string()).as_deref(),
        Some("Failed to submit appeal. Please try again.")
    );
    assert_eq!(refreshes.get(), 0);
    assert!(state.can_submit());
}

#[test]
fn transport_failure_is_a_submission_error() {
    let transport = MockTransport::replying(Err(ApiError::Transport("offline".to_owned())));
    let refreshes = Cell::new(0);
    let mut state = state_with("please");
    submit(&mut state, &transport, &refreshes);
    assert_eq!(state.error(), Some(AppealError::Submission));
}

#[test]
fn retry_after_failure_sends_again() {
    let failing = MockTransport::replying(Err(ApiError::Transport("offline".to_owned())));
    let working = MockTransport::replying(Ok(()));
    let refreshes = Cell::new(0);
    let mut state = state_with("please");

    submit(&mut state, &failing, &refreshes);
    submit(&mut state, &working, &refreshes);

    assert_eq!(failing.calls.get(), 1);
    assert_eq!(working.calls.get(), 1);
    assert!(state.is_submitted());
    assert_eq!(refreshes.get(), 1);
}

#[test]
fn begin_submit_refuses_while_in_flight_or_done() {
    let mut state = state_with("reason");
    assert!(state.begin_submit().is_some());
    assert!(state.begin_submit().is_none());
    assert!(!state.can_submit());

    state.finish_submit(Ok(()));
    assert!(state.begin_submit().is_none());
    assert!(state.is_submitted());
}

#[test]
fn request_body_keeps_reason_verbatim() {
    let mut state = state_with("  spaced reason  ");
    let request = state.begin_submit().unwrap();
    assert_eq!(request.appeal_reason, "  spaced reason  ");
}

#[test]
fn can_submit_tracks_reason() {
    assert!(!state_with("").can_submit());
    assert!(!state_with("   ").can_submit());
    assert!(state_with("x").can_submit());
}
