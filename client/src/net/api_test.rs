use super::*;

#[test]
fn endpoints_use_fixed_base_address() {
    assert_eq!(appeal_endpoint("cert-123"), "http://localhost:8000/certificate/cert-123/appeal");
    assert_eq!(process_endpoint("c1"), "http://localhost:8000/certificate/c1/process");
    assert_eq!(
        send_for_approval_endpoint("c1"),
        "http://localhost:8000/certificate/c1/send-for-approval"
    );
}

#[test]
fn appeal_request_serializes_reason_field() {
    let request = AppealRequest { appeal_reason: "Please reconsider".to_owned() };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        serde_json::json!({ "appeal_reason": "Please reconsider" })
    );
}

#[test]
fn error_detail_reads_detail_field() {
    assert_eq!(error_detail(r#"{"detail":"already appealed"}"#), Some("already appealed".to_owned()));
}

#[test]
fn error_detail_tolerates_garbage() {
    assert_eq!(error_detail("<html>bad gateway</html>"), None);
    assert_eq!(error_detail(""), None);
    assert_eq!(error_detail(r#"{"other":1}"#), None);
    assert_eq!(error_detail(r#"{"detail":"  "}"#), None);
}

#[test]
fn api_error_detail_only_for_status_errors() {
    let err = ApiError::Status { status: 400, detail: Some("nope".to_owned()) };
    assert_eq!(err.detail(), Some("nope"));
    assert_eq!(ApiError::Transport("offline".to_owned()).detail(), None);
}

#[test]
fn check_process_payload_requires_success_flag() {
    let ok = serde_json::json!({ "success": true, "decision": { "ai_decision": "ACCEPTED" } });
    assert_eq!(check_process_payload(ok.clone()), Ok(ok));

    let rejected = serde_json::json!({ "success": false, "message": "OCR failed" });
    assert_eq!(check_process_payload(rejected), Err(ApiError::Rejected("OCR failed".to_owned())));

    let bare = serde_json::json!({});
    assert_eq!(
        check_process_payload(bare),
        Err(ApiError::Rejected("Failed to process certificate".to_owned()))
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_api_is_unavailable_outside_browser() {
    let request = AppealRequest { appeal_reason: "why".to_owned() };
    let outcome = futures::executor::block_on(HttpApi.post_appeal("c1", &request));
    assert_eq!(outcome, Err(ApiError::Unavailable));
}
