//! REST API helpers for communicating with the certificate backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx responses keep the
//! server's optional `detail` string so callers can log it; whether it is
//! ever shown to the user is the caller's decision.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};

/// Backend base address. Fixed at build time.
pub const API_BASE_URL: &str = "http://localhost:8000";

/// Errors produced by backend calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, etc.).
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },

    /// A 2xx response body could not be decoded.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// A 2xx response reported `success: false`.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Server-provided detail, when the failure carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Body of `POST /certificate/{id}/appeal`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppealRequest {
    pub appeal_reason: String,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct ProcessEnvelope {
    #[serde(default)]
    success: bool,
    message: Option<String>,
}

/// Sends appeals to the backend. Implemented over HTTP by [`HttpApi`].
#[allow(async_fn_in_trait)]
pub trait AppealTransport {
    /// Post one appeal. Any 2xx status is success; the body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx statuses.
    async fn post_appeal(&self, certificate_id: &str, request: &AppealRequest) -> Result<(), ApiError>;
}

/// Browser HTTP client for the backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

impl AppealTransport for HttpApi {
    async fn post_appeal(&self, certificate_id: &str, request: &AppealRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = appeal_endpoint(certificate_id);
            post_json(&url, request).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (certificate_id, request);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn certificate_endpoint(certificate_id: &str, action: &str) -> String {
    format!("{API_BASE_URL}/certificate/{certificate_id}/{action}")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn appeal_endpoint(certificate_id: &str) -> String {
    certificate_endpoint(certificate_id, "appeal")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn process_endpoint(certificate_id: &str) -> String {
    certificate_endpoint(certificate_id, "process")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn send_for_approval_endpoint(certificate_id: &str) -> String {
    certificate_endpoint(certificate_id, "send-for-approval")
}

/// Extract `detail` from an error body. Unparseable bodies yield `None`.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .filter(|d| !d.trim().is_empty())
}

/// Validate the processing envelope and hand back the full payload.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn check_process_payload(payload: serde_json::Value) -> Result<serde_json::Value, ApiError> {
    let envelope: ProcessEnvelope =
        serde_json::from_value(payload.clone()).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !envelope.success {
        return Err(ApiError::Rejected(
            envelope
                .message
                .unwrap_or_else(|| "Failed to process certificate".to_owned()),
        ));
    }
    Ok(payload)
}

#[cfg(feature = "hydrate")]
async fn status_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    ApiError::Status { status, detail: error_detail(&body) }
}

#[cfg(feature = "hydrate")]
async fn post_json<T: Serialize>(url: &str, body: &T) -> Result<gloo_net::http::Response, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(status_error(resp).await);
    }
    Ok(resp)
}

/// Run evaluation on an uploaded certificate via `POST /certificate/{id}/process`.
///
/// Returns the raw response payload; normalisation happens in
/// [`crate::state::evaluation::EvaluationResult::from_response`].
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, an
/// undecodable body, or `success: false`.
pub async fn process_certificate(certificate_id: &str) -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = process_endpoint(certificate_id);
        let resp = gloo_net::http::Request::post(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        let payload: serde_json::Value = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        check_process_payload(payload)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = certificate_id;
        Err(ApiError::Unavailable)
    }
}

/// Forward an accepted certificate for approval via
/// `POST /certificate/{id}/send-for-approval`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-2xx status.
pub async fn send_for_approval(certificate_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = send_for_approval_endpoint(certificate_id);
        post_json(&url, &serde_json::json!({})).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = certificate_id;
        Err(ApiError::Unavailable)
    }
}
