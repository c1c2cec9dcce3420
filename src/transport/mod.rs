//! Transport layer: wire-format details for the web API endpoints
//! (serialization/deserialization).

mod balance;
mod money;
mod reports;
mod send_sms;
mod upload;

pub use balance::decode_balance_response;
pub use reports::{decode_reports_response, encode_reports_query};
pub use send_sms::{decode_send_response, encode_send_body};
pub use upload::decode_upload_response;

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Decoded response envelope shared by every endpoint.
///
/// `success` is the JSON flag (absent means `false`: the backend's error
/// bodies carry only `{"error": ...}`). `data` is populated only for
/// successful responses.
pub struct Envelope<T> {
    pub success: bool,
    pub error: Option<String>,
    pub data: Option<T>,
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorProbe {
    #[serde(default)]
    error: Option<String>,
}

/// Best-effort extraction of a structured `{"error": ...}` message from a
/// response body, for surfacing server text on non-2xx statuses.
pub fn probe_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorProbe>(body)
        .ok()
        .and_then(|probe| probe.error)
        .filter(|message| !message.trim().is_empty())
}
