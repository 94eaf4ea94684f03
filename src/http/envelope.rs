//! Wire-level response envelope.
//!
//! Every endpoint wraps its payload in the same envelope. The backend is not
//! perfectly consistent about where it puts failure detail, so
//! [`failure_message`] is the single place that normalizes it — call sites
//! never shape-sniff on their own.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Response wrapper returned by every endpoint.
///
/// When `success` is `false` the `data` field is not meaningful; `message`
/// (or nested error detail) explains the failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    /// Number of items in this page, for list endpoints.
    #[serde(default)]
    pub count: Option<u64>,
    /// Total number of matching items across all pages.
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
    /// HTTP status of the response this envelope arrived in. Not part of the
    /// wire shape; stamped by the HTTP layer after parsing.
    #[serde(skip)]
    pub status: u16,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload of a successful envelope.
    pub fn into_data(self) -> Result<T, ApiError> {
        self.data.ok_or(ApiError::Decode {
            status: self.status,
            message: "Response envelope is missing the data field".to_string(),
        })
    }
}

/// One page of a list endpoint, with the envelope's pagination counters.
#[derive(Debug, Clone)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub count: Option<u64>,
    pub total_count: Option<u64>,
}

impl<T> From<ApiEnvelope<Vec<T>>> for ListPage<T> {
    fn from(envelope: ApiEnvelope<Vec<T>>) -> Self {
        Self {
            items: envelope.data.unwrap_or_default(),
            count: envelope.count,
            total_count: envelope.total_count,
        }
    }
}

/// Extract the human-readable failure message from a response body.
///
/// Checks, in order: top-level `message`, nested `error.message`, and a bare
/// string `error` field.
pub fn failure_message(body: &serde_json::Value) -> Option<String> {
    if let Some(message) = body.get("message").and_then(|m| m.as_str()) {
        return Some(message.to_string());
    }
    if let Some(message) = body
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
    {
        return Some(message.to_string());
    }
    body.get("error")
        .and_then(|e| e.as_str())
        .map(|s| s.to_string())
}
