//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Request-level errors raised by the HTTP layer.
///
/// Every failed call surfaces exactly one of these; the SDK never retries on
/// its own. Callers can branch on [`ApiError::http_status`] — `0` means the
/// request never produced an HTTP response (timeout, DNS, connection reset),
/// anything else is the real status the server returned.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never reached the server or timed out in flight.
    #[error("Transport failure: {message}")]
    Transport { message: String },

    /// The server answered, but either the HTTP status or the response
    /// envelope (`success: false`) indicates failure.
    #[error("API failure ({status}): {message}")]
    Api {
        status: u16,
        message: String,
        /// Parsed response body, kept for diagnostics.
        body: Option<serde_json::Value>,
    },

    /// The response body was not the JSON shape we expected.
    #[error("Decode failure ({status}): {message}")]
    Decode { status: u16, message: String },

    /// The HMAC primitive could not be initialized. Fatal misconfiguration,
    /// never retried.
    #[error("Signing failure: {0}")]
    Signing(String),

    /// The request body could not be serialized to JSON.
    #[error("Request serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ApiError {
    /// The HTTP status associated with this failure, or `0` when the failure
    /// happened before any response was received.
    pub fn http_status(&self) -> u16 {
        match self {
            ApiError::Api { status, .. } | ApiError::Decode { status, .. } => *status,
            ApiError::Transport { .. } | ApiError::Signing(_) | ApiError::Serialize(_) => 0,
        }
    }

    /// The parsed response body, when one was captured.
    pub fn response_body(&self) -> Option<&serde_json::Value> {
        match self {
            ApiError::Api { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// Whether this is a transport-level failure (no HTTP response at all).
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_status_is_zero() {
        let err = ApiError::Transport {
            message: "connection refused".to_string(),
        };
        assert_eq!(err.http_status(), 0);
        assert!(err.is_transport());
    }

    #[test]
    fn test_api_failure_keeps_real_status() {
        let err = ApiError::Api {
            status: 422,
            message: "invalid person".to_string(),
            body: Some(serde_json::json!({ "success": false })),
        };
        assert_eq!(err.http_status(), 422);
        assert!(err.response_body().is_some());
        assert!(!err.is_transport());
    }
}
