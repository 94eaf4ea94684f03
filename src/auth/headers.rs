//! Per-request authentication header bundle.

use chrono::Utc;

use crate::auth::signature;
use crate::auth::SigningContext;
use crate::error::ApiError;

pub const HEADER_CLIENT_ID: &str = "x-client-id";
pub const HEADER_SIGNATURE: &str = "x-signature";
pub const HEADER_TIMESTAMP: &str = "x-timestamp";
pub const HEADER_TENANT_ID: &str = "x-tenant-id";

/// The four authentication headers attached to every request.
///
/// Built fresh per call — the timestamp (and therefore the signature) must
/// reflect send time so the backend's clock-skew window can reject replays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    pub client_id: String,
    /// Base64 HMAC-SHA256 signature.
    pub signature: String,
    /// Milliseconds since epoch, decimal string.
    pub timestamp: String,
    pub tenant_id: String,
}

impl AuthHeaders {
    /// Header name/value pairs in wire order.
    pub fn pairs(&self) -> [(&'static str, &str); 4] {
        [
            (HEADER_CLIENT_ID, self.client_id.as_str()),
            (HEADER_SIGNATURE, self.signature.as_str()),
            (HEADER_TIMESTAMP, self.timestamp.as_str()),
            (HEADER_TENANT_ID, self.tenant_id.as_str()),
        ]
    }
}

/// Build the authentication headers for one outgoing request.
///
/// `path` must be the un-queried route; `body` the exact JSON text that will
/// be sent (if any).
pub fn build_headers(
    method: &str,
    path: &str,
    body: Option<&str>,
    ctx: &SigningContext,
) -> Result<AuthHeaders, ApiError> {
    let timestamp = Utc::now().timestamp_millis().to_string();
    build_headers_at(method, path, body, ctx, timestamp)
}

/// Same as [`build_headers`] with an explicit timestamp. Split out so tests
/// can pin the clock.
pub(crate) fn build_headers_at(
    method: &str,
    path: &str,
    body: Option<&str>,
    ctx: &SigningContext,
    timestamp: String,
) -> Result<AuthHeaders, ApiError> {
    let string_to_sign = signature::string_to_sign(method, path, &timestamp, body);
    let sig = signature::sign(&string_to_sign, ctx.client_secret())?;

    Ok(AuthHeaders {
        client_id: ctx.client_id().to_string(),
        signature: sig,
        timestamp,
        tenant_id: ctx.tenant_id().to_string(),
    })
}
