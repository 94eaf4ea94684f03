//! Client configuration.

use serde::Deserialize;

use crate::network::DEFAULT_TIMEOUT_MS;

/// Configuration for a Peoplecore API client.
///
/// Constructed once at application start and handed to
/// [`PeoplecoreClient`](crate::client::PeoplecoreClient); immutable for the
/// lifetime of the client. The `client_secret` is only ever used as the HMAC
/// key — it is never transmitted.
#[derive(Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API, e.g. `https://api.peoplecore.example`.
    pub base_url: String,
    /// Client identifier sent in the `x-client-id` header.
    pub client_id: String,
    /// HMAC key. Never sent over the wire.
    pub client_secret: String,
    /// Tenant identifier sent in the `x-tenant-id` header.
    pub tenant_id: String,
    /// Per-request timeout in milliseconds. Defaults to 30 000.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl ApiConfig {
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS)
    }
}

// Manual Debug so the secret never lands in logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("tenant_id", &self.tenant_id)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}
