//! High-level client — `PeoplecoreClient` with nested sub-client accessors.
//!
//! Constructed once at application start and threaded through explicitly; the
//! SDK keeps no ambient global state.

use crate::auth::SigningContext;
use crate::config::ApiConfig;
use crate::domain::person::client::Persons;
use crate::error::SdkError;
use crate::http::PeoplecoreHttp;
use crate::network::DEFAULT_TIMEOUT_MS;

// Re-export sub-client types for convenience.
pub use crate::domain::person::client::Persons as PersonsClient;

/// The primary entry point for the Peoplecore SDK.
///
/// Cheap to clone; all clones share the same HTTP pool and signing context.
#[derive(Clone)]
pub struct PeoplecoreClient {
    pub(crate) http: PeoplecoreHttp,
}

impl PeoplecoreClient {
    pub fn builder() -> PeoplecoreClientBuilder {
        PeoplecoreClientBuilder::default()
    }

    /// Build a client directly from a configuration object.
    pub fn from_config(config: &ApiConfig) -> Result<Self, SdkError> {
        let signing = SigningContext::new(
            config.client_id.clone(),
            config.client_secret.clone(),
            config.tenant_id.clone(),
        );
        Ok(Self {
            http: PeoplecoreHttp::new(&config.base_url, signing, config.timeout_ms())?,
        })
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn persons(&self) -> Persons<'_> {
        Persons { client: self }
    }

    /// The low-level HTTP client, for endpoints not covered by a sub-client.
    pub fn http(&self) -> &PeoplecoreHttp {
        &self.http
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct PeoplecoreClientBuilder {
    base_url: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    tenant_id: Option<String>,
    timeout_ms: Option<u64>,
}

impl PeoplecoreClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    pub fn credentials(mut self, client_id: &str, client_secret: &str) -> Self {
        self.client_id = Some(client_id.to_string());
        self.client_secret = Some(client_secret.to_string());
        self
    }

    pub fn tenant_id(mut self, tenant_id: &str) -> Self {
        self.tenant_id = Some(tenant_id.to_string());
        self
    }

    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    pub fn build(self) -> Result<PeoplecoreClient, SdkError> {
        let config = ApiConfig {
            base_url: self
                .base_url
                .ok_or_else(|| SdkError::Config("base_url is required".to_string()))?,
            client_id: self
                .client_id
                .ok_or_else(|| SdkError::Config("client_id is required".to_string()))?,
            client_secret: self
                .client_secret
                .ok_or_else(|| SdkError::Config("client_secret is required".to_string()))?,
            tenant_id: self
                .tenant_id
                .ok_or_else(|| SdkError::Config("tenant_id is required".to_string()))?,
            timeout_ms: Some(self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS)),
        };
        PeoplecoreClient::from_config(&config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_base_url() {
        let result = PeoplecoreClient::builder()
            .credentials("cid", "secret")
            .tenant_id("tid")
            .build();
        assert!(matches!(result, Err(SdkError::Config(_))));
    }

    #[test]
    fn test_builder_requires_credentials() {
        let result = PeoplecoreClient::builder()
            .base_url("https://api.example.com")
            .tenant_id("tid")
            .build();
        assert!(matches!(result, Err(SdkError::Config(_))));
    }

    #[test]
    fn test_builder_complete() {
        let client = PeoplecoreClient::builder()
            .base_url("https://api.example.com")
            .credentials("cid", "secret")
            .tenant_id("tid")
            .timeout_ms(5_000)
            .build();
        assert!(client.is_ok());
    }
}
