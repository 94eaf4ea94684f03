//! Authentication: canonical string computation, HMAC signing, header assembly.

pub mod headers;
pub mod signature;

pub use headers::{build_headers, AuthHeaders};

/// Immutable signing credentials shared by all requests of one client.
///
/// Created once at startup from [`ApiConfig`](crate::config::ApiConfig) and
/// only ever read afterwards, so it is safe to share across any number of
/// concurrent requests.
#[derive(Clone)]
pub struct SigningContext {
    client_id: String,
    client_secret: String,
    tenant_id: String,
}

impl SigningContext {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        tenant_id: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            tenant_id: tenant_id.into(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The HMAC key. Never transmitted.
    pub(crate) fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }
}

// Manual Debug so the secret never lands in logs.
impl std::fmt::Debug for SigningContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningContext")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("tenant_id", &self.tenant_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let ctx = SigningContext::new("cid", "hunter2", "tid");
        let printed = format!("{:?}", ctx);
        assert!(!printed.contains("hunter2"));
    }
}
