//! Low-level HTTP client — `PeoplecoreHttp`.
//!
//! Owns the request lifecycle: path normalization, header signing, query
//! append (after signing), timeout enforcement, envelope parsing, and
//! success/failure classification. One attempt per call — retry policy, if
//! any, belongs to the caller.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::auth::{self, SigningContext};
use crate::error::{ApiError, SdkError};
use crate::http::envelope::{failure_message, ApiEnvelope};
use crate::http::query::{encode_query, ListParams};
use crate::network::API_MOUNT_PREFIX;

/// Low-level HTTP client for the Peoplecore REST API.
///
/// Cheap to clone; the signing context is shared read-only.
#[derive(Clone)]
pub struct PeoplecoreHttp {
    base_url: String,
    client: Client,
    signing: Arc<SigningContext>,
    timeout: Duration,
}

impl PeoplecoreHttp {
    pub fn new(
        base_url: &str,
        signing: SigningContext,
        timeout_ms: u64,
    ) -> Result<Self, SdkError> {
        let client = Client::builder()
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| SdkError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            signing: Arc::new(signing),
            timeout: Duration::from_millis(timeout_ms),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Verb methods ─────────────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<ApiEnvelope<T>, ApiError> {
        self.request(Method::GET, path, query, None).await
    }

    /// GET with list-pagination parameters serialized into the query string.
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &ListParams,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        self.request(Method::GET, path, &params.to_query(), None)
            .await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        let body = serde_json::to_string(body)?;
        self.request(Method::POST, path, &[], Some(body)).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        let body = serde_json::to_string(body)?;
        self.request(Method::PUT, path, &[], Some(body)).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        let body = serde_json::to_string(body)?;
        self.request(Method::PATCH, path, &[], Some(body)).await
    }

    /// DELETE is sent without a body, so it signs against the path — the
    /// backend performs the matching body-absent check.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        self.request(Method::DELETE, path, &[], None).await
    }

    // ── Request core ─────────────────────────────────────────────────────

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<String>,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        // Headers are signed against the mount-normalized, un-queried path.
        let path = normalize_path(path);
        let headers =
            auth::build_headers(method.as_str(), &path, body.as_deref(), &self.signing)?;
        let url = self.build_url(&path, query);

        debug!("{} {}", method, path);

        let mut req = self
            .client
            .request(method, &url)
            .timeout(self.timeout);
        for (name, value) in headers.pairs() {
            req = req.header(name, value);
        }
        if let Some(body) = body {
            req = req.header(CONTENT_TYPE, "application/json").body(body);
        }

        let resp = req.send().await.map_err(|e| ApiError::Transport {
            message: e.to_string(),
        })?;
        let status = resp.status().as_u16();
        let text = resp.text().await.map_err(|e| ApiError::Transport {
            message: format!("Failed to read response body: {}", e),
        })?;

        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| ApiError::Decode {
                status,
                message: format!("Response body is not valid JSON: {}", e),
            })?;

        if !(200..300).contains(&status) {
            return Err(ApiError::Api {
                status,
                message: failure_message(&value)
                    .unwrap_or_else(|| format!("Request failed with status {}", status)),
                body: Some(value),
            });
        }

        let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_value(value.clone())
            .map_err(|e| ApiError::Decode {
                status,
                message: format!("Response is not a valid envelope: {}", e),
            })?;

        if !envelope.success {
            return Err(ApiError::Api {
                status,
                message: envelope
                    .message
                    .or_else(|| failure_message(&value))
                    .unwrap_or_else(|| "Request failed".to_string()),
                body: Some(value),
            });
        }

        let data = envelope
            .data
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| ApiError::Decode {
                status,
                message: format!("Envelope data has unexpected shape: {}", e),
            })?;

        Ok(ApiEnvelope {
            success: envelope.success,
            data,
            count: envelope.count,
            total_count: envelope.total_count,
            message: envelope.message,
            status,
        })
    }

    fn build_url(&self, path: &str, query: &[(String, String)]) -> String {
        if query.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, encode_query(query))
        }
    }
}

/// Prepend the `/api` mount prefix unless the caller already did.
fn normalize_path(path: &str) -> String {
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };
    match path.strip_prefix(API_MOUNT_PREFIX) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => path,
        _ => format!("{}{}", API_MOUNT_PREFIX, path),
    }
}
