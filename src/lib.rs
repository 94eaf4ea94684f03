//! # Peoplecore SDK
//!
//! Rust client for the Peoplecore HR API. Every request is authenticated with
//! an HMAC-SHA256 signature over a canonical string derived from the method,
//! path, body, and a fresh millisecond timestamp; responses arrive in a
//! uniform `{ success, data, count, totalCount, message }` envelope.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — config, errors, protocol constants (always available)
//! 2. **Auth** — canonical string-to-sign + HMAC signing + header assembly
//! 3. **HTTP** — `PeoplecoreHttp`: signed request execution, timeout,
//!    envelope classification
//! 4. **High-Level Client** — `PeoplecoreClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use peoplecore_sdk::prelude::*;
//!
//! let client = PeoplecoreClient::builder()
//!     .base_url("https://api.peoplecore.example")
//!     .credentials("client-id", "client-secret")
//!     .tenant_id("tenant-id")
//!     .build()?;
//!
//! let page = client.persons().list(&ListParams::new().limit(25)).await?;
//! let person = client.persons().get("p-123").await?;
//! ```
//!
//! The SDK never retries on its own; every call is a single attempt that
//! either returns unwrapped data or raises a typed [`error::ApiError`].

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Client configuration.
pub mod config;

/// Domain modules (vertical slices): wire types and sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Protocol constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Request signing: canonical string, HMAC-SHA256, header bundle.
pub mod auth;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// Signed HTTP execution and envelope handling.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `PeoplecoreClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Configuration + auth
    pub use crate::auth::{AuthHeaders, SigningContext};
    pub use crate::config::ApiConfig;

    // Domain wire types
    pub use crate::domain::person::{
        CreatePersonRequest, EmploymentResponse, FamilyMemberResponse, PersonResponse,
        UpdatePersonRequest,
    };

    // Errors
    pub use crate::error::{ApiError, SdkError};

    // Network constants
    pub use crate::network::{API_MOUNT_PREFIX, DEFAULT_TIMEOUT_MS};

    // HTTP layer + client
    #[cfg(feature = "http")]
    pub use crate::client::{PeoplecoreClient, PeoplecoreClientBuilder, PersonsClient};
    #[cfg(feature = "http")]
    pub use crate::http::{ApiEnvelope, ListPage, ListParams, PeoplecoreHttp};
}
