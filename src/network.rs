//! Protocol constants shared across the SDK.

/// Mount prefix the backend serves every route under. Callers may pass paths
/// with or without it; the HTTP layer normalizes before signing.
pub const API_MOUNT_PREFIX: &str = "/api";

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
