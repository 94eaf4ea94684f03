//! HMAC-SHA256 request signing.
//!
//! The backend verifies every request against its own half of this scheme, so
//! the canonical string must match bit-for-bit:
//!
//! 1. POST/PUT/PATCH/DELETE with a body sign `body + timestamp` — the path is
//!    not part of the string at all.
//! 2. Everything else (GET, or a body-bearing method sent without a body)
//!    signs `lowercase(strip_api_prefix(path)) + timestamp`. Query parameters
//!    are never signed; they are appended to the URL afterwards.
//!
//! The `/api` mount prefix is stripped before lowercasing because the backend
//! strips its own mount point before computing its side. A consequence worth
//! keeping in mind: `/api/persons/1` and `/persons/1` produce identical
//! signatures.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::ApiError;
use crate::network::API_MOUNT_PREFIX;

type HmacSha256 = Hmac<Sha256>;

/// Whether the method carries a request body for signing purposes.
///
/// Case-insensitive. Note that body *presence* still decides which branch of
/// [`string_to_sign`] runs — a PATCH without a body signs like a GET.
pub fn is_body_bearing(method: &str) -> bool {
    ["POST", "PUT", "PATCH", "DELETE"]
        .iter()
        .any(|m| method.eq_ignore_ascii_case(m))
}

/// Compute the canonical string to sign for one request.
///
/// `path` must be the route only — no query string. `body` is the exact JSON
/// text that will be transmitted (already serialized, non-pretty).
pub fn string_to_sign(method: &str, path: &str, timestamp: &str, body: Option<&str>) -> String {
    match body {
        Some(body) if is_body_bearing(method) => format!("{}{}", body, timestamp),
        _ => {
            let stripped = match path.strip_prefix(API_MOUNT_PREFIX) {
                Some(rest) if rest.starts_with('/') => rest,
                _ => path,
            };
            format!("{}{}", stripped.to_lowercase(), timestamp)
        }
    }
}

/// HMAC-SHA256 over the UTF-8 bytes of `string_to_sign`, base64-encoded.
pub fn sign(string_to_sign: &str, secret: &str) -> Result<String, ApiError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| ApiError::Signing(format!("Invalid HMAC key: {}", e)))?;
    mac.update(string_to_sign.as_bytes());
    Ok(BASE64.encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS: &str = "1700000000000";
    const SECRET: &str = "test-secret";

    #[test]
    fn test_get_signs_stripped_lowercased_path() {
        let sts = string_to_sign("GET", "/api/Persons/123", TS, None);
        assert_eq!(sts, "/persons/1231700000000000");
    }

    #[test]
    fn test_unprefixed_path_signs_like_prefixed() {
        let prefixed = string_to_sign("GET", "/api/persons/123", TS, None);
        let bare = string_to_sign("GET", "/persons/123", TS, None);
        assert_eq!(prefixed, bare);
    }

    #[test]
    fn test_body_bearing_with_body_ignores_path() {
        let body = r#"{"first_name":"Ann"}"#;
        let a = string_to_sign("POST", "/api/persons/profile", TS, Some(body));
        let b = string_to_sign("POST", "/api/some/other/route", TS, Some(body));
        assert_eq!(a, b);
        assert_eq!(a, format!("{}{}", body, TS));
    }

    #[test]
    fn test_body_bearing_without_body_falls_back_to_path() {
        let delete = string_to_sign("DELETE", "/api/persons/123", TS, None);
        let get = string_to_sign("GET", "/api/persons/123", TS, None);
        assert_eq!(delete, get);
    }

    #[test]
    fn test_get_with_body_still_signs_path() {
        // GET is not body-bearing, so a body never reaches the signature.
        let sts = string_to_sign("GET", "/api/persons", TS, Some("{}"));
        assert_eq!(sts, "/persons1700000000000");
    }

    #[test]
    fn test_method_match_is_case_insensitive() {
        assert!(is_body_bearing("post"));
        assert!(is_body_bearing("Patch"));
        assert!(!is_body_bearing("get"));
        assert!(!is_body_bearing("HEAD"));
    }

    #[test]
    fn test_sign_known_vector_path_branch() {
        let sts = string_to_sign("GET", "/api/persons/123", TS, None);
        let sig = sign(&sts, SECRET).unwrap();
        assert_eq!(sig, "1qLvnqHXhWxrM8XkrIRDHXpX1wrJtWicLPBblb7lbno=");
    }

    #[test]
    fn test_sign_known_vector_body_branch() {
        let sts = string_to_sign("POST", "/api/persons/profile", TS, Some(r#"{"first_name":"Ann"}"#));
        let sig = sign(&sts, SECRET).unwrap();
        assert_eq!(sig, "oDfgl/HPm4DBWXQaZECT4qtrtRWQFLekjT0qwB4sqgA=");
    }

    #[test]
    fn test_sign_is_deterministic() {
        let sts = string_to_sign("GET", "/api/persons", TS, None);
        assert_eq!(sign(&sts, SECRET).unwrap(), sign(&sts, SECRET).unwrap());
    }

    #[test]
    fn test_sign_changes_with_any_input() {
        let base = sign(&string_to_sign("GET", "/api/persons", TS, None), SECRET).unwrap();

        let other_path =
            sign(&string_to_sign("GET", "/api/documents", TS, None), SECRET).unwrap();
        let other_ts =
            sign(&string_to_sign("GET", "/api/persons", "1700000000001", None), SECRET).unwrap();
        let other_secret =
            sign(&string_to_sign("GET", "/api/persons", TS, None), "other").unwrap();

        assert_ne!(base, other_path);
        assert_ne!(base, other_ts);
        assert_ne!(base, other_secret);
    }

    #[test]
    fn test_signature_is_valid_base64_of_32_bytes() {
        let sig = sign("anything", SECRET).unwrap();
        let decoded = BASE64.decode(&sig).unwrap();
        assert_eq!(decoded.len(), 32);
    }
}
