//! Static bearer-token bypass for automation.
//!
//! A root secret, not a per-user credential: it grants the privileged
//! operations without a session. Comparison is constant-time.

use axum::http::{HeaderMap, header};
use subtle::ConstantTimeEq;

/// Check `Authorization: Bearer <token>` against the configured secret.
/// An empty configured secret disables the bypass entirely.
pub fn authorize_bypass(headers: &HeaderMap, expected: &str) -> bool {
    if expected.is_empty() {
        return false;
    }
    let Some(auth) = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    let auth = auth.trim();
    let Some(token) = auth
        .strip_prefix("Bearer ")
        .or_else(|| auth.strip_prefix("bearer "))
    else {
        return false;
    };
    bool::from(token.as_bytes().ct_eq(expected.as_bytes()))
}
