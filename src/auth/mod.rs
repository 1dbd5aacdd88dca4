//! Authentication: Argon2id credential hashing, the private-cookie session
//! lifecycle, and the static bearer-token bypass.

pub mod bearer;
pub mod password;
pub mod session;

use axum::http::HeaderMap;
use axum_extra::extract::cookie::PrivateCookieJar;

/// Gate for the privileged endpoints: a permitted session or the static
/// bypass token both pass.
pub fn session_or_bypass(jar: &PrivateCookieJar, headers: &HeaderMap, bearer_token: &str) -> bool {
    bearer::authorize_bypass(headers, bearer_token) || session::check(jar)
}
