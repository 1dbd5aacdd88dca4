//! Session lifecycle over a private (signed + encrypted) cookie.
//!
//! The client holds only ciphertext; the `permitted` flag and expiry are
//! validated server-side on every request. Expiry is a fixed absolute
//! deadline from creation, not sliding.

use axum_extra::extract::cookie::{Cookie, PrivateCookieJar, SameSite};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use time::Duration;

use crate::error::SoapboxError;

pub const SESSION_COOKIE: &str = "soapbox_session";
pub const SESSION_TTL_MINUTES: i64 = 30;

/// Payload carried inside the session cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub permitted: bool,
    pub expires_at: DateTime<Utc>,
}

impl SessionClaims {
    /// A freshly permitted session expiring [`SESSION_TTL_MINUTES`] from now.
    pub fn permitted_now() -> Self {
        Self {
            permitted: true,
            expires_at: Utc::now() + chrono::Duration::minutes(SESSION_TTL_MINUTES),
        }
    }

    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.permitted && now < self.expires_at
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }
}

/// Issue a fresh permitted session cookie, replacing any existing one.
pub fn establish(jar: PrivateCookieJar) -> Result<PrivateCookieJar, SoapboxError> {
    let payload = serde_json::to_string(&SessionClaims::permitted_now())?;
    Ok(jar.add(build_cookie(payload)))
}

/// Drop the session cookie. Idempotent.
pub fn clear(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.remove(removal_cookie())
}

/// Whether the jar carries a present, well-formed, unexpired, permitted
/// session. Anything else fails closed.
pub fn check(jar: &PrivateCookieJar) -> bool {
    jar.get(SESSION_COOKIE)
        .and_then(|c| serde_json::from_str::<SessionClaims>(c.value()).ok())
        .is_some_and(|claims| claims.is_valid())
}

fn build_cookie(payload: String) -> Cookie<'static> {
    Cookie::build(Cookie::new(SESSION_COOKIE.to_string(), payload))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::minutes(SESSION_TTL_MINUTES))
        .build()
}

fn removal_cookie() -> Cookie<'static> {
    Cookie::build(Cookie::new(SESSION_COOKIE.to_string(), String::new()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
