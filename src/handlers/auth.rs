use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json, extract::State};
use axum_extra::extract::cookie::PrivateCookieJar;
use serde::Deserialize;
use tracing::{info, warn};

use crate::auth::{self, session};
use crate::error::SoapboxError;
use crate::server::{AppState, Envelope};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ChangePassForm {
    pub new_pass: String,
}

/// POST /login -> verify the credential and issue a session cookie.
/// A failed attempt also drops any session the client still holds.
pub async fn login(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, SoapboxError> {
    if !state.credentials.verify(&form.username, &form.password).await? {
        warn!(username = %form.username, "rejected login attempt");
        let jar = session::clear(jar);
        return Ok((
            StatusCode::UNAUTHORIZED,
            jar,
            Json(Envelope::failure("Invalid credentials!")),
        )
            .into_response());
    }

    let jar = session::establish(jar)?;
    info!("admin logged in");
    Ok((jar, Json(Envelope::ok("Logged in!"))).into_response())
}

/// POST /logout -> drop the session cookie. Idempotent.
pub async fn logout(jar: PrivateCookieJar) -> impl IntoResponse {
    (session::clear(jar), Json(Envelope::ok("Logged out!")))
}

/// GET /admin_check -> succeeds only for a permitted, unexpired session.
pub async fn admin_check(jar: PrivateCookieJar) -> Result<Json<Envelope>, SoapboxError> {
    if !session::check(&jar) {
        return Err(SoapboxError::Unauthorized);
    }
    Ok(Json(Envelope::ok("User permitted!")))
}

/// POST /change_pass -> rotate the admin password. Session or bearer.
pub async fn change_pass(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    headers: HeaderMap,
    Form(form): Form<ChangePassForm>,
) -> Result<Json<Envelope>, SoapboxError> {
    if !auth::session_or_bypass(&jar, &headers, &state.bearer_token) {
        return Err(SoapboxError::Unauthorized);
    }
    state.credentials.rotate(&form.new_pass).await?;
    info!("admin password rotated");
    Ok(Json(Envelope::ok("Password changed!")))
}
