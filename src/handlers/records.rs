use axum::http::HeaderMap;
use axum::{Form, Json, extract::State};
use axum_extra::extract::cookie::PrivateCookieJar;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::auth;
use crate::error::SoapboxError;
use crate::server::{AppState, Envelope};

#[derive(Debug, Deserialize)]
pub struct CreateRecordForm {
    pub comment_text: String,
}

#[derive(Debug, Serialize)]
pub struct RecordsData {
    pub records: Vec<String>,
}

/// POST /create_record -> append a comment. Deliberately open: this is a
/// public submission endpoint.
pub async fn create_record(
    State(state): State<AppState>,
    Form(form): Form<CreateRecordForm>,
) -> Result<Json<Envelope>, SoapboxError> {
    let id = state.records.insert(&form.comment_text).await?;
    debug!(id, "comment stored");
    Ok(Json(Envelope::ok("Comment created!")))
}

/// GET /get_all_records -> every comment, newest first.
pub async fn get_all_records(
    State(state): State<AppState>,
) -> Result<Json<Envelope<RecordsData>>, SoapboxError> {
    let records = state.records.list_all().await?;
    Ok(Json(Envelope::with_data("Success!", RecordsData { records })))
}

/// DELETE /purge_all_records -> drop every comment. Session or bearer.
pub async fn purge_all_records(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    headers: HeaderMap,
) -> Result<Json<Envelope>, SoapboxError> {
    if !auth::session_or_bypass(&jar, &headers, &state.bearer_token) {
        return Err(SoapboxError::Unauthorized);
    }
    state.records.purge_all().await?;
    info!("all comment records purged");
    Ok(Json(Envelope::ok("All records deleted!")))
}
