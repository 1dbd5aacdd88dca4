pub mod auth;
pub mod records;

use axum::Json;

use crate::server::Envelope;

/// GET /status -> liveness probe.
pub async fn status() -> Json<Envelope> {
    Json(Envelope::ok("It's alive!"))
}
