use axum::{Json, http::StatusCode, response::IntoResponse};
use thiserror::Error as ThisError;
use tracing::error;

use crate::server::Envelope;

#[derive(Debug, ThisError)]
pub enum SoapboxError {
    #[error("Invalid credentials!")]
    InvalidCredentials,

    #[error("Log in first!")]
    Unauthorized,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hash error: {0}")]
    PasswordHash(argon2::password_hash::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] figment::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<argon2::password_hash::Error> for SoapboxError {
    fn from(e: argon2::password_hash::Error) -> Self {
        SoapboxError::PasswordHash(e)
    }
}

impl IntoResponse for SoapboxError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            SoapboxError::InvalidCredentials | SoapboxError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            SoapboxError::Database(e) => {
                error!(error = %e, "storage layer failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage unavailable!".to_string(),
                )
            }
            SoapboxError::PasswordHash(_)
            | SoapboxError::Json(_)
            | SoapboxError::Config(_)
            | SoapboxError::InvalidConfig(_)
            | SoapboxError::Io(_) => {
                error!(error = %self, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error!".to_string(),
                )
            }
        };
        (status, Json(Envelope::failure(message))).into_response()
    }
}
