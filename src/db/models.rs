use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One stored comment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbRecord {
    pub id: i64,
    pub text: String,
}

/// The single admin credential row. `password` is a PHC-format hash,
/// never a plaintext.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DbCredential {
    pub username: String,
    pub password: String,
}
