use std::path::Path;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use subtle::ConstantTimeEq;
use tracing::info;

use crate::auth::password::{self, DEFAULT_PASSWORD_HASH, DEFAULT_USERNAME};
use crate::db::models::{DbCredential, DbRecord};
use crate::db::schema::SQLITE_INIT;
use crate::error::SoapboxError;

pub type SqlitePool = Pool<Sqlite>;

/// Open (creating if missing) the SQLite database behind `database_url`.
pub async fn connect(database_url: &str) -> Result<SqlitePool, SoapboxError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    Ok(SqlitePoolOptions::new().connect_with(options).await?)
}

/// Initialize the schema by executing the bundled DDL.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), SoapboxError> {
    // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}

/// One-time forced password reset, gated by a sentinel file containing `1`.
/// The file is rewritten to `0` afterwards so the reset fires exactly once.
/// A missing sentinel is a no-op.
pub async fn apply_reset_sentinel(
    path: &Path,
    credentials: &CredentialStore,
) -> Result<(), SoapboxError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e.into()),
    };
    if contents.trim() != "1" {
        return Ok(());
    }
    credentials.reseed_default().await?;
    std::fs::write(path, "0")?;
    info!(path = %path.display(), "admin password reset to default via sentinel");
    Ok(())
}

/// Append-only comment storage. Every call is a single statement on the
/// shared pool; consistency comes from SQLite's own transactional commits.
#[derive(Clone)]
pub struct RecordStore {
    pool: SqlitePool,
}

impl RecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append a comment as-is. No sanitization, no length cap; callers
    /// impose limits at the boundary if they need them.
    pub async fn insert(&self, text: &str) -> Result<i64, SoapboxError> {
        let result = sqlx::query("INSERT INTO comments (text) VALUES (?)")
            .bind(text)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Every comment text, newest first.
    pub async fn list_all(&self) -> Result<Vec<String>, SoapboxError> {
        let rows: Vec<DbRecord> =
            sqlx::query_as("SELECT id, text FROM comments ORDER BY id DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(|r| r.text).collect())
    }

    /// Delete every comment. Idempotent.
    pub async fn purge_all(&self) -> Result<(), SoapboxError> {
        sqlx::query("DELETE FROM comments").execute(&self.pool).await?;
        Ok(())
    }
}

/// The single admin credential: verification, rotation, and bootstrap
/// seeding. Verification fails closed on any mismatch.
#[derive(Clone)]
pub struct CredentialStore {
    pool: SqlitePool,
}

impl CredentialStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Check a login attempt against the stored credential.
    pub async fn verify(&self, username: &str, plaintext: &str) -> Result<bool, SoapboxError> {
        let Some(cred) = self.fetch().await? else {
            return Ok(false);
        };
        let username_ok = bool::from(cred.username.as_bytes().ct_eq(username.as_bytes()));
        // run the hash comparison unconditionally so a bad username costs
        // the same as a bad password
        let password_ok = password::verify(plaintext, &cred.password)?;
        Ok(username_ok && password_ok)
    }

    /// Replace the stored hash in place with a fresh Argon2id hash of
    /// `new_plaintext`. Irreversible.
    pub async fn rotate(&self, new_plaintext: &str) -> Result<(), SoapboxError> {
        let hash = password::hash(new_plaintext)?;
        sqlx::query("UPDATE login SET password = ?")
            .bind(hash)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Insert the default credential only when the table is empty. Never
    /// clobbers a rotated password; forced resets go through
    /// [`CredentialStore::reseed_default`].
    pub async fn seed_default(&self) -> Result<(), SoapboxError> {
        sqlx::query(
            "INSERT INTO login (username, password) \
             SELECT ?, ? WHERE NOT EXISTS (SELECT 1 FROM login)",
        )
        .bind(DEFAULT_USERNAME)
        .bind(DEFAULT_PASSWORD_HASH)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Overwrite whatever credential exists with the default one.
    /// Only the reset-sentinel path calls this.
    pub async fn reseed_default(&self) -> Result<(), SoapboxError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM login").execute(&mut *tx).await?;
        sqlx::query("INSERT INTO login (username, password) VALUES (?, ?)")
            .bind(DEFAULT_USERNAME)
            .bind(DEFAULT_PASSWORD_HASH)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(())
    }

    async fn fetch(&self) -> Result<Option<DbCredential>, SoapboxError> {
        Ok(
            sqlx::query_as("SELECT username, password FROM login LIMIT 1")
                .fetch_optional(&self.pool)
                .await?,
        )
    }
}
