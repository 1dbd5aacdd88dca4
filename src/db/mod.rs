//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: the `CredentialStore` and `RecordStore` over a sqlx pool

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{DbCredential, DbRecord};
pub use schema::SQLITE_INIT;
pub use sqlite::{
    CredentialStore, RecordStore, SqlitePool, apply_reset_sentinel, connect, init_schema,
};
