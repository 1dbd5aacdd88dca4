//! SQL DDL for initializing the comment-board storage.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `comments`: append-only record list, `id` strictly increasing
/// - `login`: the single admin credential row (PHC-format Argon2id hash)
///
/// Both tables use `IF NOT EXISTS`: re-running initialization never drops
/// data. Credential seeding is handled separately so a rotated password
/// survives restarts.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS comments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    text TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS login (
    username TEXT PRIMARY KEY,
    password TEXT NOT NULL
);
"#;
