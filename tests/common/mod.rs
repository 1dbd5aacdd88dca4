#![allow(dead_code)]

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use soapbox::config::Config;
use soapbox::db::{self, SqlitePool};
use soapbox::server::{AppState, soapbox_router};

pub const TEST_SECRET_KEY: &str = "0123456789abcdef0123456789abcdef0123456789abcdef";
pub const TEST_BEARER_TOKEN: &str = "automation-root-secret";

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub db_path: PathBuf,
}

/// A unique throwaway file path under the system temp dir.
pub fn temp_file(tag: &str, ext: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!(
        "soapbox-{}-{}-{}.{}",
        tag,
        std::process::id(),
        nanos,
        ext
    ));
    path
}

pub fn test_config(database_url: &str) -> Config {
    Config {
        secret_key: TEST_SECRET_KEY.to_string(),
        bearer_token: TEST_BEARER_TOKEN.to_string(),
        database_url: database_url.to_string(),
        ..Config::default()
    }
}

/// Fresh app over a temp-file SQLite database, schema initialized and the
/// default credential seeded.
pub async fn spawn_app(tag: &str) -> TestApp {
    let db_path = temp_file(tag, "sqlite");
    let database_url = format!("sqlite:{}", db_path.display());

    let pool = db::connect(&database_url)
        .await
        .expect("failed to open test database");
    db::init_schema(&pool).await.expect("failed to init schema");
    db::CredentialStore::new(pool.clone())
        .seed_default()
        .await
        .expect("failed to seed default credential");

    let cfg = test_config(&database_url);
    let state = AppState::new(&cfg, pool.clone());
    TestApp {
        router: soapbox_router(state, &cfg),
        pool,
        db_path,
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    /// The `soapbox_session=...` pair from any Set-Cookie header, removal
    /// cookies included (those come back as `soapbox_session=`).
    pub session_cookie: Option<String>,
}

pub async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    bearer: Option<&str>,
    form: Option<&str>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match form {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("failed to build request");

    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("request failed");
    let status = response.status();
    let session_cookie = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("soapbox_session="))
        .map(|v| v.split(';').next().unwrap_or_default().to_string());

    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body: Value = serde_json::from_slice(&bytes).expect("response body was not JSON");

    TestResponse {
        status,
        body,
        session_cookie,
    }
}

pub async fn login(router: &Router, username: &str, password: &str) -> TestResponse {
    send(
        router,
        "POST",
        "/login",
        None,
        None,
        Some(&format!("username={username}&password={password}")),
    )
    .await
}

pub async fn create_record(router: &Router, text: &str) -> TestResponse {
    send(
        router,
        "POST",
        "/create_record",
        None,
        None,
        Some(&format!("comment_text={text}")),
    )
    .await
}
