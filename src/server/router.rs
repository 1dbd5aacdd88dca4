use std::sync::Arc;
use std::time::Duration;

use axum::extract::FromRef;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{delete, get, post};
use axum::Router;
use axum_extra::extract::cookie::Key;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::db::{CredentialStore, RecordStore, SqlitePool};
use crate::handlers;

/// Shared per-request state: the two stores, the cookie key, and the
/// bypass secret. Cloned freely; the stores share one pool.
#[derive(Clone)]
pub struct AppState {
    pub records: RecordStore,
    pub credentials: CredentialStore,
    pub cookie_key: Key,
    pub bearer_token: Arc<str>,
}

impl AppState {
    pub fn new(config: &Config, pool: SqlitePool) -> Self {
        Self {
            records: RecordStore::new(pool.clone()),
            credentials: CredentialStore::new(pool),
            cookie_key: config.cookie_key(),
            bearer_token: Arc::from(config.bearer_token.as_str()),
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.cookie_key.clone()
    }
}

/// Build the full route table. Pure glue: every route delegates to a
/// handler, which delegates to the stores.
pub fn soapbox_router(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/status", get(handlers::status))
        .route("/login", post(handlers::auth::login))
        .route("/logout", post(handlers::auth::logout))
        .route("/admin_check", get(handlers::auth::admin_check))
        .route("/change_pass", post(handlers::auth::change_pass))
        .route("/create_record", post(handlers::records::create_record))
        .route("/get_all_records", get(handlers::records::get_all_records))
        .route(
            "/purge_all_records",
            delete(handlers::records::purge_all_records),
        )
        .layer(cors_layer(config))
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));
    match config.origins() {
        // a wildcard origin cannot carry credentials; browsers reject the
        // combination and tower-http refuses to build it
        None => cors.allow_origin(Any),
        Some(origins) => {
            let origins: Vec<HeaderValue> =
                origins.iter().filter_map(|o| o.parse().ok()).collect();
            cors.allow_origin(origins).allow_credentials(true)
        }
    }
}
