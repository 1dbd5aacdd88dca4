use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use soapbox::config::Config;
use soapbox::db;
use soapbox::server::{AppState, soapbox_router};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        listen_addr = %cfg.listen_addr,
        allowed_origins = %cfg.allowed_origins,
        loglevel = %cfg.loglevel
    );

    let pool = db::connect(&cfg.database_url).await?;
    db::init_schema(&pool).await?;

    let credentials = db::CredentialStore::new(pool.clone());
    credentials.seed_default().await?;
    db::apply_reset_sentinel(&cfg.reset_sentinel, &credentials).await?;

    let state = AppState::new(&cfg, pool);
    let app = soapbox_router(state, &cfg);

    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("HTTP server listening on {}", cfg.listen_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
