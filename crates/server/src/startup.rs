use std::{env, net::SocketAddr};

use axum::http::HeaderValue;
use axum::Router;
use common::utils::logging::init_logging_default;
use configs::StorageBackend;
use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::info;

use service::runtime::Services;

use crate::routes;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

/// Cross-origin access is limited to the allow-listed frontends, /api only.
pub fn build_cors(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| o.parse::<HeaderValue>().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Load host/port from configs or env vars, with sensible fallbacks.
/// `PORT` wins over the config file, matching the deployment platform.
fn load_bind_addr(cfg: &configs::AppConfig) -> anyhow::Result<SocketAddr> {
    let host = env::var("HOST").unwrap_or_else(|_| cfg.server.host.clone());
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(cfg.server.port);
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = match configs::load_default() {
        Ok(mut cfg) => {
            cfg.normalize_and_validate()?;
            cfg
        }
        Err(_) => configs::AppConfig::default(),
    };

    let services = match cfg.storage.backend {
        StorageBackend::File => {
            common::env::ensure_data_dir(&cfg.storage.data_dir).await?;
            Services::file(&cfg.storage.data_dir).await?
        }
        StorageBackend::Database => {
            let mut db_cfg = cfg.database.clone();
            db_cfg.normalize_from_env();
            let pool = models::db::PoolOptions {
                max_connections: db_cfg.max_connections,
                min_connections: db_cfg.min_connections,
                acquire_timeout: std::time::Duration::from_secs(db_cfg.acquire_timeout_secs),
                sqlx_logging: db_cfg.sqlx_logging,
            };
            let db = if db_cfg.url.trim().is_empty() {
                models::db::connect_with_options(models::db::DATABASE_URL.as_str(), pool).await?
            } else {
                models::db::connect_with_options(&db_cfg.url, pool).await?
            };
            Migrator::up(&db, None).await?;
            Services::database(db)
        }
    };

    // First boot of an empty store gets one sample record per kind.
    services.seed().await?;

    let cors = build_cors(&cfg.cors.allowed_origins);
    let app: Router = routes::build_router(services, cors);

    let addr = load_bind_addr(&cfg)?;
    info!(%addr, backend = ?cfg.storage.backend, "starting portfolio api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
