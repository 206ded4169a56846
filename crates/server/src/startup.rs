use std::sync::Arc;

use axum::http::{header::HeaderValue, Method};
use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, AppState};
use service::wordbank::{repo::seaorm::SeaOrmWordBankStore, WordBankService, WordBankStore};

/// CORS for `/api/*`: exactly one browser origin may call the API.
pub fn build_cors(allowed_origin: &str) -> Result<CorsLayer, StartupError> {
    let origin = allowed_origin
        .parse::<HeaderValue>()
        .map_err(|e| StartupError::InvalidConfig(format!("cors.allowed_origin: {e}")))?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any))
}

/// Seed the store and build the router around it. No request can reach a
/// handler before seeding has succeeded.
pub async fn build_app(store: Arc<dyn WordBankStore>, allowed_origin: &str) -> Result<Router, StartupError> {
    let wordbank = WordBankService::new(store);
    wordbank.seed().await.map_err(|e| StartupError::Seed(e.to_string()))?;
    let cors = build_cors(allowed_origin)?;
    Ok(routes::build_router(AppState { wordbank }, cors))
}

/// Public entry: connect, migrate, seed, and run the HTTP server with an
/// already validated configuration.
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    // One pool per process, shared by every request through the store handle
    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Migration(e.to_string()))?;

    let store: Arc<dyn WordBankStore> = Arc::new(SeaOrmWordBankStore::new(db));
    let app = build_app(store, &cfg.cors.allowed_origin).await?;

    let addr = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(anyhow::Error::from)?;
    info!(%addr, allowed_origin = %cfg.cors.allowed_origin, "starting word bank server");
    axum::serve(listener, app).await.map_err(anyhow::Error::from)?;
    Ok(())
}
