use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;
use tracing::info;

pub use configs::DatabaseConfig;

pub static DATABASE_URL: Lazy<String> = Lazy::new(|| {
    // Load .env if present
    let _ = dotenvy::dotenv();
    env::var("DATABASE_URL").unwrap_or_else(|_| configs::DEFAULT_DATABASE_URL.to_string())
});

/// Connect with default pool settings to `DATABASE_URL`.
pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(DATABASE_URL.as_str()).await?;
    Ok(db)
}

/// Connect using the pool settings from `[database]`.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opt).await?;
    info!(
        max_connections = cfg.max_connections,
        min_connections = cfg.min_connections,
        "database pool ready"
    );
    Ok(db)
}
