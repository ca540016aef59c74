//! Database connection helpers.

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::config::DatabaseConfig;

/// Open a pooled connection using the configured URL and pool limits.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());

    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .sqlx_logging(false);

    Database::connect(options).await
}

/// Fresh private in-memory SQLite database, one per call.
#[cfg(feature = "sqlite")]
pub async fn memory() -> Result<DatabaseConnection, DbErr> {
    Database::connect("sqlite::memory:").await
}
