pub mod points;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::Config;
use crate::error::{AppError, AppResult};

pub use points::{fetch_points, insert_point, NewPoint};

pub async fn connect(config: &Config) -> AppResult<DatabaseConnection> {
    connect_url(&config.database_url).await
}

/// Open a connection pool. In-memory SQLite databases live per connection,
/// so they are pinned to a single one.
pub async fn connect_url(url: &str) -> AppResult<DatabaseConnection> {
    let mut options = ConnectOptions::new(url.to_owned());
    options.sqlx_logging(false);
    if url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }

    Database::connect(options)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to connect to database: {}", e)))
}
