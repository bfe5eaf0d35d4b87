//! Postgres pool construction

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Opens a pool capped at `max_connections`.
///
/// Fails if the first connection cannot be established.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}
