//! Database access: pool construction, query building, and the store seam.

pub mod news_store;
pub mod query;

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::info;

use crate::config::DatabaseConfig;

/// Build the shared connection pool.
///
/// The pool is an explicitly constructed, owned resource injected into the
/// services at startup. It is bounded, and acquisition fails with
/// `PoolTimedOut` once `acquire_timeout_secs` elapses instead of queueing
/// indefinitely.
pub async fn create_pool(cfg: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .connect(&cfg.url)
        .await?;

    info!(
        max_connections = cfg.max_connections,
        min_connections = cfg.min_connections,
        acquire_timeout_secs = cfg.acquire_timeout_secs,
        "database pool ready"
    );

    Ok(pool)
}
