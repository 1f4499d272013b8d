//! Store seam over the relational source.
//!
//! Services depend on the `NewsStore` trait so the SQL layer can be swapped
//! for a test double; `PgNewsStore` is the production implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use std::future::Future;
use std::time::Duration;

use crate::db::query::{self, FeedQuery};
use crate::error::{AppError, Result};
use crate::models::{FeedRecord, SourcePartition};

/// Read-only access to the news tables.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsStore: Send + Sync {
    /// Execute a built feed query, returning at most `query.limit` rows,
    /// newest-first.
    async fn fetch_feed(&self, query: &FeedQuery) -> Result<Vec<FeedRecord>>;

    /// Count every row in the partition.
    async fn count_partition(&self, partition: SourcePartition) -> Result<i64>;

    /// Fetch one record by primary id, `None` when absent.
    async fn find_by_id(
        &self,
        partition: SourcePartition,
        id: i64,
    ) -> Result<Option<FeedRecord>>;
}

/// PostgreSQL-backed store. Each call runs under `query_timeout`; exceeding
/// it fails with `AppError::Timeout` rather than waiting on the database.
pub struct PgNewsStore {
    pool: PgPool,
    query_timeout: Duration,
}

impl PgNewsStore {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    async fn with_timeout<T>(
        &self,
        operation: &'static str,
        fut: impl Future<Output = std::result::Result<T, sqlx::Error>> + Send,
    ) -> Result<T> {
        match tokio::time::timeout(self.query_timeout, fut).await {
            Ok(result) => result.map_err(AppError::from),
            Err(_) => Err(AppError::Timeout(format!(
                "{operation} exceeded {}s",
                self.query_timeout.as_secs()
            ))),
        }
    }
}

#[async_trait]
impl NewsStore for PgNewsStore {
    async fn fetch_feed(&self, query: &FeedQuery) -> Result<Vec<FeedRecord>> {
        let mut stmt = sqlx::query_as::<_, FeedRecord>(&query.sql);
        if let Some(bounds) = &query.bounds {
            stmt = stmt.bind(bounds.start);
            if let Some(end) = bounds.end {
                stmt = stmt.bind(end);
            }
        }
        stmt = stmt.bind(query.limit);

        self.with_timeout("fetch_feed", stmt.fetch_all(&self.pool))
            .await
    }

    async fn count_partition(&self, partition: SourcePartition) -> Result<i64> {
        let sql = query::count_sql(partition);
        let (count,) = self
            .with_timeout(
                "count_partition",
                sqlx::query_as::<_, (i64,)>(&sql).fetch_one(&self.pool),
            )
            .await?;

        Ok(count)
    }

    async fn find_by_id(
        &self,
        partition: SourcePartition,
        id: i64,
    ) -> Result<Option<FeedRecord>> {
        let sql = query::lookup_sql(partition);
        self.with_timeout(
            "find_by_id",
            sqlx::query_as::<_, FeedRecord>(&sql)
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await
    }
}
