//! Read-query construction for the feed projection.
//!
//! Table identifiers come only from the `SourcePartition` enum; window edges
//! and ids are always bound as parameters, never interpolated into SQL text.

use chrono::{DateTime, Utc};

use crate::models::{FeedTypeConfig, SourcePartition, WindowBounds};

/// Fixed projection served to clients. Never `SELECT *`.
pub const FEED_COLUMNS: &str = "id, title, link, pub_date, created_at, source, media_url";

/// A fully specified feed read: SQL text plus the values to bind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQuery {
    pub partition: SourcePartition,
    pub sql: String,
    /// Window bounds to bind, in placeholder order, when the variant has a
    /// window predicate.
    pub bounds: Option<WindowBounds>,
    /// Row cap, bound as the final placeholder.
    pub limit: i64,
}

/// Build the listing query for one feed variant against one partition.
///
/// The window predicate is resolved against `now` here, at build time, so
/// the same request cannot be re-evaluated against a different clock later.
pub fn build_feed_query(
    config: &FeedTypeConfig,
    partition: SourcePartition,
    now: DateTime<Utc>,
) -> FeedQuery {
    let bounds = config.window.map(|w| w.bounds(now, partition));
    let table = partition.table();

    let sql = match &bounds {
        None => {
            format!("SELECT {FEED_COLUMNS} FROM {table} ORDER BY pub_date DESC LIMIT $1")
        }
        Some(WindowBounds { end: None, .. }) => format!(
            "SELECT {FEED_COLUMNS} FROM {table} \
             WHERE pub_date >= $1 ORDER BY pub_date DESC LIMIT $2"
        ),
        Some(WindowBounds { end: Some(_), .. }) => format!(
            "SELECT {FEED_COLUMNS} FROM {table} \
             WHERE pub_date >= $1 AND pub_date < $2 ORDER BY pub_date DESC LIMIT $3"
        ),
    };

    FeedQuery {
        partition,
        sql,
        bounds,
        limit: config.limit,
    }
}

/// Count every row in the partition. Intentionally not constrained by the
/// window predicate: the listing contract reports the whole-partition total.
pub fn count_sql(partition: SourcePartition) -> String {
    format!("SELECT COUNT(*) FROM {}", partition.table())
}

/// Fetch one record by primary id.
pub fn lookup_sql(partition: SourcePartition) -> String {
    format!(
        "SELECT {FEED_COLUMNS} FROM {} WHERE id = $1",
        partition.table()
    )
}
