//! Feed listing orchestration.

use std::sync::Arc;
use tracing::error;

use crate::db::news_store::NewsStore;
use crate::db::query::build_feed_query;
use crate::error::{AppError, Result};
use crate::models::{FeedPage, FeedType, SourcePartition};
use crate::services::clock::Clock;
use crate::services::pagination;

/// Read-only feed listing over the injected store and clock.
pub struct FeedService {
    store: Arc<dyn NewsStore>,
    clock: Arc<dyn Clock>,
}

impl FeedService {
    pub fn new(store: Arc<dyn NewsStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// List one feed variant from a partition.
    ///
    /// Two statements run per call: the windowed item query capped at the
    /// variant's limit, and a whole-partition count. The count intentionally
    /// ignores the window predicate, and the two statements share no
    /// transaction, so `total` can disagree with `items` under concurrent
    /// writes. Both behaviors are preserved from the legacy contract.
    pub async fn list_feed(
        &self,
        feed_type: FeedType,
        partition: SourcePartition,
        page: i64,
    ) -> Result<FeedPage> {
        let config = feed_type.config();
        let query = build_feed_query(&config, partition, self.clock.now());

        let items = self
            .store
            .fetch_feed(&query)
            .await
            .map_err(|e| source_failure("list_feed/fetch", e))?;
        let total = self
            .store
            .count_partition(partition)
            .await
            .map_err(|e| source_failure("list_feed/count", e))?;

        let info = pagination::compute(total, config.limit, page)?;

        Ok(FeedPage {
            page: info.page,
            limit: info.limit,
            total: info.total,
            total_pages: info.total_pages,
            items,
        })
    }
}

/// Log a data-source failure with the operation name before it propagates.
/// Client-facing sanitization happens in the `ResponseError` impl.
pub(crate) fn source_failure(operation: &'static str, err: AppError) -> AppError {
    error!(operation, error = %err, "data source failure");
    err
}
