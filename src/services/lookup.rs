//! Single-record lookup.

use std::sync::Arc;

use crate::db::news_store::NewsStore;
use crate::error::{AppError, Result};
use crate::models::{FeedRecord, SourcePartition};
use crate::services::feed::source_failure;

/// Fetches one record by primary id from the default partition.
pub struct LookupService {
    store: Arc<dyn NewsStore>,
}

impl LookupService {
    pub fn new(store: Arc<dyn NewsStore>) -> Self {
        Self { store }
    }

    /// Absence is an expected outcome: zero rows maps to `NotFound` and is
    /// not logged as an error. Only source failures are.
    pub async fn get_by_id(&self, id: i64) -> Result<FeedRecord> {
        let found = self
            .store
            .find_by_id(SourcePartition::Default, id)
            .await
            .map_err(|e| source_failure("get_by_id", e))?;

        found.ok_or_else(|| AppError::NotFound("News not found".to_string()))
    }
}
