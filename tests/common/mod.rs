//! Shared test doubles for the HTTP-contract tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use news_service::db::news_store::NewsStore;
use news_service::db::query::FeedQuery;
use news_service::error::{AppError, Result};
use news_service::models::{FeedRecord, SourcePartition};
use news_service::services::Clock;

/// Clock pinned to a fixed instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// In-memory store that applies the built query's window, ordering and limit
/// the way the SQL store would.
#[derive(Default)]
pub struct InMemoryNewsStore {
    pub default_rows: Vec<FeedRecord>,
    pub localized_rows: Vec<FeedRecord>,
    pub fail: bool,
}

impl InMemoryNewsStore {
    fn rows(&self, partition: SourcePartition) -> &[FeedRecord] {
        match partition {
            SourcePartition::Default => &self.default_rows,
            SourcePartition::Localized => &self.localized_rows,
        }
    }

    fn check_failure(&self) -> Result<()> {
        if self.fail {
            Err(AppError::Database("injected failure".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl NewsStore for InMemoryNewsStore {
    async fn fetch_feed(&self, query: &FeedQuery) -> Result<Vec<FeedRecord>> {
        self.check_failure()?;

        let mut rows: Vec<FeedRecord> = self
            .rows(query.partition)
            .iter()
            .filter(|r| query.bounds.map_or(true, |b| b.contains(r.pub_date)))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.pub_date.cmp(&a.pub_date));
        rows.truncate(query.limit as usize);

        Ok(rows)
    }

    async fn count_partition(&self, partition: SourcePartition) -> Result<i64> {
        self.check_failure()?;
        Ok(self.rows(partition).len() as i64)
    }

    async fn find_by_id(
        &self,
        partition: SourcePartition,
        id: i64,
    ) -> Result<Option<FeedRecord>> {
        self.check_failure()?;
        Ok(self.rows(partition).iter().find(|r| r.id == id).cloned())
    }
}

/// Build a projection row for fixtures.
pub fn record(id: i64, pub_date: DateTime<Utc>) -> FeedRecord {
    FeedRecord {
        id,
        title: format!("headline {id}"),
        link: format!("https://news.example.com/articles/{id}"),
        pub_date,
        created_at: pub_date,
        source: "example-wire".to_string(),
        media_url: if id % 2 == 0 {
            Some(format!("https://cdn.example.com/{id}.jpg"))
        } else {
            None
        },
    }
}
