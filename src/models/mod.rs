//! Domain types for the news service.
//!
//! This module defines:
//! - FeedType: the closed set of feed variants and their query policies
//! - SourcePartition: allow-listed logical datasets
//! - FeedRecord: the read-only row projection served to clients
//! - FeedPage and the HTTP response envelopes

use chrono::{DateTime, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, Result};

/// One row of the feed projection. Never the full stored entity; instances
/// are per-request and never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct FeedRecord {
    pub id: i64,
    pub title: String,
    pub link: String,
    pub pub_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub source: String,
    pub media_url: Option<String>,
}

/// Closed set of feed variants. Adding a variant is a compile-time-checked
/// change: every match over this enum must be extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedType {
    Main,
    Hot,
    Today,
}

impl FeedType {
    pub const ALL: [FeedType; 3] = [FeedType::Main, FeedType::Hot, FeedType::Today];

    /// Parse a client-supplied token. Unknown tokens are a client error and
    /// are never silently substituted with a default.
    pub fn parse(token: &str) -> Result<Self> {
        match token {
            "main" => Ok(Self::Main),
            "hot" => Ok(Self::Hot),
            "today" => Ok(Self::Today),
            _ => Err(AppError::BadRequest("Invalid type".to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Hot => "hot",
            Self::Today => "today",
        }
    }

    /// Immutable query policy for this variant.
    pub fn config(&self) -> FeedTypeConfig {
        match self {
            Self::Main => FeedTypeConfig {
                feed_type: *self,
                window: Some(FeedWindow::TrailingDays(7)),
                limit: 15,
            },
            Self::Hot => FeedTypeConfig {
                feed_type: *self,
                window: None,
                limit: 20,
            },
            Self::Today => FeedTypeConfig {
                feed_type: *self,
                window: Some(FeedWindow::CalendarDay),
                limit: 30,
            },
        }
    }
}

impl std::fmt::Display for FeedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Query policy for one feed variant. Ordering is always newest-first by
/// publish time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedTypeConfig {
    pub feed_type: FeedType,
    pub window: Option<FeedWindow>,
    pub limit: i64,
}

/// Time-based filter evaluated against the current clock at query-build
/// time, never against a client-supplied date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedWindow {
    /// Published within the trailing N days, inclusive lower bound.
    TrailingDays(i64),
    /// Published on the partition's current local calendar day.
    CalendarDay,
}

impl FeedWindow {
    /// Resolve the window to concrete publish-time bounds at evaluation time.
    pub fn bounds(&self, now: DateTime<Utc>, partition: SourcePartition) -> WindowBounds {
        match self {
            Self::TrailingDays(days) => WindowBounds {
                start: now - Duration::days(*days),
                end: None,
            },
            Self::CalendarDay => {
                let shift = Duration::seconds(i64::from(partition.utc_offset_secs()));
                let local_day = (now + shift).date_naive();
                let start = DateTime::from_naive_utc_and_offset(
                    local_day.and_time(NaiveTime::MIN) - shift,
                    Utc,
                );
                WindowBounds {
                    start,
                    end: Some(start + Duration::days(1)),
                }
            }
        }
    }
}

/// Publish-time range `[start, end)`; `end == None` means unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowBounds {
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
}

impl WindowBounds {
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        ts >= self.start && self.end.map_or(true, |end| ts < end)
    }
}

/// Allow-listed logical datasets. The table name is substituted into SQL as
/// an identifier, which bypasses value-level parameter binding, so it must
/// only ever come from this enum and never from request input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourcePartition {
    Default,
    Localized,
}

impl SourcePartition {
    pub fn table(&self) -> &'static str {
        match self {
            Self::Default => "rss_news",
            Self::Localized => "rss_news_kr",
        }
    }

    /// Fixed UTC offset used to evaluate the calendar-day window against
    /// this partition's local date.
    pub fn utc_offset_secs(&self) -> i32 {
        match self {
            Self::Default => 0,
            Self::Localized => 9 * 3600,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Localized => "localized",
        }
    }
}

impl std::fmt::Display for SourcePartition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Assembled feed listing returned by the service layer.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedPage {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
    pub items: Vec<FeedRecord>,
}

/// JSON envelope for feed listings.
#[derive(Debug, Serialize, ToSchema)]
pub struct FeedPageResponse {
    pub success: bool,
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
    pub data: Vec<FeedRecord>,
}

impl From<FeedPage> for FeedPageResponse {
    fn from(page: FeedPage) -> Self {
        Self {
            success: true,
            page: page.page,
            limit: page.limit,
            total: page.total,
            total_pages: page.total_pages,
            data: page.items,
        }
    }
}

/// JSON envelope for single-record lookups.
#[derive(Debug, Serialize, ToSchema)]
pub struct FeedItemResponse {
    pub success: bool,
    pub data: FeedRecord,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parse_recognizes_every_token() {
        assert_eq!(FeedType::parse("main").unwrap(), FeedType::Main);
        assert_eq!(FeedType::parse("hot").unwrap(), FeedType::Hot);
        assert_eq!(FeedType::parse("today").unwrap(), FeedType::Today);
    }

    #[test]
    fn parse_rejects_unknown_tokens() {
        for token in ["", "MAIN", "latest", "main "] {
            let err = FeedType::parse(token).unwrap_err();
            assert!(matches!(err, AppError::BadRequest(msg) if msg == "Invalid type"));
        }
    }

    #[test]
    fn every_config_has_positive_limit() {
        for feed_type in FeedType::ALL {
            assert!(feed_type.config().limit > 0, "{feed_type} limit");
        }
    }

    #[test]
    fn variant_policies_match_contract() {
        assert_eq!(
            FeedType::Main.config().window,
            Some(FeedWindow::TrailingDays(7))
        );
        assert_eq!(FeedType::Main.config().limit, 15);
        assert_eq!(FeedType::Hot.config().window, None);
        assert_eq!(FeedType::Hot.config().limit, 20);
        assert_eq!(FeedType::Today.config().window, Some(FeedWindow::CalendarDay));
        assert_eq!(FeedType::Today.config().limit, 30);
    }

    #[test]
    fn trailing_window_boundary_is_inclusive() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 15, 30, 0).unwrap();
        let bounds = FeedWindow::TrailingDays(7).bounds(now, SourcePartition::Default);

        assert_eq!(bounds.start, now - Duration::days(7));
        assert_eq!(bounds.end, None);
        assert!(bounds.contains(now - Duration::days(7)));
        assert!(!bounds.contains(now - Duration::days(7) - Duration::seconds(1)));
    }

    #[test]
    fn calendar_day_window_covers_the_local_day() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 15, 0, 0).unwrap();
        let bounds = FeedWindow::CalendarDay.bounds(now, SourcePartition::Default);

        assert_eq!(bounds.start, Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap());
        assert_eq!(
            bounds.end,
            Some(Utc.with_ymd_and_hms(2025, 3, 11, 0, 0, 0).unwrap())
        );
        // 23:59:59 on the evaluation date is in, next-day midnight is out.
        assert!(bounds.contains(Utc.with_ymd_and_hms(2025, 3, 10, 23, 59, 59).unwrap()));
        assert!(!bounds.contains(Utc.with_ymd_and_hms(2025, 3, 11, 0, 0, 0).unwrap()));
    }

    #[test]
    fn calendar_day_window_uses_the_partition_local_date() {
        // 20:00 UTC is already the next day at UTC+9.
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 20, 0, 0).unwrap();
        let bounds = FeedWindow::CalendarDay.bounds(now, SourcePartition::Localized);

        assert_eq!(bounds.start, Utc.with_ymd_and_hms(2025, 3, 10, 15, 0, 0).unwrap());
        assert_eq!(
            bounds.end,
            Some(Utc.with_ymd_and_hms(2025, 3, 11, 15, 0, 0).unwrap())
        );
    }

    #[test]
    fn partitions_resolve_to_allow_listed_tables() {
        assert_eq!(SourcePartition::Default.table(), "rss_news");
        assert_eq!(SourcePartition::Localized.table(), "rss_news_kr");
    }
}
