//! HTTP route handlers.

pub mod feed;

pub use feed::{get_feed, get_localized_feed, get_news_by_id, FeedHandlerState};
