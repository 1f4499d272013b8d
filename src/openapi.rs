use utoipa::OpenApi;

use crate::handlers;
use crate::models::{FeedItemResponse, FeedPageResponse, FeedRecord};

/// OpenAPI document served at `/api/openapi.json` and through Swagger UI.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "News Feed API",
        version = "1.0.0",
        description = "Paginated news listings served from the relational store."
    ),
    paths(
        handlers::feed::get_feed,
        handlers::feed::get_localized_feed,
        handlers::feed::get_news_by_id
    ),
    components(schemas(FeedRecord, FeedPageResponse, FeedItemResponse)),
    tags((name = "Feed", description = "Feed retrieval endpoints"))
)]
pub struct ApiDoc;
