//! Feed endpoints.

use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::metrics;
use crate::models::{FeedItemResponse, FeedPageResponse, FeedType, SourcePartition};
use crate::services::feed::FeedService;
use crate::services::lookup::LookupService;

#[derive(Debug, Deserialize)]
pub struct FeedQueryParams {
    /// Feed variant token; unknown or missing tokens are a 400.
    #[serde(rename = "type", default)]
    pub feed_type: String,
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

pub struct FeedHandlerState {
    pub feed: FeedService,
    pub lookup: LookupService,
}

async fn list_feed(
    state: &FeedHandlerState,
    params: &FeedQueryParams,
    partition: SourcePartition,
) -> Result<HttpResponse> {
    let feed_type = FeedType::parse(&params.feed_type)?;
    metrics::observe_feed_request(feed_type.as_str(), partition.as_str());
    debug!(
        feed_type = feed_type.as_str(),
        partition = partition.as_str(),
        page = params.page,
        "feed request"
    );

    let page = state.feed.list_feed(feed_type, partition, params.page).await?;
    Ok(HttpResponse::Ok().json(FeedPageResponse::from(page)))
}

#[utoipa::path(
    get,
    path = "/feed",
    tag = "Feed",
    params(
        ("type" = String, Query, description = "Feed variant: main, hot or today"),
        ("page" = Option<i64>, Query, description = "Display page number, echoed back")
    ),
    responses(
        (status = 200, description = "Feed page", body = FeedPageResponse),
        (status = 400, description = "Unknown feed type"),
        (status = 500, description = "Data source failure")
    )
)]
#[get("/feed")]
pub async fn get_feed(
    query: web::Query<FeedQueryParams>,
    state: web::Data<FeedHandlerState>,
) -> Result<HttpResponse> {
    list_feed(&state, &query, SourcePartition::Default).await
}

#[utoipa::path(
    get,
    path = "/feed/localized",
    tag = "Feed",
    params(
        ("type" = String, Query, description = "Feed variant: main, hot or today"),
        ("page" = Option<i64>, Query, description = "Display page number, echoed back")
    ),
    responses(
        (status = 200, description = "Feed page from the localized partition", body = FeedPageResponse),
        (status = 400, description = "Unknown feed type"),
        (status = 500, description = "Data source failure")
    )
)]
#[get("/feed/localized")]
pub async fn get_localized_feed(
    query: web::Query<FeedQueryParams>,
    state: web::Data<FeedHandlerState>,
) -> Result<HttpResponse> {
    list_feed(&state, &query, SourcePartition::Localized).await
}

#[utoipa::path(
    get,
    path = "/feed/{id}",
    tag = "Feed",
    params(("id" = i64, Path, description = "Record primary id")),
    responses(
        (status = 200, description = "Single record", body = FeedItemResponse),
        (status = 404, description = "No record with this id"),
        (status = 500, description = "Data source failure")
    )
)]
#[get("/feed/{id}")]
pub async fn get_news_by_id(
    path: web::Path<i64>,
    state: web::Data<FeedHandlerState>,
) -> Result<HttpResponse> {
    let record = state.lookup.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(FeedItemResponse {
        success: true,
        data: record,
    }))
}
