use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::AdvertisementSummaryData;
use crate::domain::advertisement::models::AdvertisementFilter;
use crate::domain::paging::PageParams;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PaginatedResponseBody;
use crate::inbound::http::router::AppState;

/// Query string for the advertisement listing: pagination, price bounds,
/// category substring, and the four sort flags.
#[derive(Debug, Clone, Deserialize)]
pub struct ListAdvertisementsQuery {
    page: Option<i64>,
    size: Option<i64>,
    max_price: Option<i64>,
    min_price: Option<i64>,
    category: Option<String>,
    sort_by_create: Option<bool>,
    sort_by_update: Option<bool>,
    price_ascending: Option<bool>,
    price_descending: Option<bool>,
}

pub async fn list_advertisements(
    State(state): State<AppState>,
    Query(query): Query<ListAdvertisementsQuery>,
) -> Result<ApiSuccess<PaginatedResponseBody<AdvertisementSummaryData>>, ApiError> {
    let page = PageParams::new(
        query.page.unwrap_or(PageParams::DEFAULT_PAGE),
        query.size.unwrap_or(PageParams::DEFAULT_SIZE),
    )
    .map_err(ApiError::from)?;

    let filter = AdvertisementFilter {
        category: query.category,
        max_price: query.max_price,
        min_price: query.min_price,
        sort_by_create: query.sort_by_create.unwrap_or(false),
        sort_by_update: query.sort_by_update.unwrap_or(false),
        price_descending: query.price_descending.unwrap_or(false),
        price_ascending: query.price_ascending.unwrap_or(false),
    };

    let result = state
        .advertisement_service
        .list_advertisements(&filter, &page)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        result.map(AdvertisementSummaryData::from).into(),
    ))
}
