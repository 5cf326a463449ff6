use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::ComplaintData;
use crate::domain::advertisement::models::AdvertisementId;
use crate::domain::complaint::models::ComplaintFilter;
use crate::domain::paging::PageParams;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PaginatedResponseBody;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct ListComplaintsQuery {
    page: Option<i64>,
    size: Option<i64>,
    adv_id: Option<i64>,
    sort_by_create: Option<bool>,
    sort_by_update: Option<bool>,
}

/// Admin-only listing of all complaints.
pub async fn list_complaints(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(query): Query<ListComplaintsQuery>,
) -> Result<ApiSuccess<PaginatedResponseBody<ComplaintData>>, ApiError> {
    state.guards.check_admin(&user).map_err(ApiError::from)?;

    let page = PageParams::new(
        query.page.unwrap_or(PageParams::DEFAULT_PAGE),
        query.size.unwrap_or(PageParams::DEFAULT_SIZE),
    )
    .map_err(ApiError::from)?;

    let filter = ComplaintFilter {
        advertisement_id: query.adv_id.map(AdvertisementId),
        sort_by_create: query.sort_by_create.unwrap_or(false),
        sort_by_update: query.sort_by_update.unwrap_or(false),
    };

    let result = state
        .complaint_service
        .list_complaints(&filter, &page)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        result.map(|complaint| ComplaintData::from(&complaint)).into(),
    ))
}
