use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::AdvertisementData;
use crate::domain::advertisement::models::AdvertisementId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_advertisement(
    State(state): State<AppState>,
    Path(adv_id): Path<i64>,
) -> Result<ApiSuccess<AdvertisementData>, ApiError> {
    state
        .advertisement_service
        .get_advertisement_detail(AdvertisementId(adv_id))
        .await
        .map_err(ApiError::from)
        .map(|ref detail| ApiSuccess::new(StatusCode::OK, detail.into()))
}
