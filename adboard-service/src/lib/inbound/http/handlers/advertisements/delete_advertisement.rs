use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::access::models::OwnableResource;
use crate::domain::advertisement::models::AdvertisementId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn delete_advertisement(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(adv_id): Path<i64>,
) -> Result<ApiSuccess<()>, ApiError> {
    let id = AdvertisementId(adv_id);

    state
        .advertisement_service
        .get_advertisement(id)
        .await
        .map_err(ApiError::from)?;

    state
        .guards
        .check_admin_or_yours(&user, OwnableResource::Advertisement, adv_id)
        .await
        .map_err(ApiError::from)?;

    state
        .advertisement_service
        .delete_advertisement(id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
