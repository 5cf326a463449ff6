use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::access::models::OwnableResource;
use crate::domain::review::models::ReviewId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn delete_review(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(rev_id): Path<i64>,
) -> Result<ApiSuccess<()>, ApiError> {
    let id = ReviewId(rev_id);

    state.review_service.get_review(id).await.map_err(ApiError::from)?;

    state
        .guards
        .check_admin_or_yours(&user, OwnableResource::Review, rev_id)
        .await
        .map_err(ApiError::from)?;

    state
        .review_service
        .delete_review(id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
