use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ReviewData;
use super::DESCRIPTION_MAX_LENGTH;
use crate::domain::access::models::OwnableResource;
use crate::domain::review::models::ReviewId;
use crate::inbound::http::handlers::ensure_max_length;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateReviewRequest {
    description: String,
}

pub async fn update_review(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(rev_id): Path<i64>,
    Json(body): Json<UpdateReviewRequest>,
) -> Result<ApiSuccess<ReviewData>, ApiError> {
    let id = ReviewId(rev_id);

    // 404 for a missing target comes before the authorization verdict
    state.review_service.get_review(id).await.map_err(ApiError::from)?;

    state
        .guards
        .check_admin_or_yours(&user, OwnableResource::Review, rev_id)
        .await
        .map_err(ApiError::from)?;

    ensure_max_length("description", &body.description, DESCRIPTION_MAX_LENGTH)?;

    state
        .review_service
        .update_review(id, body.description)
        .await
        .map_err(ApiError::from)
        .map(|ref review| ApiSuccess::new(StatusCode::OK, review.into()))
}
