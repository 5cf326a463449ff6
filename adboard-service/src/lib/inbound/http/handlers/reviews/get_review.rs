use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ReviewData;
use crate::domain::review::models::ReviewId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_review(
    State(state): State<AppState>,
    Path(rev_id): Path<i64>,
) -> Result<ApiSuccess<ReviewData>, ApiError> {
    state
        .review_service
        .get_review(ReviewId(rev_id))
        .await
        .map_err(ApiError::from)
        .map(|ref review| ApiSuccess::new(StatusCode::OK, review.into()))
}
