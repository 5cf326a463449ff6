use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ReviewData;
use super::DESCRIPTION_MAX_LENGTH;
use crate::domain::advertisement::models::AdvertisementId;
use crate::domain::review::models::CreateReviewCommand;
use crate::inbound::http::handlers::ensure_max_length;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateReviewRequest {
    description: String,
}

/// POST /review/{adv_id}: leave a review under an advertisement.
pub async fn create_review(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(adv_id): Path<i64>,
    Json(body): Json<CreateReviewRequest>,
) -> Result<ApiSuccess<ReviewData>, ApiError> {
    ensure_max_length("description", &body.description, DESCRIPTION_MAX_LENGTH)?;

    let command = CreateReviewCommand {
        description: body.description,
        advertisement_id: AdvertisementId(adv_id),
        user_id: user.id,
    };

    state
        .review_service
        .create_review(command)
        .await
        .map_err(ApiError::from)
        .map(|ref review| ApiSuccess::new(StatusCode::CREATED, review.into()))
}
