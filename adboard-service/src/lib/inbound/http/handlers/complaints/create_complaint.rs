use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ComplaintData;
use super::DESCRIPTION_MAX_LENGTH;
use crate::domain::advertisement::models::AdvertisementId;
use crate::domain::complaint::models::CreateComplaintCommand;
use crate::inbound::http::handlers::ensure_max_length;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateComplaintRequest {
    description: String,
}

/// POST /complaint/{adv_id}: file a complaint against someone else's
/// advertisement.
pub async fn create_complaint(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(adv_id): Path<i64>,
    Json(body): Json<CreateComplaintRequest>,
) -> Result<ApiSuccess<ComplaintData>, ApiError> {
    ensure_max_length("description", &body.description, DESCRIPTION_MAX_LENGTH)?;

    let command = CreateComplaintCommand {
        description: body.description,
        advertisement_id: AdvertisementId(adv_id),
        user_id: user.id,
    };

    state
        .complaint_service
        .create_complaint(command)
        .await
        .map_err(ApiError::from)
        .map(|ref complaint| ApiSuccess::new(StatusCode::CREATED, complaint.into()))
}
