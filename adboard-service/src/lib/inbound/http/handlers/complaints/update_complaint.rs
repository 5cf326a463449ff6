use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ComplaintData;
use super::DESCRIPTION_MAX_LENGTH;
use crate::domain::access::models::OwnableResource;
use crate::domain::complaint::models::ComplaintId;
use crate::inbound::http::handlers::ensure_max_length;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateComplaintRequest {
    description: String,
}

pub async fn update_complaint(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(comp_id): Path<i64>,
    Json(body): Json<UpdateComplaintRequest>,
) -> Result<ApiSuccess<ComplaintData>, ApiError> {
    let id = ComplaintId(comp_id);

    // 404 for a missing target comes before the authorization verdict
    state
        .complaint_service
        .get_complaint(id)
        .await
        .map_err(ApiError::from)?;

    state
        .guards
        .check_admin_or_yours(&user, OwnableResource::Complaint, comp_id)
        .await
        .map_err(ApiError::from)?;

    ensure_max_length("description", &body.description, DESCRIPTION_MAX_LENGTH)?;

    state
        .complaint_service
        .update_complaint(id, body.description)
        .await
        .map_err(ApiError::from)
        .map(|ref complaint| ApiSuccess::new(StatusCode::OK, complaint.into()))
}
