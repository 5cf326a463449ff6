use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ComplaintData;
use crate::domain::access::models::OwnableResource;
use crate::domain::complaint::models::ComplaintId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

/// Complaints are private: only their author or an admin may read one.
pub async fn get_complaint(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(comp_id): Path<i64>,
) -> Result<ApiSuccess<ComplaintData>, ApiError> {
    let complaint = state
        .complaint_service
        .get_complaint(ComplaintId(comp_id))
        .await
        .map_err(ApiError::from)?;

    state
        .guards
        .check_admin_or_yours(&user, OwnableResource::Complaint, comp_id)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(StatusCode::OK, (&complaint).into()))
}
