use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::access::models::OwnableResource;
use crate::domain::complaint::models::ComplaintId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn delete_complaint(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(comp_id): Path<i64>,
) -> Result<ApiSuccess<()>, ApiError> {
    let id = ComplaintId(comp_id);

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

    state
        .complaint_service
        .delete_complaint(id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
