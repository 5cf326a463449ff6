use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::category::models::CategoryId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn delete_category(
    State(state): State<AppState>,
    Path(cat_id): Path<i64>,
) -> Result<ApiSuccess<()>, ApiError> {
    state
        .category_service
        .delete_category(CategoryId(cat_id))
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
