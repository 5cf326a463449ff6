use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::CategoryData;
use super::NAME_MAX_LENGTH;
use crate::domain::category::models::CategoryId;
use crate::inbound::http::handlers::ensure_max_length;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateCategoryRequest {
    name: Option<String>,
}

pub async fn update_category(
    State(state): State<AppState>,
    Path(cat_id): Path<i64>,
    Json(body): Json<UpdateCategoryRequest>,
) -> Result<ApiSuccess<CategoryData>, ApiError> {
    if let Some(name) = &body.name {
        ensure_max_length("name", name, NAME_MAX_LENGTH)?;
    }

    state
        .category_service
        .update_category(CategoryId(cat_id), body.name)
        .await
        .map_err(ApiError::from)
        .map(|ref category| ApiSuccess::new(StatusCode::OK, category.into()))
}
