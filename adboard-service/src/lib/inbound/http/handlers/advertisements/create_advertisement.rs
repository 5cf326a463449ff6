use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::AdvertisementData;
use super::DESCRIPTION_MAX_LENGTH;
use super::NAME_MAX_LENGTH;
use crate::domain::advertisement::models::CreateAdvertisementCommand;
use crate::domain::category::models::CategoryId;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ensure_max_length;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateAdvertisementRequest {
    name: String,
    description: String,
    price: Option<i64>,
    category_id: i64,
}

impl CreateAdvertisementRequest {
    fn try_into_command(self, user_id: UserId) -> Result<CreateAdvertisementCommand, ApiError> {
        ensure_max_length("name", &self.name, NAME_MAX_LENGTH)?;
        ensure_max_length("description", &self.description, DESCRIPTION_MAX_LENGTH)?;

        Ok(CreateAdvertisementCommand {
            name: self.name,
            description: self.description,
            price: self.price,
            category_id: CategoryId(self.category_id),
            user_id,
        })
    }
}

pub async fn create_advertisement(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(body): Json<CreateAdvertisementRequest>,
) -> Result<ApiSuccess<AdvertisementData>, ApiError> {
    let command = body.try_into_command(user.id)?;

    state
        .advertisement_service
        .create_advertisement(command)
        .await
        .map_err(ApiError::from)
        .map(|ref detail| ApiSuccess::new(StatusCode::CREATED, detail.into()))
}
