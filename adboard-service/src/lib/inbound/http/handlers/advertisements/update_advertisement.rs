use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::AdvertisementData;
use super::DESCRIPTION_MAX_LENGTH;
use super::NAME_MAX_LENGTH;
use crate::domain::access::models::OwnableResource;
use crate::domain::advertisement::models::AdvertisementId;
use crate::domain::advertisement::models::UpdateAdvertisementCommand;
use crate::inbound::http::handlers::ensure_max_length;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateAdvertisementRequest {
    name: Option<String>,
    description: Option<String>,
    price: Option<i64>,
}

impl UpdateAdvertisementRequest {
    fn try_into_command(self) -> Result<UpdateAdvertisementCommand, ApiError> {
        if let Some(name) = &self.name {
            ensure_max_length("name", name, NAME_MAX_LENGTH)?;
        }
        if let Some(description) = &self.description {
            ensure_max_length("description", description, DESCRIPTION_MAX_LENGTH)?;
        }

        Ok(UpdateAdvertisementCommand {
            name: self.name,
            description: self.description,
            price: self.price,
        })
    }
}

pub async fn update_advertisement(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(adv_id): Path<i64>,
    Json(body): Json<UpdateAdvertisementRequest>,
) -> Result<ApiSuccess<AdvertisementData>, ApiError> {
    let id = AdvertisementId(adv_id);

    // 404 for a missing target comes before the authorization verdict
    state
        .advertisement_service
        .get_advertisement(id)
        .await
        .map_err(ApiError::from)?;

    state
        .guards
        .check_admin_or_yours(&user, OwnableResource::Advertisement, adv_id)
        .await
        .map_err(ApiError::from)?;

    let command = body.try_into_command()?;

    state
        .advertisement_service
        .update_advertisement(id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref detail| ApiSuccess::new(StatusCode::OK, detail.into()))
}
