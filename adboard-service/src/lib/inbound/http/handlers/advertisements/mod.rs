use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::advertisement::models::AdvertisementDetail;
use crate::domain::advertisement::models::AdvertisementSummary;

use super::categories::CategoryData;

pub mod create_advertisement;
pub mod delete_advertisement;
pub mod get_advertisement;
pub mod list_advertisements;
pub mod update_advertisement;

const NAME_MAX_LENGTH: usize = 150;
const DESCRIPTION_MAX_LENGTH: usize = 1000;

/// Full advertisement view with its owner and category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvertisementData {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: OwnerData,
    pub category: CategoryData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerData {
    pub name: String,
    pub surname: String,
    pub email: String,
}

impl From<&AdvertisementDetail> for AdvertisementData {
    fn from(detail: &AdvertisementDetail) -> Self {
        Self {
            id: detail.id.0,
            name: detail.name.clone(),
            description: detail.description.clone(),
            price: detail.price,
            created_at: detail.created_at,
            updated_at: detail.updated_at,
            user: OwnerData {
                name: detail.owner.name.clone(),
                surname: detail.owner.surname.clone(),
                email: detail.owner.email.clone(),
            },
            category: CategoryData {
                id: detail.category.id.0,
                name: detail.category.name.clone(),
            },
        }
    }
}

/// Compact listing row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvertisementSummaryData {
    pub id: i64,
    pub name: String,
    pub price: Option<i64>,
    pub category_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AdvertisementSummary> for AdvertisementSummaryData {
    fn from(summary: AdvertisementSummary) -> Self {
        Self {
            id: summary.id.0,
            name: summary.name,
            price: summary.price,
            category_name: summary.category_name,
            created_at: summary.created_at,
            updated_at: summary.updated_at,
        }
    }
}
