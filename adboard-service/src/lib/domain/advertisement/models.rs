use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;
use crate::domain::user::models::UserId;

/// Advertisement aggregate entity.
#[derive(Debug, Clone)]
pub struct Advertisement {
    pub id: AdvertisementId,
    pub name: String,
    pub description: String,
    pub price: Option<i64>,
    pub category_id: CategoryId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Advertisement unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdvertisementId(pub i64);

impl fmt::Display for AdvertisementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Compact listing row: the category is resolved to its name, the owner is
/// not exposed.
#[derive(Debug, Clone)]
pub struct AdvertisementSummary {
    pub id: AdvertisementId,
    pub name: String,
    pub price: Option<i64>,
    pub category_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full advertisement view with its owner and category resolved.
#[derive(Debug, Clone)]
pub struct AdvertisementDetail {
    pub id: AdvertisementId,
    pub name: String,
    pub description: String,
    pub price: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner: OwnerSummary,
    pub category: Category,
}

/// Owner fields exposed alongside an advertisement.
#[derive(Debug, Clone)]
pub struct OwnerSummary {
    pub name: String,
    pub surname: String,
    pub email: String,
}

/// Command to create an advertisement; the owner is always the requester.
#[derive(Debug)]
pub struct CreateAdvertisementCommand {
    pub name: String,
    pub description: String,
    pub price: Option<i64>,
    pub category_id: CategoryId,
    pub user_id: UserId,
}

/// Command to update an advertisement.
///
/// Whitelist of updatable fields; ownership and category binding cannot be
/// reassigned through a patch.
#[derive(Debug)]
pub struct UpdateAdvertisementCommand {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
}

/// Listing filter and sort flags.
///
/// Each enabled sort flag appends its ordering, in field-declaration order:
/// creation date (newest first), update date (newest first), price
/// descending, price ascending.
#[derive(Debug, Clone, Default)]
pub struct AdvertisementFilter {
    /// Case-insensitive substring match on the category name
    pub category: Option<String>,
    pub max_price: Option<i64>,
    pub min_price: Option<i64>,
    pub sort_by_create: bool,
    pub sort_by_update: bool,
    pub price_descending: bool,
    pub price_ascending: bool,
}
