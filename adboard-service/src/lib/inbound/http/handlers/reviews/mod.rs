use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::review::models::Review;

pub mod create_review;
pub mod delete_review;
pub mod get_review;
pub mod list_reviews;
pub mod update_review;

const DESCRIPTION_MAX_LENGTH: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewData {
    pub id: i64,
    pub description: String,
    pub adv_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Review> for ReviewData {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id.0,
            description: review.description.clone(),
            adv_id: review.advertisement_id.0,
            user_id: review.user_id.0,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}
