use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::advertisement::models::AdvertisementId;
use crate::domain::user::models::UserId;

/// Review left by a user under an advertisement.
#[derive(Debug, Clone)]
pub struct Review {
    pub id: ReviewId,
    pub description: String,
    pub advertisement_id: AdvertisementId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Review unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReviewId(pub i64);

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a review; the author is always the requester.
#[derive(Debug)]
pub struct CreateReviewCommand {
    pub description: String,
    pub advertisement_id: AdvertisementId,
    pub user_id: UserId,
}

/// Listing filter and sort flags for the admin review listing.
#[derive(Debug, Clone, Default)]
pub struct ReviewFilter {
    pub advertisement_id: Option<AdvertisementId>,
    pub sort_by_create: bool,
    pub sort_by_update: bool,
}
