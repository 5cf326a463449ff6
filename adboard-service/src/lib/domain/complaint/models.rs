use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::advertisement::models::AdvertisementId;
use crate::domain::user::models::UserId;

/// Complaint filed by a user against an advertisement.
#[derive(Debug, Clone)]
pub struct Complaint {
    pub id: ComplaintId,
    pub description: String,
    pub advertisement_id: AdvertisementId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Complaint unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComplaintId(pub i64);

impl fmt::Display for ComplaintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a complaint; the author is always the requester.
#[derive(Debug)]
pub struct CreateComplaintCommand {
    pub description: String,
    pub advertisement_id: AdvertisementId,
    pub user_id: UserId,
}

/// Listing filter and sort flags for the admin complaint listing.
#[derive(Debug, Clone, Default)]
pub struct ComplaintFilter {
    pub advertisement_id: Option<AdvertisementId>,
    pub sort_by_create: bool,
    pub sort_by_update: bool,
}
