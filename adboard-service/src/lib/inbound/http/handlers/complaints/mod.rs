use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::complaint::models::Complaint;

pub mod create_complaint;
pub mod delete_complaint;
pub mod get_complaint;
pub mod list_complaints;
pub mod update_complaint;

const DESCRIPTION_MAX_LENGTH: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplaintData {
    pub id: i64,
    pub description: String,
    pub adv_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Complaint> for ComplaintData {
    fn from(complaint: &Complaint) -> Self {
        Self {
            id: complaint.id.0,
            description: complaint.description.clone(),
            adv_id: complaint.advertisement_id.0,
            user_id: complaint.user_id.0,
            created_at: complaint.created_at,
            updated_at: complaint.updated_at,
        }
    }
}
