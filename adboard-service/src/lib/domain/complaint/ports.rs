use async_trait::async_trait;

use crate::domain::complaint::errors::ComplaintError;
use crate::domain::complaint::models::Complaint;
use crate::domain::complaint::models::ComplaintFilter;
use crate::domain::complaint::models::ComplaintId;
use crate::domain::complaint::models::CreateComplaintCommand;
use crate::domain::paging::PageParams;

/// Persistence operations for complaints.
#[async_trait]
pub trait ComplaintRepository: Send + Sync + 'static {
    /// Persist a new complaint; id and timestamps come from storage.
    async fn create(&self, command: &CreateComplaintCommand) -> Result<Complaint, ComplaintError>;

    /// Retrieve complaint by identifier (None if not found).
    async fn find_by_id(&self, id: ComplaintId) -> Result<Option<Complaint>, ComplaintError>;

    /// One page of complaints plus the total count over the same filter.
    async fn list(
        &self,
        filter: &ComplaintFilter,
        page: &PageParams,
    ) -> Result<(Vec<Complaint>, i64), ComplaintError>;

    /// Persist an updated description; bumps `updated_at`.
    ///
    /// # Errors
    /// * `NotFound` - Complaint does not exist
    async fn update(&self, complaint: &Complaint) -> Result<(), ComplaintError>;

    /// Remove a complaint.
    ///
    /// # Errors
    /// * `NotFound` - Complaint does not exist
    async fn delete(&self, id: ComplaintId) -> Result<(), ComplaintError>;
}
