use std::sync::Arc;

use crate::domain::advertisement::ports::AdvertisementRepository;
use crate::domain::complaint::errors::ComplaintError;
use crate::domain::complaint::models::Complaint;
use crate::domain::complaint::models::ComplaintFilter;
use crate::domain::complaint::models::ComplaintId;
use crate::domain::complaint::models::CreateComplaintCommand;
use crate::domain::complaint::ports::ComplaintRepository;
use crate::domain::paging::Page;
use crate::domain::paging::PageParams;

/// Domain service for complaint operations.
///
/// Unlike reviews, complaining about your own advertisement is rejected.
pub struct ComplaintService<PR, AR>
where
    PR: ComplaintRepository,
    AR: AdvertisementRepository,
{
    complaints: Arc<PR>,
    advertisements: Arc<AR>,
}

impl<PR, AR> ComplaintService<PR, AR>
where
    PR: ComplaintRepository,
    AR: AdvertisementRepository,
{
    pub fn new(complaints: Arc<PR>, advertisements: Arc<AR>) -> Self {
        Self {
            complaints,
            advertisements,
        }
    }

    /// File a complaint against an advertisement.
    ///
    /// # Errors
    /// * `AdvertisementNotFound` - Target advertisement does not exist
    /// * `OwnAdvertisement` - Requester owns the advertisement
    pub async fn create_complaint(
        &self,
        command: CreateComplaintCommand,
    ) -> Result<Complaint, ComplaintError> {
        let advertisement = self
            .advertisements
            .find_by_id(command.advertisement_id)
            .await
            .map_err(|e| ComplaintError::DatabaseError(e.to_string()))?
            .ok_or(ComplaintError::AdvertisementNotFound)?;

        if advertisement.user_id == command.user_id {
            return Err(ComplaintError::OwnAdvertisement);
        }

        self.complaints.create(&command).await
    }

    /// Retrieve a complaint by id.
    ///
    /// # Errors
    /// * `NotFound` - Complaint does not exist
    pub async fn get_complaint(&self, id: ComplaintId) -> Result<Complaint, ComplaintError> {
        self.complaints
            .find_by_id(id)
            .await?
            .ok_or(ComplaintError::NotFound)
    }

    /// One page of the filtered complaint listing.
    pub async fn list_complaints(
        &self,
        filter: &ComplaintFilter,
        page: &PageParams,
    ) -> Result<Page<Complaint>, ComplaintError> {
        let (items, total) = self.complaints.list(filter, page).await?;
        Ok(Page::new(items, total, page))
    }

    /// Replace a complaint's description.
    ///
    /// # Errors
    /// * `NotFound` - Complaint does not exist
    pub async fn update_complaint(
        &self,
        id: ComplaintId,
        description: String,
    ) -> Result<Complaint, ComplaintError> {
        let mut complaint = self.get_complaint(id).await?;
        complaint.description = description;
        self.complaints.update(&complaint).await?;
        Ok(complaint)
    }

    /// Delete a complaint.
    ///
    /// # Errors
    /// * `NotFound` - Complaint does not exist
    pub async fn delete_complaint(&self, id: ComplaintId) -> Result<(), ComplaintError> {
        self.complaints.delete(id).await
    }
}
