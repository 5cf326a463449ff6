use async_trait::async_trait;

use crate::domain::advertisement::errors::AdvertisementError;
use crate::domain::advertisement::models::Advertisement;
use crate::domain::advertisement::models::AdvertisementDetail;
use crate::domain::advertisement::models::AdvertisementFilter;
use crate::domain::advertisement::models::AdvertisementId;
use crate::domain::advertisement::models::AdvertisementSummary;
use crate::domain::advertisement::models::CreateAdvertisementCommand;
use crate::domain::paging::PageParams;

/// Persistence operations for advertisements.
#[async_trait]
pub trait AdvertisementRepository: Send + Sync + 'static {
    /// Persist a new advertisement; id and timestamps come from storage.
    async fn create(
        &self,
        command: &CreateAdvertisementCommand,
    ) -> Result<Advertisement, AdvertisementError>;

    /// Retrieve the bare advertisement row (None if not found).
    async fn find_by_id(
        &self,
        id: AdvertisementId,
    ) -> Result<Option<Advertisement>, AdvertisementError>;

    /// Retrieve the advertisement with owner and category resolved.
    async fn find_detail(
        &self,
        id: AdvertisementId,
    ) -> Result<Option<AdvertisementDetail>, AdvertisementError>;

    /// One page of listing rows plus the total count over the same filter.
    async fn list(
        &self,
        filter: &AdvertisementFilter,
        page: &PageParams,
    ) -> Result<(Vec<AdvertisementSummary>, i64), AdvertisementError>;

    /// Persist updated name, description, and price; bumps `updated_at`.
    ///
    /// # Errors
    /// * `NotFound` - Advertisement does not exist
    async fn update(&self, advertisement: &Advertisement) -> Result<(), AdvertisementError>;

    /// Remove an advertisement and, through the schema, its reviews and
    /// complaints.
    ///
    /// # Errors
    /// * `NotFound` - Advertisement does not exist
    async fn delete(&self, id: AdvertisementId) -> Result<(), AdvertisementError>;
}
