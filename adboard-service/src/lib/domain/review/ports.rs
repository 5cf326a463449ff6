use async_trait::async_trait;

use crate::domain::paging::PageParams;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::models::CreateReviewCommand;
use crate::domain::review::models::Review;
use crate::domain::review::models::ReviewFilter;
use crate::domain::review::models::ReviewId;

/// Persistence operations for reviews.
#[async_trait]
pub trait ReviewRepository: Send + Sync + 'static {
    /// Persist a new review; id and timestamps come from storage.
    async fn create(&self, command: &CreateReviewCommand) -> Result<Review, ReviewError>;

    /// Retrieve review by identifier (None if not found).
    async fn find_by_id(&self, id: ReviewId) -> Result<Option<Review>, ReviewError>;

    /// One page of reviews plus the total count over the same filter.
    async fn list(
        &self,
        filter: &ReviewFilter,
        page: &PageParams,
    ) -> Result<(Vec<Review>, i64), ReviewError>;

    /// Persist an updated description; bumps `updated_at`.
    ///
    /// # Errors
    /// * `NotFound` - Review does not exist
    async fn update(&self, review: &Review) -> Result<(), ReviewError>;

    /// Remove a review.
    ///
    /// # Errors
    /// * `NotFound` - Review does not exist
    async fn delete(&self, id: ReviewId) -> Result<(), ReviewError>;
}
