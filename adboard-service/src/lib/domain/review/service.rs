use std::sync::Arc;

use crate::domain::advertisement::ports::AdvertisementRepository;
use crate::domain::paging::Page;
use crate::domain::paging::PageParams;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::models::CreateReviewCommand;
use crate::domain::review::models::Review;
use crate::domain::review::models::ReviewFilter;
use crate::domain::review::models::ReviewId;
use crate::domain::review::ports::ReviewRepository;

/// Domain service for review operations.
pub struct ReviewService<RR, AR>
where
    RR: ReviewRepository,
    AR: AdvertisementRepository,
{
    reviews: Arc<RR>,
    advertisements: Arc<AR>,
}

impl<RR, AR> ReviewService<RR, AR>
where
    RR: ReviewRepository,
    AR: AdvertisementRepository,
{
    pub fn new(reviews: Arc<RR>, advertisements: Arc<AR>) -> Self {
        Self {
            reviews,
            advertisements,
        }
    }

    /// Create a review under an advertisement.
    ///
    /// # Errors
    /// * `AdvertisementNotFound` - Target advertisement does not exist
    pub async fn create_review(&self, command: CreateReviewCommand) -> Result<Review, ReviewError> {
        self.advertisements
            .find_by_id(command.advertisement_id)
            .await
            .map_err(|e| ReviewError::DatabaseError(e.to_string()))?
            .ok_or(ReviewError::AdvertisementNotFound)?;

        self.reviews.create(&command).await
    }

    /// Retrieve a review by id.
    ///
    /// # Errors
    /// * `NotFound` - Review does not exist
    pub async fn get_review(&self, id: ReviewId) -> Result<Review, ReviewError> {
        self.reviews
            .find_by_id(id)
            .await?
            .ok_or(ReviewError::NotFound)
    }

    /// One page of the filtered review listing.
    pub async fn list_reviews(
        &self,
        filter: &ReviewFilter,
        page: &PageParams,
    ) -> Result<Page<Review>, ReviewError> {
        let (items, total) = self.reviews.list(filter, page).await?;
        Ok(Page::new(items, total, page))
    }

    /// Replace a review's description.
    ///
    /// # Errors
    /// * `NotFound` - Review does not exist
    pub async fn update_review(
        &self,
        id: ReviewId,
        description: String,
    ) -> Result<Review, ReviewError> {
        let mut review = self.get_review(id).await?;
        review.description = description;
        self.reviews.update(&review).await?;
        Ok(review)
    }

    /// Delete a review.
    ///
    /// # Errors
    /// * `NotFound` - Review does not exist
    pub async fn delete_review(&self, id: ReviewId) -> Result<(), ReviewError> {
        self.reviews.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::advertisement::errors::AdvertisementError;
    use crate::domain::advertisement::models::Advertisement;
    use crate::domain::advertisement::models::AdvertisementDetail;
    use crate::domain::advertisement::models::AdvertisementFilter;
    use crate::domain::advertisement::models::AdvertisementId;
    use crate::domain::advertisement::models::AdvertisementSummary;
    use crate::domain::advertisement::models::CreateAdvertisementCommand;
    use crate::domain::category::models::CategoryId;
    use crate::domain::user::models::UserId;

    mock! {
        pub TestReviewRepository {}

        #[async_trait]
        impl ReviewRepository for TestReviewRepository {
            async fn create(&self, command: &CreateReviewCommand) -> Result<Review, ReviewError>;
            async fn find_by_id(&self, id: ReviewId) -> Result<Option<Review>, ReviewError>;
            async fn list(
                &self,
                filter: &ReviewFilter,
                page: &PageParams,
            ) -> Result<(Vec<Review>, i64), ReviewError>;
            async fn update(&self, review: &Review) -> Result<(), ReviewError>;
            async fn delete(&self, id: ReviewId) -> Result<(), ReviewError>;
        }
    }

    mock! {
        pub TestAdvertisementRepository {}

        #[async_trait]
        impl AdvertisementRepository for TestAdvertisementRepository {
            async fn create(
                &self,
                command: &CreateAdvertisementCommand,
            ) -> Result<Advertisement, AdvertisementError>;
            async fn find_by_id(
                &self,
                id: AdvertisementId,
            ) -> Result<Option<Advertisement>, AdvertisementError>;
            async fn find_detail(
                &self,
                id: AdvertisementId,
            ) -> Result<Option<AdvertisementDetail>, AdvertisementError>;
            async fn list(
                &self,
                filter: &AdvertisementFilter,
                page: &PageParams,
            ) -> Result<(Vec<AdvertisementSummary>, i64), AdvertisementError>;
            async fn update(&self, advertisement: &Advertisement) -> Result<(), AdvertisementError>;
            async fn delete(&self, id: AdvertisementId) -> Result<(), AdvertisementError>;
        }
    }

    fn laptop(id: i64, owner: i64) -> Advertisement {
        Advertisement {
            id: AdvertisementId(id),
            name: "Laptop".to_string(),
            description: "Good laptop".to_string(),
            price: Some(1000),
            category_id: CategoryId(1),
            user_id: UserId(owner),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sample_review(id: i64) -> Review {
        Review {
            id: ReviewId(id),
            description: "Great product!".to_string(),
            advertisement_id: AdvertisementId(1),
            user_id: UserId(2),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_review_success() {
        let mut reviews = MockTestReviewRepository::new();
        let mut ads = MockTestAdvertisementRepository::new();

        ads.expect_find_by_id()
            .with(eq(AdvertisementId(1)))
            .times(1)
            .returning(|_| Ok(Some(laptop(1, 1))));
        reviews
            .expect_create()
            .withf(|command| command.user_id == UserId(2))
            .times(1)
            .returning(|_| Ok(sample_review(7)));

        let service = ReviewService::new(Arc::new(reviews), Arc::new(ads));
        let command = CreateReviewCommand {
            description: "Great product!".to_string(),
            advertisement_id: AdvertisementId(1),
            user_id: UserId(2),
        };

        let review = service.create_review(command).await.unwrap();
        assert_eq!(review.id, ReviewId(7));
    }

    #[tokio::test]
    async fn test_create_review_missing_advertisement() {
        let mut reviews = MockTestReviewRepository::new();
        let mut ads = MockTestAdvertisementRepository::new();

        ads.expect_find_by_id().times(1).returning(|_| Ok(None));
        reviews.expect_create().times(0);

        let service = ReviewService::new(Arc::new(reviews), Arc::new(ads));
        let command = CreateReviewCommand {
            description: "Great product!".to_string(),
            advertisement_id: AdvertisementId(404),
            user_id: UserId(2),
        };

        let result = service.create_review(command).await;
        assert!(matches!(
            result.unwrap_err(),
            ReviewError::AdvertisementNotFound
        ));
    }

    #[tokio::test]
    async fn test_update_review_replaces_description() {
        let mut reviews = MockTestReviewRepository::new();
        let ads = MockTestAdvertisementRepository::new();

        reviews
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(sample_review(7))));
        reviews
            .expect_update()
            .withf(|review| review.description == "Changed my mind")
            .times(1)
            .returning(|_| Ok(()));

        let service = ReviewService::new(Arc::new(reviews), Arc::new(ads));
        let updated = service
            .update_review(ReviewId(7), "Changed my mind".to_string())
            .await
            .unwrap();

        assert_eq!(updated.description, "Changed my mind");
    }

    #[tokio::test]
    async fn test_list_reviews_page_metadata() {
        let mut reviews = MockTestReviewRepository::new();
        let ads = MockTestAdvertisementRepository::new();

        reviews
            .expect_list()
            .times(1)
            .returning(|_, _| Ok((vec![], 0)));

        let service = ReviewService::new(Arc::new(reviews), Arc::new(ads));
        let page = service
            .list_reviews(&ReviewFilter::default(), &PageParams::default())
            .await
            .unwrap();

        assert_eq!(page.pages, 0);
        assert!(page.items.is_empty());
    }
}
