use std::sync::Arc;

use crate::domain::advertisement::errors::AdvertisementError;
use crate::domain::advertisement::models::Advertisement;
use crate::domain::advertisement::models::AdvertisementDetail;
use crate::domain::advertisement::models::AdvertisementFilter;
use crate::domain::advertisement::models::AdvertisementId;
use crate::domain::advertisement::models::AdvertisementSummary;
use crate::domain::advertisement::models::CreateAdvertisementCommand;
use crate::domain::advertisement::models::UpdateAdvertisementCommand;
use crate::domain::advertisement::ports::AdvertisementRepository;
use crate::domain::category::ports::CategoryRepository;
use crate::domain::paging::Page;
use crate::domain::paging::PageParams;

/// Domain service for advertisement operations.
///
/// Consults the category repository on create so a dangling category id is a
/// client error rather than a foreign-key violation.
pub struct AdvertisementService<AR, CR>
where
    AR: AdvertisementRepository,
    CR: CategoryRepository,
{
    advertisements: Arc<AR>,
    categories: Arc<CR>,
}

impl<AR, CR> AdvertisementService<AR, CR>
where
    AR: AdvertisementRepository,
    CR: CategoryRepository,
{
    pub fn new(advertisements: Arc<AR>, categories: Arc<CR>) -> Self {
        Self {
            advertisements,
            categories,
        }
    }

    /// Create an advertisement owned by the requester.
    ///
    /// # Errors
    /// * `CategoryNotFound` - Referenced category does not exist
    pub async fn create_advertisement(
        &self,
        command: CreateAdvertisementCommand,
    ) -> Result<AdvertisementDetail, AdvertisementError> {
        if self
            .categories
            .find_by_id(command.category_id)
            .await
            .map_err(|e| AdvertisementError::DatabaseError(e.to_string()))?
            .is_none()
        {
            return Err(AdvertisementError::CategoryNotFound);
        }

        let advertisement = self.advertisements.create(&command).await?;

        self.advertisements
            .find_detail(advertisement.id)
            .await?
            .ok_or(AdvertisementError::NotFound)
    }

    /// Retrieve the bare advertisement row.
    ///
    /// # Errors
    /// * `NotFound` - Advertisement does not exist
    pub async fn get_advertisement(
        &self,
        id: AdvertisementId,
    ) -> Result<Advertisement, AdvertisementError> {
        self.advertisements
            .find_by_id(id)
            .await?
            .ok_or(AdvertisementError::NotFound)
    }

    /// Retrieve the advertisement with owner and category resolved.
    ///
    /// # Errors
    /// * `NotFound` - Advertisement does not exist
    pub async fn get_advertisement_detail(
        &self,
        id: AdvertisementId,
    ) -> Result<AdvertisementDetail, AdvertisementError> {
        self.advertisements
            .find_detail(id)
            .await?
            .ok_or(AdvertisementError::NotFound)
    }

    /// One page of the filtered, sorted listing.
    pub async fn list_advertisements(
        &self,
        filter: &AdvertisementFilter,
        page: &PageParams,
    ) -> Result<Page<AdvertisementSummary>, AdvertisementError> {
        let (items, total) = self.advertisements.list(filter, page).await?;
        Ok(Page::new(items, total, page))
    }

    /// Apply a partial update (name, description, price only).
    ///
    /// # Errors
    /// * `NotFound` - Advertisement does not exist
    pub async fn update_advertisement(
        &self,
        id: AdvertisementId,
        command: UpdateAdvertisementCommand,
    ) -> Result<AdvertisementDetail, AdvertisementError> {
        let mut advertisement = self.get_advertisement(id).await?;

        if let Some(name) = command.name {
            advertisement.name = name;
        }
        if let Some(description) = command.description {
            advertisement.description = description;
        }
        if let Some(price) = command.price {
            advertisement.price = Some(price);
        }

        self.advertisements.update(&advertisement).await?;

        self.get_advertisement_detail(id).await
    }

    /// Delete an advertisement.
    ///
    /// # Errors
    /// * `NotFound` - Advertisement does not exist
    pub async fn delete_advertisement(
        &self,
        id: AdvertisementId,
    ) -> Result<(), AdvertisementError> {
        self.advertisements.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::advertisement::models::OwnerSummary;
    use crate::domain::category::errors::CategoryError;
    use crate::domain::category::models::Category;
    use crate::domain::category::models::CategoryId;
    use crate::domain::user::models::UserId;

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

    mock! {
        pub TestCategoryRepository {}

        #[async_trait]
        impl CategoryRepository for TestCategoryRepository {
            async fn create(&self, name: &str) -> Result<Category, CategoryError>;
            async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, CategoryError>;
            async fn find_by_name(&self, name: &str) -> Result<Option<Category>, CategoryError>;
            async fn update(&self, category: &Category) -> Result<(), CategoryError>;
            async fn delete(&self, id: CategoryId) -> Result<(), CategoryError>;
        }
    }

    fn laptop(id: i64) -> Advertisement {
        Advertisement {
            id: AdvertisementId(id),
            name: "Laptop".to_string(),
            description: "Good laptop".to_string(),
            price: Some(1000),
            category_id: CategoryId(1),
            user_id: UserId(1),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn laptop_detail(id: i64) -> AdvertisementDetail {
        AdvertisementDetail {
            id: AdvertisementId(id),
            name: "Laptop".to_string(),
            description: "Good laptop".to_string(),
            price: Some(1000),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            owner: OwnerSummary {
                name: "Ivan".to_string(),
                surname: "Petrov".to_string(),
                email: "ivan@example.com".to_string(),
            },
            category: Category {
                id: CategoryId(1),
                name: "Electronics".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_create_advertisement_unknown_category() {
        let ads = MockTestAdvertisementRepository::new();
        let mut categories = MockTestCategoryRepository::new();

        categories
            .expect_find_by_id()
            .with(eq(CategoryId(42)))
            .times(1)
            .returning(|_| Ok(None));

        let service = AdvertisementService::new(Arc::new(ads), Arc::new(categories));
        let command = CreateAdvertisementCommand {
            name: "Laptop".to_string(),
            description: "Good laptop".to_string(),
            price: Some(1000),
            category_id: CategoryId(42),
            user_id: UserId(1),
        };

        let result = service.create_advertisement(command).await;
        assert!(matches!(
            result.unwrap_err(),
            AdvertisementError::CategoryNotFound
        ));
    }

    #[tokio::test]
    async fn test_create_advertisement_returns_detail() {
        let mut ads = MockTestAdvertisementRepository::new();
        let mut categories = MockTestCategoryRepository::new();

        categories.expect_find_by_id().times(1).returning(|_| {
            Ok(Some(Category {
                id: CategoryId(1),
                name: "Electronics".to_string(),
            }))
        });
        ads.expect_create().times(1).returning(|_| Ok(laptop(5)));
        ads.expect_find_detail()
            .with(eq(AdvertisementId(5)))
            .times(1)
            .returning(|_| Ok(Some(laptop_detail(5))));

        let service = AdvertisementService::new(Arc::new(ads), Arc::new(categories));
        let command = CreateAdvertisementCommand {
            name: "Laptop".to_string(),
            description: "Good laptop".to_string(),
            price: Some(1000),
            category_id: CategoryId(1),
            user_id: UserId(1),
        };

        let detail = service.create_advertisement(command).await.unwrap();
        assert_eq!(detail.id, AdvertisementId(5));
        assert_eq!(detail.category.name, "Electronics");
    }

    #[tokio::test]
    async fn test_list_wraps_into_page() {
        let mut ads = MockTestAdvertisementRepository::new();
        let categories = MockTestCategoryRepository::new();

        ads.expect_list().times(1).returning(|_, page| {
            let items = (0..page.size())
                .map(|i| AdvertisementSummary {
                    id: AdvertisementId(i),
                    name: format!("Ad {}", i),
                    price: Some(100 * i),
                    category_name: "Electronics".to_string(),
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                })
                .collect();
            Ok((items, 15))
        });

        let service = AdvertisementService::new(Arc::new(ads), Arc::new(categories));
        let page = service
            .list_advertisements(
                &AdvertisementFilter::default(),
                &PageParams::new(1, 5).unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(page.items.len(), 5);
        assert_eq!(page.total, 15);
        assert_eq!(page.pages, 3);
    }

    #[tokio::test]
    async fn test_update_advertisement_applies_whitelist() {
        let mut ads = MockTestAdvertisementRepository::new();
        let categories = MockTestCategoryRepository::new();

        ads.expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(laptop(5))));
        ads.expect_update()
            .withf(|ad| ad.name == "Laptop Pro" && ad.price == Some(1500))
            .times(1)
            .returning(|_| Ok(()));
        ads.expect_find_detail()
            .times(1)
            .returning(|_| Ok(Some(laptop_detail(5))));

        let service = AdvertisementService::new(Arc::new(ads), Arc::new(categories));
        let command = UpdateAdvertisementCommand {
            name: Some("Laptop Pro".to_string()),
            description: None,
            price: Some(1500),
        };

        let result = service
            .update_advertisement(AdvertisementId(5), command)
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_advertisement_not_found() {
        let mut ads = MockTestAdvertisementRepository::new();
        let categories = MockTestCategoryRepository::new();

        ads.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = AdvertisementService::new(Arc::new(ads), Arc::new(categories));
        let command = UpdateAdvertisementCommand {
            name: None,
            description: None,
            price: None,
        };

        let result = service
            .update_advertisement(AdvertisementId(404), command)
            .await;
        assert!(matches!(result.unwrap_err(), AdvertisementError::NotFound));
    }
}
