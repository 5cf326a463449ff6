use std::sync::Arc;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;
use crate::domain::category::ports::CategoryRepository;

/// Domain service for category management.
pub struct CategoryService<CR>
where
    CR: CategoryRepository,
{
    repository: Arc<CR>,
}

impl<CR> CategoryService<CR>
where
    CR: CategoryRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }

    /// Create a category.
    ///
    /// # Errors
    /// * `NameAlreadyExists` - Name is already taken
    pub async fn create_category(&self, name: &str) -> Result<Category, CategoryError> {
        self.repository.create(name).await
    }

    /// Retrieve a category by id.
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    pub async fn get_category(&self, id: CategoryId) -> Result<Category, CategoryError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound)
    }

    /// Rename a category.
    ///
    /// The name is checked against existing categories case-insensitively
    /// before the update runs.
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    /// * `NameAlreadyExists` - Another category already uses this name
    pub async fn update_category(
        &self,
        id: CategoryId,
        name: Option<String>,
    ) -> Result<Category, CategoryError> {
        let mut category = self.get_category(id).await?;

        if let Some(name) = name {
            if self.repository.find_by_name(&name).await?.is_some() {
                return Err(CategoryError::NameAlreadyExists);
            }
            category.name = name;
            self.repository.update(&category).await?;
        }

        Ok(category)
    }

    /// Delete a category.
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    pub async fn delete_category(&self, id: CategoryId) -> Result<(), CategoryError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mockall::mock;

    use super::*;

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

    fn electronics() -> Category {
        Category {
            id: CategoryId(1),
            name: "Electronics".to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_category_not_found() {
        let mut repository = MockTestCategoryRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = CategoryService::new(Arc::new(repository));
        let result = service.get_category(CategoryId(9)).await;

        assert!(matches!(result.unwrap_err(), CategoryError::NotFound));
    }

    #[tokio::test]
    async fn test_update_category_rejects_taken_name() {
        let mut repository = MockTestCategoryRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(electronics())));
        repository
            .expect_find_by_name()
            .withf(|name| name == "Books")
            .times(1)
            .returning(|_| {
                Ok(Some(Category {
                    id: CategoryId(2),
                    name: "Books".to_string(),
                }))
            });
        repository.expect_update().times(0);

        let service = CategoryService::new(Arc::new(repository));
        let result = service
            .update_category(CategoryId(1), Some("Books".to_string()))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CategoryError::NameAlreadyExists
        ));
    }

    #[tokio::test]
    async fn test_update_category_renames() {
        let mut repository = MockTestCategoryRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(electronics())));
        repository
            .expect_find_by_name()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_update()
            .withf(|category| category.name == "Gadgets")
            .times(1)
            .returning(|_| Ok(()));

        let service = CategoryService::new(Arc::new(repository));
        let updated = service
            .update_category(CategoryId(1), Some("Gadgets".to_string()))
            .await
            .unwrap();

        assert_eq!(updated.name, "Gadgets");
    }

    #[tokio::test]
    async fn test_update_category_without_name_is_noop() {
        let mut repository = MockTestCategoryRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(electronics())));
        repository.expect_update().times(0);

        let service = CategoryService::new(Arc::new(repository));
        let unchanged = service.update_category(CategoryId(1), None).await.unwrap();

        assert_eq!(unchanged.name, "Electronics");
    }
}
