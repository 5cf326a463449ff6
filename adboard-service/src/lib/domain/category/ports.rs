use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;

/// Persistence operations for categories.
#[async_trait]
pub trait CategoryRepository: Send + Sync + 'static {
    /// Persist a new category.
    ///
    /// # Errors
    /// * `NameAlreadyExists` - Name is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, name: &str) -> Result<Category, CategoryError>;

    /// Retrieve category by identifier (None if not found).
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, CategoryError>;

    /// Retrieve category by name, case-insensitively (None if not found).
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, CategoryError>;

    /// Persist a renamed category.
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    /// * `NameAlreadyExists` - New name is already taken
    async fn update(&self, category: &Category) -> Result<(), CategoryError>;

    /// Remove a category.
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    async fn delete(&self, id: CategoryId) -> Result<(), CategoryError>;
}
