use thiserror::Error;

/// Top-level error for advertisement operations
#[derive(Debug, Clone, Error)]
pub enum AdvertisementError {
    #[error("Advertisement not found")]
    NotFound,

    /// The referenced category does not exist; a client error on create.
    #[error("Category not found")]
    CategoryNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
