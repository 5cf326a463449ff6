use thiserror::Error;

/// Top-level error for review operations
#[derive(Debug, Clone, Error)]
pub enum ReviewError {
    #[error("Review not found")]
    NotFound,

    #[error("Advertisement not found")]
    AdvertisementNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
