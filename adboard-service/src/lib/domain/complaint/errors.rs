use thiserror::Error;

/// Top-level error for complaint operations
#[derive(Debug, Clone, Error)]
pub enum ComplaintError {
    #[error("Complaint not found")]
    NotFound,

    #[error("Advertisement not found")]
    AdvertisementNotFound,

    #[error("You cannot leave complaints about your ads")]
    OwnAdvertisement,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
