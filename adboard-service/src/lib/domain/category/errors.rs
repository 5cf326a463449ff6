use thiserror::Error;

/// Top-level error for category operations
#[derive(Debug, Clone, Error)]
pub enum CategoryError {
    #[error("Category not found")]
    NotFound,

    #[error("A category with this name already exists")]
    NameAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
