use thiserror::Error;

/// Authorization failures, surfaced verbatim to the caller.
///
/// `InvalidCredentials` maps to 401; `Banned` and `InsufficientPrivileges`
/// map to 403. Failure paths are explicit in guard signatures rather than
/// flowing through exceptions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("Could not validate credentials")]
    InvalidCredentials,

    #[error("You are banned")]
    Banned,

    #[error("Insufficient privileges")]
    InsufficientPrivileges,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
