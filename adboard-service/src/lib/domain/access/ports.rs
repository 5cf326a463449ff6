use async_trait::async_trait;

use crate::domain::access::errors::AccessError;
use crate::domain::access::models::OwnableResource;
use crate::domain::user::models::UserId;

/// The single lookup the guards are allowed: does a row of the given
/// resource kind exist with this id AND this owner?
#[async_trait]
pub trait OwnershipProbe: Send + Sync + 'static {
    /// # Errors
    /// * `DatabaseError` - Lookup failed
    async fn owns(
        &self,
        resource: OwnableResource,
        resource_id: i64,
        user_id: UserId,
    ) -> Result<bool, AccessError>;
}
