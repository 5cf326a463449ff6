use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::access::errors::AccessError;
use crate::domain::access::models::OwnableResource;
use crate::domain::access::ports::OwnershipProbe;
use crate::domain::user::models::UserId;

/// One EXISTS query per check, against the table matching the resource kind.
pub struct PostgresOwnershipProbe {
    pool: PgPool,
}

impl PostgresOwnershipProbe {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn table_for(resource: OwnableResource) -> &'static str {
    match resource {
        OwnableResource::Advertisement => "advertisements",
        OwnableResource::Review => "reviews",
        OwnableResource::Complaint => "complaints",
    }
}

#[async_trait]
impl OwnershipProbe for PostgresOwnershipProbe {
    async fn owns(
        &self,
        resource: OwnableResource,
        resource_id: i64,
        user_id: UserId,
    ) -> Result<bool, AccessError> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1 AND user_id = $2)",
            table_for(resource)
        );

        sqlx::query_scalar(&sql)
            .bind(resource_id)
            .bind(user_id.0)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AccessError::DatabaseError(e.to_string()))
    }
}
