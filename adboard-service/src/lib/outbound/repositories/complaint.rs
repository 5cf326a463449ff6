use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use sqlx::Postgres;
use sqlx::QueryBuilder;

use crate::domain::advertisement::models::AdvertisementId;
use crate::domain::complaint::errors::ComplaintError;
use crate::domain::complaint::models::Complaint;
use crate::domain::complaint::models::ComplaintFilter;
use crate::domain::complaint::models::ComplaintId;
use crate::domain::complaint::models::CreateComplaintCommand;
use crate::domain::complaint::ports::ComplaintRepository;
use crate::domain::paging::PageParams;
use crate::domain::user::models::UserId;

pub struct PostgresComplaintRepository {
    pool: PgPool,
}

impl PostgresComplaintRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ComplaintRow {
    id: i64,
    description: String,
    advertisement_id: i64,
    user_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ComplaintRow> for Complaint {
    fn from(row: ComplaintRow) -> Self {
        Complaint {
            id: ComplaintId(row.id),
            description: row.description,
            advertisement_id: AdvertisementId(row.advertisement_id),
            user_id: UserId(row.user_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn apply_filters(builder: &mut QueryBuilder<Postgres>, filter: &ComplaintFilter) {
    if let Some(advertisement_id) = filter.advertisement_id {
        builder
            .push(" WHERE advertisement_id = ")
            .push_bind(advertisement_id.0);
    }
}

fn apply_ordering(builder: &mut QueryBuilder<Postgres>, filter: &ComplaintFilter) {
    let mut orderings = Vec::new();

    if filter.sort_by_create {
        orderings.push("created_at DESC");
    }
    if filter.sort_by_update {
        orderings.push("updated_at DESC");
    }

    if !orderings.is_empty() {
        builder.push(" ORDER BY ").push(orderings.join(", "));
    }
}

#[async_trait]
impl ComplaintRepository for PostgresComplaintRepository {
    async fn create(&self, command: &CreateComplaintCommand) -> Result<Complaint, ComplaintError> {
        let row = sqlx::query_as::<_, ComplaintRow>(
            r#"
            INSERT INTO complaints (description, advertisement_id, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, description, advertisement_id, user_id, created_at, updated_at
            "#,
        )
        .bind(&command.description)
        .bind(command.advertisement_id.0)
        .bind(command.user_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ComplaintError::DatabaseError(e.to_string()))?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: ComplaintId) -> Result<Option<Complaint>, ComplaintError> {
        let row = sqlx::query_as::<_, ComplaintRow>(
            r#"
            SELECT id, description, advertisement_id, user_id, created_at, updated_at
            FROM complaints
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ComplaintError::DatabaseError(e.to_string()))?;

        Ok(row.map(Complaint::from))
    }

    async fn list(
        &self,
        filter: &ComplaintFilter,
        page: &PageParams,
    ) -> Result<(Vec<Complaint>, i64), ComplaintError> {
        let mut count_builder = QueryBuilder::new("SELECT COUNT(*) FROM complaints");
        apply_filters(&mut count_builder, filter);

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ComplaintError::DatabaseError(e.to_string()))?;

        let mut builder = QueryBuilder::new(
            "SELECT id, description, advertisement_id, user_id, created_at, updated_at FROM complaints",
        );
        apply_filters(&mut builder, filter);
        apply_ordering(&mut builder, filter);
        builder
            .push(" LIMIT ")
            .push_bind(page.size())
            .push(" OFFSET ")
            .push_bind(page.offset());

        let rows: Vec<ComplaintRow> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ComplaintError::DatabaseError(e.to_string()))?;

        Ok((rows.into_iter().map(Complaint::from).collect(), total))
    }

    async fn update(&self, complaint: &Complaint) -> Result<(), ComplaintError> {
        let result = sqlx::query(
            r#"
            UPDATE complaints
            SET description = $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(complaint.id.0)
        .bind(&complaint.description)
        .execute(&self.pool)
        .await
        .map_err(|e| ComplaintError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ComplaintError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: ComplaintId) -> Result<(), ComplaintError> {
        let result = sqlx::query(
            r#"
            DELETE FROM complaints
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ComplaintError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ComplaintError::NotFound);
        }

        Ok(())
    }
}
