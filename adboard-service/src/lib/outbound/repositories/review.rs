use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use sqlx::Postgres;
use sqlx::QueryBuilder;

use crate::domain::advertisement::models::AdvertisementId;
use crate::domain::paging::PageParams;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::models::CreateReviewCommand;
use crate::domain::review::models::Review;
use crate::domain::review::models::ReviewFilter;
use crate::domain::review::models::ReviewId;
use crate::domain::review::ports::ReviewRepository;
use crate::domain::user::models::UserId;

pub struct PostgresReviewRepository {
    pool: PgPool,
}

impl PostgresReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ReviewRow {
    id: i64,
    description: String,
    advertisement_id: i64,
    user_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Review {
            id: ReviewId(row.id),
            description: row.description,
            advertisement_id: AdvertisementId(row.advertisement_id),
            user_id: UserId(row.user_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn apply_filters(builder: &mut QueryBuilder<Postgres>, filter: &ReviewFilter) {
    if let Some(advertisement_id) = filter.advertisement_id {
        builder
            .push(" WHERE advertisement_id = ")
            .push_bind(advertisement_id.0);
    }
}

fn apply_ordering(builder: &mut QueryBuilder<Postgres>, filter: &ReviewFilter) {
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
impl ReviewRepository for PostgresReviewRepository {
    async fn create(&self, command: &CreateReviewCommand) -> Result<Review, ReviewError> {
        let row = sqlx::query_as::<_, ReviewRow>(
            r#"
            INSERT INTO reviews (description, advertisement_id, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, description, advertisement_id, user_id, created_at, updated_at
            "#,
        )
        .bind(&command.description)
        .bind(command.advertisement_id.0)
        .bind(command.user_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ReviewError::DatabaseError(e.to_string()))?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: ReviewId) -> Result<Option<Review>, ReviewError> {
        let row = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT id, description, advertisement_id, user_id, created_at, updated_at
            FROM reviews
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ReviewError::DatabaseError(e.to_string()))?;

        Ok(row.map(Review::from))
    }

    async fn list(
        &self,
        filter: &ReviewFilter,
        page: &PageParams,
    ) -> Result<(Vec<Review>, i64), ReviewError> {
        let mut count_builder = QueryBuilder::new("SELECT COUNT(*) FROM reviews");
        apply_filters(&mut count_builder, filter);

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ReviewError::DatabaseError(e.to_string()))?;

        let mut builder = QueryBuilder::new(
            "SELECT id, description, advertisement_id, user_id, created_at, updated_at FROM reviews",
        );
        apply_filters(&mut builder, filter);
        apply_ordering(&mut builder, filter);
        builder
            .push(" LIMIT ")
            .push_bind(page.size())
            .push(" OFFSET ")
            .push_bind(page.offset());

        let rows: Vec<ReviewRow> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ReviewError::DatabaseError(e.to_string()))?;

        Ok((rows.into_iter().map(Review::from).collect(), total))
    }

    async fn update(&self, review: &Review) -> Result<(), ReviewError> {
        let result = sqlx::query(
            r#"
            UPDATE reviews
            SET description = $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(review.id.0)
        .bind(&review.description)
        .execute(&self.pool)
        .await
        .map_err(|e| ReviewError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ReviewError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: ReviewId) -> Result<(), ReviewError> {
        let result = sqlx::query(
            r#"
            DELETE FROM reviews
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ReviewError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ReviewError::NotFound);
        }

        Ok(())
    }
}
