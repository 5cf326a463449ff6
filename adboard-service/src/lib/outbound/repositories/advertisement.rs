use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use sqlx::Postgres;
use sqlx::QueryBuilder;

use crate::domain::advertisement::errors::AdvertisementError;
use crate::domain::advertisement::models::Advertisement;
use crate::domain::advertisement::models::AdvertisementDetail;
use crate::domain::advertisement::models::AdvertisementFilter;
use crate::domain::advertisement::models::AdvertisementId;
use crate::domain::advertisement::models::AdvertisementSummary;
use crate::domain::advertisement::models::CreateAdvertisementCommand;
use crate::domain::advertisement::models::OwnerSummary;
use crate::domain::advertisement::ports::AdvertisementRepository;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;
use crate::domain::paging::PageParams;
use crate::domain::user::models::UserId;

pub struct PostgresAdvertisementRepository {
    pool: PgPool,
}

impl PostgresAdvertisementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AdvertisementRow {
    id: i64,
    name: String,
    description: String,
    price: Option<i64>,
    category_id: i64,
    user_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<AdvertisementRow> for Advertisement {
    fn from(row: AdvertisementRow) -> Self {
        Advertisement {
            id: AdvertisementId(row.id),
            name: row.name,
            description: row.description,
            price: row.price,
            category_id: CategoryId(row.category_id),
            user_id: UserId(row.user_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct DetailRow {
    id: i64,
    name: String,
    description: String,
    price: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    owner_name: String,
    owner_surname: String,
    owner_email: String,
    category_id: i64,
    category_name: String,
}

impl From<DetailRow> for AdvertisementDetail {
    fn from(row: DetailRow) -> Self {
        AdvertisementDetail {
            id: AdvertisementId(row.id),
            name: row.name,
            description: row.description,
            price: row.price,
            created_at: row.created_at,
            updated_at: row.updated_at,
            owner: OwnerSummary {
                name: row.owner_name,
                surname: row.owner_surname,
                email: row.owner_email,
            },
            category: Category {
                id: CategoryId(row.category_id),
                name: row.category_name,
            },
        }
    }
}

#[derive(sqlx::FromRow)]
struct SummaryRow {
    id: i64,
    name: String,
    price: Option<i64>,
    category_name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<SummaryRow> for AdvertisementSummary {
    fn from(row: SummaryRow) -> Self {
        AdvertisementSummary {
            id: AdvertisementId(row.id),
            name: row.name,
            price: row.price,
            category_name: row.category_name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const LIST_FROM: &str = " FROM advertisements a JOIN categories c ON c.id = a.category_id";

fn apply_filters(builder: &mut QueryBuilder<Postgres>, filter: &AdvertisementFilter) {
    let mut clause = " WHERE ";

    if let Some(category) = &filter.category {
        builder
            .push(clause)
            .push("c.name ILIKE ")
            .push_bind(format!("%{}%", category));
        clause = " AND ";
    }
    if let Some(max_price) = filter.max_price {
        builder
            .push(clause)
            .push("a.price <= ")
            .push_bind(max_price);
        clause = " AND ";
    }
    if let Some(min_price) = filter.min_price {
        builder
            .push(clause)
            .push("a.price >= ")
            .push_bind(min_price);
    }
}

fn apply_ordering(builder: &mut QueryBuilder<Postgres>, filter: &AdvertisementFilter) {
    let mut orderings = Vec::new();

    if filter.sort_by_create {
        orderings.push("a.created_at DESC");
    }
    if filter.sort_by_update {
        orderings.push("a.updated_at DESC");
    }
    if filter.price_descending {
        orderings.push("a.price DESC");
    }
    if filter.price_ascending {
        orderings.push("a.price ASC");
    }

    if !orderings.is_empty() {
        builder.push(" ORDER BY ").push(orderings.join(", "));
    }
}

#[async_trait]
impl AdvertisementRepository for PostgresAdvertisementRepository {
    async fn create(
        &self,
        command: &CreateAdvertisementCommand,
    ) -> Result<Advertisement, AdvertisementError> {
        let row = sqlx::query_as::<_, AdvertisementRow>(
            r#"
            INSERT INTO advertisements (name, description, price, category_id, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, price, category_id, user_id, created_at, updated_at
            "#,
        )
        .bind(&command.name)
        .bind(&command.description)
        .bind(command.price)
        .bind(command.category_id.0)
        .bind(command.user_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AdvertisementError::DatabaseError(e.to_string()))?;

        Ok(row.into())
    }

    async fn find_by_id(
        &self,
        id: AdvertisementId,
    ) -> Result<Option<Advertisement>, AdvertisementError> {
        let row = sqlx::query_as::<_, AdvertisementRow>(
            r#"
            SELECT id, name, description, price, category_id, user_id, created_at, updated_at
            FROM advertisements
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AdvertisementError::DatabaseError(e.to_string()))?;

        Ok(row.map(Advertisement::from))
    }

    async fn find_detail(
        &self,
        id: AdvertisementId,
    ) -> Result<Option<AdvertisementDetail>, AdvertisementError> {
        let row = sqlx::query_as::<_, DetailRow>(
            r#"
            SELECT a.id, a.name, a.description, a.price, a.created_at, a.updated_at,
                   u.name AS owner_name, u.surname AS owner_surname, u.email AS owner_email,
                   a.category_id, c.name AS category_name
            FROM advertisements a
            JOIN users u ON u.id = a.user_id
            JOIN categories c ON c.id = a.category_id
            WHERE a.id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AdvertisementError::DatabaseError(e.to_string()))?;

        Ok(row.map(AdvertisementDetail::from))
    }

    async fn list(
        &self,
        filter: &AdvertisementFilter,
        page: &PageParams,
    ) -> Result<(Vec<AdvertisementSummary>, i64), AdvertisementError> {
        let mut count_builder = QueryBuilder::new("SELECT COUNT(*)");
        count_builder.push(LIST_FROM);
        apply_filters(&mut count_builder, filter);

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AdvertisementError::DatabaseError(e.to_string()))?;

        let mut builder = QueryBuilder::new(
            "SELECT a.id, a.name, a.price, c.name AS category_name, a.created_at, a.updated_at",
        );
        builder.push(LIST_FROM);
        apply_filters(&mut builder, filter);
        apply_ordering(&mut builder, filter);
        builder
            .push(" LIMIT ")
            .push_bind(page.size())
            .push(" OFFSET ")
            .push_bind(page.offset());

        let rows: Vec<SummaryRow> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AdvertisementError::DatabaseError(e.to_string()))?;

        Ok((
            rows.into_iter().map(AdvertisementSummary::from).collect(),
            total,
        ))
    }

    async fn update(&self, advertisement: &Advertisement) -> Result<(), AdvertisementError> {
        let result = sqlx::query(
            r#"
            UPDATE advertisements
            SET name = $2, description = $3, price = $4, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(advertisement.id.0)
        .bind(&advertisement.name)
        .bind(&advertisement.description)
        .bind(advertisement.price)
        .execute(&self.pool)
        .await
        .map_err(|e| AdvertisementError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AdvertisementError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: AdvertisementId) -> Result<(), AdvertisementError> {
        let result = sqlx::query(
            r#"
            DELETE FROM advertisements
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| AdvertisementError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AdvertisementError::NotFound);
        }

        Ok(())
    }
}
