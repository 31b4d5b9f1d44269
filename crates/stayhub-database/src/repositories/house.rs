//! House and residential area repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_core::types::pagination::{PageRequest, PageResponse};
use stayhub_entity::house::area::{CreateArea, ResidentialArea};
use stayhub_entity::house::model::{CreateHouse, House};

/// Repository for house and residential area rows.
#[derive(Debug, Clone)]
pub struct HouseRepository {
    pool: PgPool,
}

impl HouseRepository {
    /// Create a new house repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a house by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<House>> {
        sqlx::query_as::<_, House>("SELECT * FROM houses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find house", e))
    }

    /// List active houses for browsing, paginated.
    pub async fn find_active(&self, page: &PageRequest) -> AppResult<PageResponse<House>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM houses WHERE is_active = TRUE")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count houses", e)
            })?;

        let houses = sqlx::query_as::<_, House>(
            "SELECT * FROM houses WHERE is_active = TRUE \
             ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list houses", e))?;

        Ok(PageResponse::new(
            houses,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new house.
    pub async fn create(&self, data: &CreateHouse) -> AppResult<House> {
        sqlx::query_as::<_, House>(
            "INSERT INTO houses (area_id, owner_id, house_number, street_address) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.area_id)
        .bind(data.owner_id)
        .bind(&data.house_number)
        .bind(&data.street_address)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create house", e))
    }

    /// Delete a house. Rooms and their booking records cascade.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM houses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete house", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Create a new residential area.
    pub async fn create_area(&self, data: &CreateArea) -> AppResult<ResidentialArea> {
        sqlx::query_as::<_, ResidentialArea>(
            "INSERT INTO residential_areas (name, description) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create area", e))
    }

    /// List all residential areas by name.
    pub async fn find_areas(&self) -> AppResult<Vec<ResidentialArea>> {
        sqlx::query_as::<_, ResidentialArea>("SELECT * FROM residential_areas ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list areas", e))
    }
}
