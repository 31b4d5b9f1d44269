//! Room repository implementation.
//!
//! State transitions are single-statement compare-and-swap updates guarded
//! on the current state. A zero-row result means the guard failed (or the
//! room does not exist); callers disambiguate with a follow-up read.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_entity::room::model::{CreateRoom, Room};

/// Repository for room rows and their occupancy-state transitions.
#[derive(Debug, Clone)]
pub struct RoomRepository {
    pool: PgPool,
}

impl RoomRepository {
    /// Create a new room repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a room by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find room", e))
    }

    /// List all rooms in a house.
    pub async fn find_by_house(&self, house_id: Uuid) -> AppResult<Vec<Room>> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE house_id = $1 ORDER BY room_number")
            .bind(house_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list rooms", e))
    }

    /// Create a new room.
    pub async fn create(&self, data: &CreateRoom) -> AppResult<Room> {
        sqlx::query_as::<_, Room>(
            "INSERT INTO rooms (house_id, room_number, capacity, price_per_month) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.house_id)
        .bind(&data.room_number)
        .bind(data.capacity)
        .bind(data.price_per_month)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create room", e))
    }

    /// Atomically transition `available -> reserved`.
    ///
    /// Returns the updated row, or `None` if the room was not available
    /// (or does not exist). Exactly one of two concurrent callers can
    /// receive `Some`.
    pub async fn try_reserve(&self, id: Uuid, now: DateTime<Utc>) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, Room>(
            "UPDATE rooms SET state = 'reserved', version = version + 1, updated_at = $2 \
             WHERE id = $1 AND state = 'available' RETURNING *",
        )
        .bind(id)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to reserve room", e))
    }

    /// Atomically transition `reserved -> occupied`.
    ///
    /// Returns `None` if the room was not in `reserved` state.
    pub async fn confirm_occupancy(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, Room>(
            "UPDATE rooms SET state = 'occupied', version = version + 1, updated_at = $2 \
             WHERE id = $1 AND state = 'reserved' RETURNING *",
        )
        .bind(id)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to confirm room occupancy", e)
        })
    }

    /// Transition `reserved | occupied -> available`.
    ///
    /// Idempotent: releasing an already-available room matches zero rows
    /// and is not an error.
    pub async fn release(&self, id: Uuid, now: DateTime<Utc>) -> AppResult<()> {
        sqlx::query(
            "UPDATE rooms SET state = 'available', version = version + 1, updated_at = $2 \
             WHERE id = $1 AND state IN ('reserved', 'occupied')",
        )
        .bind(id)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to release room", e))?;
        Ok(())
    }

    /// Delete all rooms belonging to a house.
    pub async fn delete_by_house(&self, house_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM rooms WHERE house_id = $1")
            .bind(house_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete rooms", e))?;
        Ok(result.rows_affected())
    }
}
