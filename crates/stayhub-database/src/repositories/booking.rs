//! Booking repository implementation.
//!
//! Every status transition is guarded on the current status (and, for
//! confirmation, on the hold deadline) in a single UPDATE so that racing
//! confirm/cancel/sweep calls resolve to exactly one winner per booking.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_core::types::pagination::{PageRequest, PageResponse};
use stayhub_entity::booking::model::{Booking, CreateBooking};

/// Repository for booking rows and their lifecycle transitions.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a booking by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find booking", e))
    }

    /// List a student's bookings, newest first.
    pub async fn find_by_student(
        &self,
        student_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Booking>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE student_id = $1")
                .bind(student_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count bookings", e)
                })?;

        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE student_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(student_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list bookings", e))?;

        Ok(PageResponse::new(
            bookings,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List active (`reserved` or `confirmed`) bookings across a house.
    pub async fn find_active_by_house(&self, house_id: Uuid) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE house_id = $1 AND status IN ('reserved', 'confirmed') \
             ORDER BY created_at",
        )
        .bind(house_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list active bookings", e)
        })
    }

    /// Create a new hold.
    pub async fn create(&self, data: &CreateBooking) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (room_id, house_id, student_id, status, expires_at) \
             VALUES ($1, $2, $3, 'reserved', $4) RETURNING *",
        )
        .bind(data.room_id)
        .bind(data.house_id)
        .bind(data.student_id)
        .bind(data.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create booking", e))
    }

    /// Atomically transition `reserved -> confirmed`, guarded on the hold
    /// still being live at `now`.
    ///
    /// Returns `None` if the booking was not `reserved` or its deadline had
    /// passed — the caller re-reads to tell the two apart.
    pub async fn confirm(&self, id: Uuid, now: DateTime<Utc>) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = 'confirmed', expires_at = NULL, paid = TRUE, \
             confirmed_at = $2, version = version + 1, updated_at = $2 \
             WHERE id = $1 AND status = 'reserved' AND expires_at > $2 RETURNING *",
        )
        .bind(id)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to confirm booking", e))
    }

    /// Atomically transition `reserved | confirmed -> cancelled`.
    ///
    /// Returns `None` if the booking was already terminal.
    pub async fn cancel(
        &self,
        id: Uuid,
        cancelled_by: Uuid,
        reason: Option<&str>,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = 'cancelled', expires_at = NULL, cancelled_at = $2, \
             cancelled_by = $3, cancellation_reason = $4, version = version + 1, updated_at = $2 \
             WHERE id = $1 AND status IN ('reserved', 'confirmed') RETURNING *",
        )
        .bind(id)
        .bind(now)
        .bind(cancelled_by)
        .bind(reason)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to cancel booking", e))
    }

    /// Atomically transition one lapsed hold to `expired`.
    ///
    /// Used by the lazy-expiry path when a confirm arrives after the
    /// deadline but before the sweep has run.
    pub async fn expire(&self, id: Uuid, now: DateTime<Utc>) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = 'expired', version = version + 1, updated_at = $2 \
             WHERE id = $1 AND status = 'reserved' AND expires_at <= $2 RETURNING *",
        )
        .bind(id)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to expire booking", e))
    }

    /// Transition every lapsed hold to `expired` in one statement.
    ///
    /// The status guard makes this safe to race with confirm/cancel: a
    /// booking that lost its `reserved` status in the meantime simply does
    /// not match.
    pub async fn sweep_expired(&self, now: DateTime<Utc>) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = 'expired', version = version + 1, updated_at = $1 \
             WHERE status = 'reserved' AND expires_at <= $1 RETURNING *",
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to sweep expired bookings", e)
        })
    }
}
