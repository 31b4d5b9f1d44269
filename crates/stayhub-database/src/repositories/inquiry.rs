//! Inquiry repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_entity::inquiry::model::{CreateInquiry, Inquiry};

/// Repository for inquiry rows.
#[derive(Debug, Clone)]
pub struct InquiryRepository {
    pool: PgPool,
}

impl InquiryRepository {
    /// Create a new inquiry repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an inquiry by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Inquiry>> {
        sqlx::query_as::<_, Inquiry>("SELECT * FROM inquiries WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find inquiry", e))
    }

    /// List inquiries for a house, newest first.
    pub async fn find_by_house(&self, house_id: Uuid) -> AppResult<Vec<Inquiry>> {
        sqlx::query_as::<_, Inquiry>(
            "SELECT * FROM inquiries WHERE house_id = $1 ORDER BY created_at DESC",
        )
        .bind(house_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list inquiries", e))
    }

    /// List a student's inquiries, newest first.
    pub async fn find_by_student(&self, student_id: Uuid) -> AppResult<Vec<Inquiry>> {
        sqlx::query_as::<_, Inquiry>(
            "SELECT * FROM inquiries WHERE student_id = $1 ORDER BY created_at DESC",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list inquiries", e))
    }

    /// Create a new inquiry.
    pub async fn create(&self, data: &CreateInquiry) -> AppResult<Inquiry> {
        sqlx::query_as::<_, Inquiry>(
            "INSERT INTO inquiries (house_id, student_id, subject, message) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.house_id)
        .bind(data.student_id)
        .bind(&data.subject)
        .bind(&data.message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create inquiry", e))
    }

    /// Atomically transition `pending -> verified`, recording the response.
    ///
    /// Returns `None` if the inquiry was already terminal.
    pub async fn verify(
        &self,
        id: Uuid,
        response: Option<&str>,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Inquiry>> {
        sqlx::query_as::<_, Inquiry>(
            "UPDATE inquiries SET status = 'verified', owner_response = $2, responded_at = $3, \
             updated_at = $3 WHERE id = $1 AND status = 'pending' RETURNING *",
        )
        .bind(id)
        .bind(response)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to verify inquiry", e))
    }

    /// Atomically transition `pending -> cancelled`.
    ///
    /// Returns `None` if the inquiry was already terminal.
    pub async fn cancel(&self, id: Uuid, now: DateTime<Utc>) -> AppResult<Option<Inquiry>> {
        sqlx::query_as::<_, Inquiry>(
            "UPDATE inquiries SET status = 'cancelled', updated_at = $2 \
             WHERE id = $1 AND status = 'pending' RETURNING *",
        )
        .bind(id)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to cancel inquiry", e))
    }
}
