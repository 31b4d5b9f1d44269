//! Payment proof repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_core::types::pagination::{PageRequest, PageResponse};
use stayhub_entity::proof::model::{CreateProof, PaymentProof};
use stayhub_entity::proof::status::ProofStatus;

/// Repository for payment proof rows.
#[derive(Debug, Clone)]
pub struct ProofRepository {
    pool: PgPool,
}

impl ProofRepository {
    /// Create a new proof repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a proof by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<PaymentProof>> {
        sqlx::query_as::<_, PaymentProof>("SELECT * FROM payment_proofs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find proof", e))
    }

    /// List a student's proofs, newest first.
    pub async fn find_by_student(&self, student_id: Uuid) -> AppResult<Vec<PaymentProof>> {
        sqlx::query_as::<_, PaymentProof>(
            "SELECT * FROM payment_proofs WHERE student_id = $1 ORDER BY uploaded_at DESC",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list proofs", e))
    }

    /// List pending proofs for the admin review queue, oldest first.
    pub async fn find_pending(&self, page: &PageRequest) -> AppResult<PageResponse<PaymentProof>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM payment_proofs WHERE status = 'pending'")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count pending proofs", e)
                })?;

        let proofs = sqlx::query_as::<_, PaymentProof>(
            "SELECT * FROM payment_proofs WHERE status = 'pending' \
             ORDER BY uploaded_at LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list pending proofs", e)
        })?;

        Ok(PageResponse::new(
            proofs,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Record a newly uploaded proof.
    pub async fn create(&self, data: &CreateProof) -> AppResult<PaymentProof> {
        sqlx::query_as::<_, PaymentProof>(
            "INSERT INTO payment_proofs (student_id, file_ref, original_filename) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.student_id)
        .bind(&data.file_ref)
        .bind(&data.original_filename)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create proof", e))
    }

    /// Atomically record a review decision on a pending proof.
    ///
    /// Returns `None` if the proof was already reviewed — reviewed proofs
    /// are terminal.
    pub async fn review(
        &self,
        id: Uuid,
        decision: ProofStatus,
        reviewed_by: Uuid,
        comment: Option<&str>,
        now: DateTime<Utc>,
    ) -> AppResult<Option<PaymentProof>> {
        sqlx::query_as::<_, PaymentProof>(
            "UPDATE payment_proofs SET status = $2, reviewed_by = $3, reviewer_comment = $4, \
             reviewed_at = $5 WHERE id = $1 AND status = 'pending' RETURNING *",
        )
        .bind(id)
        .bind(decision)
        .bind(reviewed_by)
        .bind(comment)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to review proof", e))
    }
}
