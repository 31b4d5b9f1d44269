//! User repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_entity::user::model::{CreateUser, User};

/// Repository for user rows and verification-field updates.
///
/// Every verification write bumps `verification_version`, the changed-since
/// token clients poll instead of re-fetching whole profiles.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user", e))
    }

    /// Find a user by email.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// Create a new user.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, full_name, phone_number, role) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&data.email)
        .bind(&data.full_name)
        .bind(&data.phone_number)
        .bind(data.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create user", e))
    }

    /// Mark a user's email as verified.
    ///
    /// Guarded on `email_verified = FALSE` so repeat calls match zero rows
    /// and leave the original verification timestamp (and version) intact.
    pub async fn mark_email_verified(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET email_verified = TRUE, email_verified_at = $2, \
             verification_version = verification_version + 1, updated_at = $2 \
             WHERE id = $1 AND email_verified = FALSE RETURNING *",
        )
        .bind(id)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark email verified", e)
        })
    }

    /// Grant (or refresh) admin verification with a fresh expiry window.
    pub async fn grant_admin_verification(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET admin_verified = TRUE, admin_verified_at = $2, \
             admin_verified_expires_at = $3, \
             verification_version = verification_version + 1, updated_at = $2 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(now)
        .bind(expires_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to grant admin verification", e)
        })
    }

    /// Clear admin verification entirely.
    ///
    /// All three fields are cleared together so a stale future expiry can
    /// never resurrect access.
    pub async fn clear_admin_verification(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET admin_verified = FALSE, admin_verified_at = NULL, \
             admin_verified_expires_at = NULL, \
             verification_version = verification_version + 1, updated_at = $2 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to clear admin verification", e)
        })
    }

    /// List students whose admin verification has lapsed as of `now` but
    /// whose stored flag still reads verified. Reporting only — access
    /// derivation never consults this.
    pub async fn find_lapsed_verifications(&self, now: DateTime<Utc>) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE admin_verified = TRUE \
             AND (admin_verified_expires_at IS NULL OR admin_verified_expires_at <= $1) \
             ORDER BY admin_verified_expires_at",
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list lapsed verifications", e)
        })
    }
}
