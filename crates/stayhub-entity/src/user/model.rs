//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;
use super::verification::VerificationStatus;

/// A registered user: student, house owner, or administrator.
///
/// Credentials live with the identity layer; this row carries profile and
/// verification state only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Email address (unique).
    pub email: String,
    /// Full name.
    pub full_name: String,
    /// Contact phone number.
    pub phone_number: String,
    /// User role.
    pub role: UserRole,
    /// Whether the account is active.
    pub is_active: bool,

    // -- Email verification --
    /// Whether the email address has been verified.
    pub email_verified: bool,
    /// When the email was verified.
    pub email_verified_at: Option<DateTime<Utc>>,

    // -- Admin verification (payment reviewed & approved) --
    /// Whether an admin has verified the student's payment.
    pub admin_verified: bool,
    /// When the admin verification was last granted.
    pub admin_verified_at: Option<DateTime<Utc>>,
    /// When the admin verification lapses (grant time + window).
    pub admin_verified_expires_at: Option<DateTime<Utc>>,
    /// Monotonic counter bumped on every verification change.
    ///
    /// Serves as a changed-since token: clients compare it against the last
    /// value they saw instead of re-fetching the whole profile on a timer.
    pub verification_version: i64,

    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Check if this user is a student.
    pub fn is_student(&self) -> bool {
        self.role == UserRole::Student
    }

    /// Snapshot the verification fields into a [`VerificationStatus`].
    pub fn verification_status(&self) -> VerificationStatus {
        VerificationStatus {
            email_verified: self.email_verified,
            email_verified_at: self.email_verified_at,
            admin_verified: self.admin_verified,
            admin_verified_at: self.admin_verified_at,
            admin_verified_expires_at: self.admin_verified_expires_at,
            version: self.verification_version,
        }
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Email address.
    pub email: String,
    /// Full name.
    pub full_name: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Role.
    pub role: UserRole,
}
