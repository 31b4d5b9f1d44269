//! Outbound notification seam.
//!
//! Delivery mechanics (SMTP, provider APIs) live outside the core. The core
//! invokes these hooks fire-and-forget: a delivery failure is logged by the
//! caller and never rolls back the state change that triggered it.

use async_trait::async_trait;
use uuid::Uuid;

use crate::result::AppResult;

/// Receives notification events emitted by the core services.
#[async_trait]
pub trait Notifier: Send + Sync + std::fmt::Debug {
    /// A student's payment proof was reviewed.
    async fn proof_reviewed(&self, student_id: Uuid, accepted: bool) -> AppResult<()>;

    /// An email-verification token was created for a student.
    async fn email_verification_requested(&self, student_id: Uuid, email: &str) -> AppResult<()>;

    /// A reservation hold lapsed without confirmation.
    async fn reservation_expired(&self, student_id: Uuid, booking_id: Uuid) -> AppResult<()>;
}
