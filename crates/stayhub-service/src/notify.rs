//! Logging notifier.
//!
//! Delivery mechanics are out of scope for the core, so the default
//! [`Notifier`] implementation records events through `tracing`. A real
//! deployment swaps in an SMTP- or provider-backed implementation behind
//! the same trait.

use async_trait::async_trait;
use uuid::Uuid;

use stayhub_core::result::AppResult;
use stayhub_core::traits::Notifier;

/// Notifier that logs every event instead of delivering it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn proof_reviewed(&self, student_id: Uuid, accepted: bool) -> AppResult<()> {
        tracing::info!(%student_id, accepted, "notify: payment proof reviewed");
        Ok(())
    }

    async fn email_verification_requested(&self, student_id: Uuid, email: &str) -> AppResult<()> {
        tracing::info!(%student_id, email, "notify: email verification requested");
        Ok(())
    }

    async fn reservation_expired(&self, student_id: Uuid, booking_id: Uuid) -> AppResult<()> {
        tracing::info!(%student_id, %booking_id, "notify: reservation expired");
        Ok(())
    }
}
