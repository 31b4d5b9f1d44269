//! Verification engine: email verification, payment-proof review, and the
//! time-limited admin verification window.
//!
//! The stored `admin_verified` flag is never trusted on its own — every
//! access query re-derives against the expiry timestamp. Accepting a new
//! proof restarts the window from the acceptance time; it is not cumulative
//! with whatever remained of the old one.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use stayhub_core::clock::Clock;
use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;
use stayhub_core::traits::Notifier;
use stayhub_core::types::pagination::{PageRequest, PageResponse};
use stayhub_database::repositories::{ProofRepository, UserRepository};
use stayhub_entity::proof::model::{CreateProof, PaymentProof};
use stayhub_entity::proof::status::ProofStatus;
use stayhub_entity::user::model::User;
use stayhub_entity::user::verification::VerificationStatus;

use crate::access::{AccessAction, AccessGateway};
use crate::context::RequestContext;

/// An admin's decision on a pending payment proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    /// Accept the proof and refresh the student's verification window.
    Accept,
    /// Reject the proof; verification state is untouched.
    Reject,
}

impl ReviewDecision {
    fn proof_status(self) -> ProofStatus {
        match self {
            Self::Accept => ProofStatus::Accepted,
            Self::Reject => ProofStatus::Rejected,
        }
    }
}

/// Tracks and mutates student verification state.
#[derive(Debug, Clone)]
pub struct VerificationService {
    users: Arc<UserRepository>,
    proofs: Arc<ProofRepository>,
    gateway: AccessGateway,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    window_days: i64,
}

impl VerificationService {
    /// Create a new verification service.
    pub fn new(
        users: Arc<UserRepository>,
        proofs: Arc<ProofRepository>,
        gateway: AccessGateway,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
        window_days: i64,
    ) -> Self {
        Self {
            users,
            proofs,
            gateway,
            notifier,
            clock,
            window_days,
        }
    }

    /// Mark a student's email as verified. Idempotent: repeat calls keep
    /// the original verification timestamp.
    pub async fn email_verify(&self, student_id: Uuid) -> AppResult<User> {
        let now = self.clock.now();
        if let Some(user) = self.users.mark_email_verified(student_id, now).await? {
            info!(%student_id, "Email verified");
            return Ok(user);
        }

        // Zero rows: either already verified (fine) or unknown.
        self.users
            .find_by_id(student_id)
            .await?
            .ok_or_else(|| AppError::not_found("Student not found"))
    }

    /// Record an uploaded payment proof.
    ///
    /// The file itself was already stored by the storage collaborator;
    /// `file_ref` is its opaque reference. Requires a verified email only —
    /// this is how an unverified student becomes verified.
    pub async fn record_proof(
        &self,
        ctx: &RequestContext,
        file_ref: String,
        original_filename: Option<String>,
    ) -> AppResult<PaymentProof> {
        if !ctx.is_student() {
            return Err(AppError::forbidden("Only students upload payment proofs"));
        }
        self.gateway
            .require(ctx.user_id, AccessAction::UploadProof)
            .await?;

        let proof = self
            .proofs
            .create(&CreateProof {
                student_id: ctx.user_id,
                file_ref,
                original_filename,
            })
            .await?;

        info!(proof_id = %proof.id, student_id = %ctx.user_id, "Payment proof recorded");
        Ok(proof)
    }

    /// Review a pending proof. Reviewed proofs are terminal; a second
    /// review fails with a conflict.
    ///
    /// Acceptance grants (or refreshes) the student's admin verification
    /// for a fresh window starting now. The notifier is invoked
    /// fire-and-forget; its failure never rolls back the review.
    pub async fn review_proof(
        &self,
        ctx: &RequestContext,
        proof_id: Uuid,
        decision: ReviewDecision,
        comment: Option<&str>,
    ) -> AppResult<PaymentProof> {
        if !ctx.is_admin() {
            return Err(AppError::forbidden("Only admins review payment proofs"));
        }

        let now = self.clock.now();
        let reviewed = self
            .proofs
            .review(proof_id, decision.proof_status(), ctx.user_id, comment, now)
            .await?;

        let Some(proof) = reviewed else {
            return match self.proofs.find_by_id(proof_id).await? {
                Some(existing) => Err(AppError::conflict(format!(
                    "Proof was already reviewed ({})",
                    existing.status
                ))),
                None => Err(AppError::not_found("Payment proof not found")),
            };
        };

        if decision == ReviewDecision::Accept {
            let expires_at = now + Duration::days(self.window_days);
            self.users
                .grant_admin_verification(proof.student_id, now, expires_at)
                .await?
                .ok_or_else(|| AppError::not_found("Student not found"))?;
            info!(
                student_id = %proof.student_id,
                %expires_at,
                "Admin verification granted"
            );
        }

        if let Err(e) = self
            .notifier
            .proof_reviewed(proof.student_id, decision == ReviewDecision::Accept)
            .await
        {
            warn!(proof_id = %proof.id, error = %e, "Review notification failed");
        }

        Ok(proof)
    }

    /// Manual override for operational correction.
    ///
    /// Enabling grants a fresh window from now; disabling clears the flag
    /// *and* both timestamps, so no stale future date can grant access.
    pub async fn toggle_admin_verification(
        &self,
        ctx: &RequestContext,
        student_id: Uuid,
        enable: bool,
    ) -> AppResult<User> {
        if !ctx.is_admin() {
            return Err(AppError::forbidden("Only admins toggle verification"));
        }

        let now = self.clock.now();
        let updated = if enable {
            let expires_at = now + Duration::days(self.window_days);
            self.users
                .grant_admin_verification(student_id, now, expires_at)
                .await?
        } else {
            self.users.clear_admin_verification(student_id, now).await?
        };

        let user = updated.ok_or_else(|| AppError::not_found("Student not found"))?;
        info!(%student_id, enable, by = %ctx.user_id, "Admin verification toggled");
        Ok(user)
    }

    /// The single source of truth for full access, derived at read time.
    pub async fn is_access_granted(&self, student_id: Uuid, now: DateTime<Utc>) -> AppResult<bool> {
        let status = self.access_snapshot(student_id).await?;
        Ok(status.is_access_granted(now))
    }

    /// Snapshot of a student's verification state, including the
    /// changed-since `version` token.
    pub async fn access_snapshot(&self, student_id: Uuid) -> AppResult<VerificationStatus> {
        let user = self
            .users
            .find_by_id(student_id)
            .await?
            .ok_or_else(|| AppError::not_found("Student not found"))?;
        Ok(user.verification_status())
    }

    /// List pending proofs for the admin review queue.
    pub async fn pending_proofs(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> AppResult<PageResponse<PaymentProof>> {
        if !ctx.is_admin() {
            return Err(AppError::forbidden("Only admins view the review queue"));
        }
        self.proofs.find_pending(page).await
    }

    /// List the calling student's proofs.
    pub async fn my_proofs(&self, ctx: &RequestContext) -> AppResult<Vec<PaymentProof>> {
        self.proofs.find_by_student(ctx.user_id).await
    }

    /// Students whose stored flag still reads verified but whose window has
    /// lapsed as of `now`. Reporting only — access derivation never waits
    /// for this.
    pub async fn lapsed_verifications(&self, now: DateTime<Utc>) -> AppResult<Vec<User>> {
        self.users.find_lapsed_verifications(now).await
    }
}
