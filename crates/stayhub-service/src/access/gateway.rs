//! Access gateway: composes verification state into allow/deny decisions.
//!
//! This is the only place deny reasons are decided; callers (and the API
//! layer) map them verbatim to user-facing messages. The decision itself is
//! a pure function of `(action, verification status, now)` so the gating
//! matrix can be tested without a database.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stayhub_core::clock::Clock;
use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;
use stayhub_database::repositories::UserRepository;
use stayhub_entity::user::VerificationStatus;

/// A gated student-facing action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessAction {
    /// Browse protected listings.
    BrowseListings,
    /// Place a hold on a room.
    Reserve,
    /// Convert a hold into a confirmed booking.
    ConfirmBooking,
    /// Send an inquiry to a house owner.
    SendInquiry,
    /// Upload a payment proof for review.
    UploadProof,
}

impl AccessAction {
    /// Whether the action requires the full (admin-verified) tier.
    ///
    /// Uploading a proof is how a student *becomes* verified, so it only
    /// requires a verified email.
    pub fn requires_full_access(&self) -> bool {
        !matches!(self, Self::UploadProof)
    }
}

/// Why an action was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// The student has not verified their email address.
    EmailNotVerified,
    /// No payment proof has been accepted yet.
    PendingAdminVerification,
    /// The 30-day verification window has lapsed.
    SubscriptionExpired,
}

impl DenyReason {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmailNotVerified => "EMAIL_NOT_VERIFIED",
            Self::PendingAdminVerification => "PENDING_ADMIN_VERIFICATION",
            Self::SubscriptionExpired => "SUBSCRIPTION_EXPIRED",
        }
    }

    /// User-facing message, shown verbatim by the presentation layer.
    pub fn message(&self) -> &'static str {
        match self {
            Self::EmailNotVerified => "Please verify your email address to continue",
            Self::PendingAdminVerification => {
                "Your payment proof is awaiting review. Full access unlocks once it is accepted"
            }
            Self::SubscriptionExpired => {
                "Your verification has expired. Upload a new payment proof to regain access"
            }
        }
    }
}

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum AccessDecision {
    /// The action may proceed.
    Allow,
    /// The action is denied for the given reason.
    Deny {
        /// Why access was denied.
        reason: DenyReason,
    },
}

impl AccessDecision {
    /// Whether the decision allows the action.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Pure gating decision.
pub fn decide(
    action: AccessAction,
    status: &VerificationStatus,
    now: DateTime<Utc>,
) -> AccessDecision {
    if !status.email_verified {
        return AccessDecision::Deny {
            reason: DenyReason::EmailNotVerified,
        };
    }

    if !action.requires_full_access() {
        return AccessDecision::Allow;
    }

    if status.is_admin_verified(now) {
        AccessDecision::Allow
    } else if status.has_lapsed(now) {
        AccessDecision::Deny {
            reason: DenyReason::SubscriptionExpired,
        }
    } else {
        AccessDecision::Deny {
            reason: DenyReason::PendingAdminVerification,
        }
    }
}

/// The boundary the API layer (and the reservation engine) call before any
/// gated operation.
#[derive(Debug, Clone)]
pub struct AccessGateway {
    users: Arc<UserRepository>,
    clock: Arc<dyn Clock>,
}

impl AccessGateway {
    /// Create a new access gateway.
    pub fn new(users: Arc<UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { users, clock }
    }

    /// Authorize `student_id` for `action`.
    pub async fn authorize(
        &self,
        student_id: Uuid,
        action: AccessAction,
    ) -> AppResult<AccessDecision> {
        let user = self
            .users
            .find_by_id(student_id)
            .await?
            .ok_or_else(|| AppError::not_found("Student not found"))?;

        Ok(decide(
            action,
            &user.verification_status(),
            self.clock.now(),
        ))
    }

    /// Authorize and convert a denial into a typed error.
    pub async fn require(&self, student_id: Uuid, action: AccessAction) -> AppResult<()> {
        match self.authorize(student_id, action).await? {
            AccessDecision::Allow => Ok(()),
            AccessDecision::Deny { reason } => Err(deny_to_error(reason)),
        }
    }
}

/// Map a deny reason onto the error taxonomy.
fn deny_to_error(reason: DenyReason) -> AppError {
    match reason {
        DenyReason::SubscriptionExpired => AppError::expired(reason.message()),
        DenyReason::EmailNotVerified | DenyReason::PendingAdminVerification => {
            AppError::forbidden(reason.message())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn status(email: bool, admin: bool, expires_in: Option<Duration>) -> VerificationStatus {
        let now = Utc::now();
        VerificationStatus {
            email_verified: email,
            email_verified_at: email.then_some(now),
            admin_verified: admin,
            admin_verified_at: admin.then_some(now),
            admin_verified_expires_at: expires_in.map(|d| now + d),
            version: 1,
        }
    }

    #[test]
    fn test_unverified_email_denies_everything() {
        let st = status(false, false, None);
        let now = Utc::now();
        for action in [
            AccessAction::BrowseListings,
            AccessAction::Reserve,
            AccessAction::ConfirmBooking,
            AccessAction::SendInquiry,
            AccessAction::UploadProof,
        ] {
            assert_eq!(
                decide(action, &st, now),
                AccessDecision::Deny {
                    reason: DenyReason::EmailNotVerified
                }
            );
        }
    }

    #[test]
    fn test_email_only_tier_allows_proof_upload() {
        let st = status(true, false, None);
        let now = Utc::now();

        assert!(decide(AccessAction::UploadProof, &st, now).is_allowed());
        assert_eq!(
            decide(AccessAction::Reserve, &st, now),
            AccessDecision::Deny {
                reason: DenyReason::PendingAdminVerification
            }
        );
    }

    #[test]
    fn test_full_access_within_window() {
        let st = status(true, true, Some(Duration::days(30)));
        let now = Utc::now();

        for action in [
            AccessAction::BrowseListings,
            AccessAction::Reserve,
            AccessAction::ConfirmBooking,
            AccessAction::SendInquiry,
        ] {
            assert!(decide(action, &st, now).is_allowed());
        }
    }

    #[test]
    fn test_lapsed_window_reports_subscription_expired() {
        let st = status(true, true, Some(Duration::days(30)));
        let expiry = st.admin_verified_expires_at.unwrap();

        assert!(decide(AccessAction::Reserve, &st, expiry - Duration::seconds(1)).is_allowed());
        assert_eq!(
            decide(AccessAction::Reserve, &st, expiry),
            AccessDecision::Deny {
                reason: DenyReason::SubscriptionExpired
            }
        );
        // The email-only tier is unaffected by the lapse.
        assert!(decide(AccessAction::UploadProof, &st, expiry).is_allowed());
    }

    #[test]
    fn test_cleared_verification_is_pending_not_expired() {
        let st = status(true, false, None);
        assert_eq!(
            decide(AccessAction::BrowseListings, &st, Utc::now()),
            AccessDecision::Deny {
                reason: DenyReason::PendingAdminVerification
            }
        );
    }

    #[test]
    fn test_deny_error_mapping() {
        use stayhub_core::ErrorKind;

        assert!(deny_to_error(DenyReason::SubscriptionExpired).is_kind(ErrorKind::Expired));
        assert!(deny_to_error(DenyReason::EmailNotVerified).is_kind(ErrorKind::Forbidden));
        assert!(
            deny_to_error(DenyReason::PendingAdminVerification).is_kind(ErrorKind::Forbidden)
        );
    }
}
