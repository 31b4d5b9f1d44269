//! Student verification status value object.
//!
//! Access is never read off a cached boolean: `admin_verified` is only
//! meaningful together with its expiry timestamp, and every query re-derives
//! the answer against "now". The original system mutated a flag from a
//! timer; deriving at read time removes the scheduler from the correctness
//! path entirely.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a student's verification state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationStatus {
    /// Whether the email address has been verified.
    pub email_verified: bool,
    /// When the email was verified.
    pub email_verified_at: Option<DateTime<Utc>>,
    /// Whether an admin has accepted a payment proof.
    pub admin_verified: bool,
    /// When the admin verification was last granted.
    pub admin_verified_at: Option<DateTime<Utc>>,
    /// When the admin verification lapses.
    pub admin_verified_expires_at: Option<DateTime<Utc>>,
    /// Changed-since token; bumped on every verification write.
    pub version: i64,
}

impl VerificationStatus {
    /// Whether the admin verification is currently in force.
    ///
    /// True only while the stored flag is set *and* the expiry lies strictly
    /// in the future. A set flag with a lapsed (or missing) expiry counts as
    /// not verified without requiring any write.
    pub fn is_admin_verified(&self, now: DateTime<Utc>) -> bool {
        self.admin_verified
            && self
                .admin_verified_expires_at
                .is_some_and(|expires| expires > now)
    }

    /// The single source of truth for full access.
    pub fn is_access_granted(&self, now: DateTime<Utc>) -> bool {
        self.email_verified && self.is_admin_verified(now)
    }

    /// Whether a previously granted verification has lapsed.
    pub fn has_lapsed(&self, now: DateTime<Utc>) -> bool {
        self.admin_verified && !self.is_admin_verified(now)
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
    fn test_access_requires_both_verifications() {
        let now = Utc::now();
        assert!(status(true, true, Some(Duration::days(30))).is_access_granted(now));
        assert!(!status(false, true, Some(Duration::days(30))).is_access_granted(now));
        assert!(!status(true, false, None).is_access_granted(now));
    }

    #[test]
    fn test_access_denied_the_instant_expiry_passes() {
        let now = Utc::now();
        let st = status(true, true, Some(Duration::days(30)));
        let expiry = st.admin_verified_expires_at.unwrap();

        assert!(st.is_access_granted(expiry - Duration::seconds(1)));
        // Boundary: expiry itself is already outside the window.
        assert!(!st.is_access_granted(expiry));
        assert!(!st.is_access_granted(expiry + Duration::seconds(1)));
        assert!(st.is_access_granted(now));
    }

    #[test]
    fn test_set_flag_with_missing_expiry_is_not_verified() {
        let now = Utc::now();
        let st = status(true, true, None);
        assert!(!st.is_admin_verified(now));
        assert!(!st.is_access_granted(now));
    }

    #[test]
    fn test_has_lapsed_only_after_a_grant() {
        let now = Utc::now();
        assert!(status(true, true, Some(Duration::days(-1))).has_lapsed(now));
        assert!(!status(true, true, Some(Duration::days(1))).has_lapsed(now));
        assert!(!status(true, false, None).has_lapsed(now));
    }
}
