//! Payment proof status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Review status of an uploaded payment proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "proof_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProofStatus {
    /// Awaiting admin review.
    Pending,
    /// Accepted; granted (or refreshed) the student's verification window.
    Accepted,
    /// Rejected; verification state untouched.
    Rejected,
}

impl ProofStatus {
    /// Check if the proof has been reviewed. Reviewed proofs are terminal.
    pub fn is_reviewed(&self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ProofStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProofStatus {
    type Err = stayhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            _ => Err(stayhub_core::AppError::validation(format!(
                "Invalid proof status: '{s}'. Expected one of: pending, accepted, rejected"
            ))),
        }
    }
}
