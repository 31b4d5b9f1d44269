//! Inquiry status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a student's inquiry to a house owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "inquiry_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    /// Awaiting the owner's attention.
    Pending,
    /// Acknowledged by the owner.
    Verified,
    /// Withdrawn by the student or dismissed by the owner.
    Cancelled,
}

impl InquiryStatus {
    /// Check if the inquiry is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Verified | Self::Cancelled)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InquiryStatus {
    type Err = stayhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "verified" => Ok(Self::Verified),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(stayhub_core::AppError::validation(format!(
                "Invalid inquiry status: '{s}'. Expected one of: pending, verified, cancelled"
            ))),
        }
    }
}
