//! Inquiry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::InquiryStatus;

/// A student's message to a house owner about a listing.
///
/// Inquiries never touch room state; they are pure correspondence with a
/// small status lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Inquiry {
    /// Unique inquiry identifier.
    pub id: Uuid,
    /// The house the inquiry concerns.
    pub house_id: Uuid,
    /// The student who sent it.
    pub student_id: Uuid,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
    /// Current status.
    pub status: InquiryStatus,
    /// The owner's reply, if any.
    pub owner_response: Option<String>,
    /// When the owner responded.
    pub responded_at: Option<DateTime<Utc>>,
    /// When the inquiry was created.
    pub created_at: DateTime<Utc>,
    /// When the inquiry was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new inquiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInquiry {
    /// The house the inquiry concerns.
    pub house_id: Uuid,
    /// The student sending it.
    pub student_id: Uuid,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
}
