//! Payment proof entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::ProofStatus;

/// An uploaded proof-of-payment record.
///
/// The file itself lives with the storage collaborator; `file_ref` is the
/// opaque reference it returned. The core never touches file bytes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PaymentProof {
    /// Unique proof identifier.
    pub id: Uuid,
    /// The student who uploaded it.
    pub student_id: Uuid,
    /// Opaque storage reference.
    pub file_ref: String,
    /// Original filename as uploaded, for admin display.
    pub original_filename: Option<String>,
    /// Review status.
    pub status: ProofStatus,
    /// The admin who reviewed it.
    pub reviewed_by: Option<Uuid>,
    /// Free-text reviewer comment.
    pub reviewer_comment: Option<String>,
    /// When the proof was uploaded.
    pub uploaded_at: DateTime<Utc>,
    /// When the proof was reviewed.
    pub reviewed_at: Option<DateTime<Utc>>,
}

/// Data required to record a newly uploaded proof.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProof {
    /// The uploading student.
    pub student_id: Uuid,
    /// Opaque storage reference.
    pub file_ref: String,
    /// Original filename.
    pub original_filename: Option<String>,
}
