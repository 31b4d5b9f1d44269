//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use stayhub_service::verification::ReviewDecision;

/// Reserve a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReserveRequest {
    /// The room to hold.
    pub room_id: Uuid,
}

/// Cancel a booking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CancelBookingRequest {
    /// Optional cancellation reason.
    pub reason: Option<String>,
}

/// Send an inquiry about a house.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendInquiryRequest {
    /// The house the inquiry concerns.
    pub house_id: Uuid,
    /// Subject line.
    #[validate(length(min = 1, max = 200, message = "Subject must be 1-200 characters"))]
    pub subject: String,
    /// Message body.
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

/// Acknowledge an inquiry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerifyInquiryRequest {
    /// Optional owner response.
    pub response: Option<String>,
}

/// Record an uploaded payment proof.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecordProofRequest {
    /// Opaque reference returned by the storage collaborator.
    #[validate(length(min = 1, max = 300, message = "File reference is required"))]
    pub file_ref: String,
    /// Original filename for admin display.
    pub original_filename: Option<String>,
}

/// Review a pending payment proof.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewProofRequest {
    /// Accept or reject.
    pub decision: ReviewDecision,
    /// Optional reviewer comment.
    pub comment: Option<String>,
}

/// Toggle a student's admin verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleVerificationRequest {
    /// `true` grants a fresh window; `false` clears the verification.
    pub enable: bool,
}

/// Query parameters for house deletion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteHouseQuery {
    /// Cancel blocking bookings and delete anyway.
    #[serde(default)]
    pub force: bool,
}
