//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stayhub_entity::booking::model::{Booking, BookingState};
use stayhub_entity::user::VerificationStatus;
use stayhub_service::access::{AccessDecision, DenyReason};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Plain message payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

/// Booking summary with its tagged lifecycle state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    /// Booking ID.
    pub id: Uuid,
    /// Room ID.
    pub room_id: Uuid,
    /// House ID.
    pub house_id: Uuid,
    /// Student ID.
    pub student_id: Uuid,
    /// Tagged lifecycle state (carries the deadline only on holds).
    pub state: BookingState,
    /// Whether payment has been recorded.
    pub paid: bool,
    /// When the booking was created.
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            room_id: booking.room_id,
            house_id: booking.house_id,
            student_id: booking.student_id,
            state: booking.state(),
            paid: booking.paid,
            created_at: booking.created_at,
        }
    }
}

/// Access decision and verification snapshot for a student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessStatusResponse {
    /// Whether full access is currently granted.
    pub access_granted: bool,
    /// Machine-readable deny code, when not granted.
    pub deny_code: Option<String>,
    /// User-facing deny message, when not granted.
    pub deny_message: Option<String>,
    /// Whether the email is verified.
    pub email_verified: bool,
    /// Whether the verification window is currently in force.
    pub admin_verified: bool,
    /// When the window lapses.
    pub admin_verified_expires_at: Option<DateTime<Utc>>,
    /// Changed-since token; compare against the last seen value instead of
    /// polling the whole profile.
    pub version: i64,
}

impl AccessStatusResponse {
    /// Build from a gateway decision and the underlying snapshot.
    pub fn new(
        decision: AccessDecision,
        status: VerificationStatus,
        now: DateTime<Utc>,
    ) -> Self {
        let deny = match decision {
            AccessDecision::Allow => None,
            AccessDecision::Deny { reason } => Some(reason),
        };
        Self {
            access_granted: decision.is_allowed(),
            deny_code: deny.map(|r: DenyReason| r.code().to_string()),
            deny_message: deny.map(|r| r.message().to_string()),
            email_verified: status.email_verified,
            admin_verified: status.is_admin_verified(now),
            admin_verified_expires_at: status.admin_verified_expires_at,
            version: status.version,
        }
    }
}

/// Result of a manual sweep trigger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepResponse {
    /// How many holds were expired.
    pub expired_count: usize,
    /// The expired booking IDs.
    pub booking_ids: Vec<Uuid>,
}

/// Active bookings blocking a house deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteImpactResponse {
    /// House ID.
    pub house_id: Uuid,
    /// Bookings a deletion would strand.
    pub blocking_bookings: Vec<BookingResponse>,
}
