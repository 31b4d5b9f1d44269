//! Booking entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::BookingStatus;

/// A student's claim on a room: a time-boxed hold, a confirmed occupancy,
/// or a terminal record of either.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    /// Unique booking identifier.
    pub id: Uuid,
    /// The room this booking is for.
    pub room_id: Uuid,
    /// The house the room belongs to.
    pub house_id: Uuid,
    /// The student who made the booking.
    pub student_id: Uuid,
    /// Current status.
    pub status: BookingStatus,
    /// When the hold lapses. Present exactly while `status = reserved`
    /// (enforced by a table CHECK constraint); read through [`Booking::state`].
    pub expires_at: Option<DateTime<Utc>>,
    /// Whether payment has been recorded against this booking.
    pub paid: bool,
    /// When the booking was confirmed.
    pub confirmed_at: Option<DateTime<Utc>>,
    /// When the booking was cancelled.
    pub cancelled_at: Option<DateTime<Utc>>,
    /// Who cancelled the booking.
    pub cancelled_by: Option<Uuid>,
    /// Free-text cancellation reason.
    pub cancellation_reason: Option<String>,
    /// Optimistic-concurrency version; bumped on every status transition.
    pub version: i64,
    /// When the booking was created.
    pub created_at: DateTime<Utc>,
    /// When the booking was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Tagged view of a booking's lifecycle position.
///
/// Consumers match on this instead of pairing `status` with a nullable
/// `expires_at`: the expiry is only reachable on a hold, so a forgotten
/// null check cannot type-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BookingState {
    /// An unconfirmed hold with its deadline.
    Reserved {
        /// When the hold lapses.
        expires_at: DateTime<Utc>,
    },
    /// A confirmed occupancy.
    Confirmed,
    /// Cancelled by a party.
    Cancelled,
    /// Lapsed without confirmation.
    Expired,
}

impl Booking {
    /// Project the row into its tagged lifecycle view.
    pub fn state(&self) -> BookingState {
        match self.status {
            // The CHECK constraint guarantees expires_at on holds; the
            // created_at fallback keeps this total rather than panicking.
            BookingStatus::Reserved => BookingState::Reserved {
                expires_at: self.expires_at.unwrap_or(self.created_at),
            },
            BookingStatus::Confirmed => BookingState::Confirmed,
            BookingStatus::Cancelled => BookingState::Cancelled,
            BookingStatus::Expired => BookingState::Expired,
        }
    }

    /// Whether this hold has lapsed as of `now`, regardless of whether the
    /// sweep has recorded it yet.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.state() {
            BookingState::Reserved { expires_at } => expires_at <= now,
            _ => false,
        }
    }

    /// Whether the booking is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Data required to create a new hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBooking {
    /// The room being held.
    pub room_id: Uuid,
    /// The house the room belongs to.
    pub house_id: Uuid,
    /// The student placing the hold.
    pub student_id: Uuid,
    /// When the hold lapses.
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn booking(status: BookingStatus, expires_at: Option<DateTime<Utc>>) -> Booking {
        let now = Utc::now();
        Booking {
            id: Uuid::new_v4(),
            room_id: Uuid::new_v4(),
            house_id: Uuid::new_v4(),
            student_id: Uuid::new_v4(),
            status,
            expires_at,
            paid: false,
            confirmed_at: None,
            cancelled_at: None,
            cancelled_by: None,
            cancellation_reason: None,
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_state_carries_expiry_only_on_holds() {
        let deadline = Utc::now() + Duration::days(7);
        let hold = booking(BookingStatus::Reserved, Some(deadline));
        assert_eq!(hold.state(), BookingState::Reserved { expires_at: deadline });

        let confirmed = booking(BookingStatus::Confirmed, None);
        assert_eq!(confirmed.state(), BookingState::Confirmed);
    }

    #[test]
    fn test_is_expired_boundary() {
        let deadline = Utc::now();
        let hold = booking(BookingStatus::Reserved, Some(deadline));

        assert!(!hold.is_expired(deadline - Duration::seconds(1)));
        // A hold is no longer confirmable at exactly its deadline.
        assert!(hold.is_expired(deadline));
        assert!(hold.is_expired(deadline + Duration::seconds(1)));
    }

    #[test]
    fn test_non_holds_never_report_expired() {
        let past = Utc::now() - Duration::days(1);
        assert!(!booking(BookingStatus::Confirmed, Some(past)).is_expired(Utc::now()));
        assert!(!booking(BookingStatus::Cancelled, Some(past)).is_expired(Utc::now()));
    }
}
