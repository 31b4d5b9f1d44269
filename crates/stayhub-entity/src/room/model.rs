//! Room entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::state::RoomState;

/// An individual rentable room within a house.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Room {
    /// Unique room identifier.
    pub id: Uuid,
    /// The house this room belongs to.
    pub house_id: Uuid,
    /// Room number within the house.
    pub room_number: String,
    /// Sleeping capacity (at least 1).
    pub capacity: i32,
    /// Monthly rent.
    pub price_per_month: Decimal,
    /// Current occupancy state. Mutated only through the room ledger.
    pub state: RoomState,
    /// Optimistic-concurrency version; bumped on every state transition.
    pub version: i64,
    /// When the room was created.
    pub created_at: DateTime<Utc>,
    /// When the room was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Room {
    /// Whether the room is free to be reserved.
    pub fn is_available(&self) -> bool {
        self.state.can_reserve()
    }
}

/// Data required to create a new room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoom {
    /// The house the room belongs to.
    pub house_id: Uuid,
    /// Room number within the house.
    pub room_number: String,
    /// Sleeping capacity.
    pub capacity: i32,
    /// Monthly rent.
    pub price_per_month: Decimal,
}
