//! Room ledger — the single writer for room occupancy state.
//!
//! Only the reservation engine calls into this type; external callers never
//! touch `rooms.state` directly. Each transition is one compare-and-swap
//! statement in the repository, so concurrent holds on the same room
//! resolve to exactly one winner even across service instances.

use std::sync::Arc;

use uuid::Uuid;

use stayhub_core::clock::Clock;
use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;
use stayhub_database::repositories::RoomRepository;
use stayhub_entity::room::model::Room;

/// Authoritative source of room availability.
#[derive(Debug, Clone)]
pub struct RoomLedger {
    rooms: Arc<RoomRepository>,
    clock: Arc<dyn Clock>,
}

impl RoomLedger {
    /// Create a new room ledger.
    pub fn new(rooms: Arc<RoomRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { rooms, clock }
    }

    /// Place a hold on an available room.
    ///
    /// The returned row (with its bumped version) is the lock token scoped
    /// to the reservation's lifetime. Fails with a conflict if the room is
    /// already reserved or occupied.
    pub async fn try_reserve(&self, room_id: Uuid) -> AppResult<Room> {
        let now = self.clock.now();
        if let Some(room) = self.rooms.try_reserve(room_id, now).await? {
            return Ok(room);
        }

        // The guard failed: tell an unavailable room apart from a missing one.
        match self.rooms.find_by_id(room_id).await? {
            Some(_) => Err(AppError::conflict("Room is not available")),
            None => Err(AppError::not_found("Room not found")),
        }
    }

    /// Convert a held room into an occupied one.
    pub async fn confirm(&self, room_id: Uuid) -> AppResult<Room> {
        let now = self.clock.now();
        match self.rooms.confirm_occupancy(room_id, now).await? {
            Some(room) => Ok(room),
            None => match self.rooms.find_by_id(room_id).await? {
                Some(room) => Err(AppError::conflict(format!(
                    "Room cannot be occupied from state '{}'",
                    room.state
                ))),
                None => Err(AppError::not_found("Room not found")),
            },
        }
    }

    /// Return a room to the available pool.
    ///
    /// Idempotent: releasing an already-available room is a no-op.
    pub async fn release(&self, room_id: Uuid) -> AppResult<()> {
        self.rooms.release(room_id, self.clock.now()).await
    }
}
