//! Room occupancy state enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Occupancy state of a room.
///
/// The original system tracked two independent booleans
/// (`is_occupied`, `is_available`); a single enum makes the
/// impossible combinations unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "room_state", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RoomState {
    /// Free to be reserved.
    Available,
    /// Held by exactly one unconfirmed reservation.
    Reserved,
    /// Occupied under exactly one confirmed booking.
    Occupied,
}

impl RoomState {
    /// Whether a new hold may be placed in this state.
    pub fn can_reserve(&self) -> bool {
        matches!(self, Self::Available)
    }

    /// Return the state as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Reserved => "reserved",
            Self::Occupied => "occupied",
        }
    }
}

impl fmt::Display for RoomState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoomState {
    type Err = stayhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "reserved" => Ok(Self::Reserved),
            "occupied" => Ok(Self::Occupied),
            _ => Err(stayhub_core::AppError::validation(format!(
                "Invalid room state: '{s}'. Expected one of: available, reserved, occupied"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_available_can_reserve() {
        assert!(RoomState::Available.can_reserve());
        assert!(!RoomState::Reserved.can_reserve());
        assert!(!RoomState::Occupied.can_reserve());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("occupied".parse::<RoomState>().unwrap(), RoomState::Occupied);
        assert!("vacant".parse::<RoomState>().is_err());
    }
}
