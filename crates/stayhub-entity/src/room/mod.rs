//! Room entities.

pub mod model;
pub mod state;

pub use model::{CreateRoom, Room};
pub use state::RoomState;
