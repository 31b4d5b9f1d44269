//! Booking entities.

pub mod model;
pub mod status;

pub use model::{Booking, BookingState, CreateBooking};
pub use status::BookingStatus;
