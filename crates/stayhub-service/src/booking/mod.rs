//! Room ledger and reservation engine.

pub mod ledger;
pub mod service;

pub use ledger::RoomLedger;
pub use service::ReservationService;
