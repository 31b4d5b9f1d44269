//! Admin-only handlers.

pub mod houses;
pub mod proofs;
pub mod students;
pub mod sweep;
