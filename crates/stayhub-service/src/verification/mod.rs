//! Student verification engine.

pub mod service;

pub use service::{ReviewDecision, VerificationService};
