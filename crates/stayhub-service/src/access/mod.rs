//! Access gating for student-facing operations.

pub mod gateway;

pub use gateway::{AccessAction, AccessDecision, AccessGateway, DenyReason, decide};
