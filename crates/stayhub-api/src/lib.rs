//! # stayhub-api
//!
//! HTTP surface for StayHub. Thin axum handlers wrap the service layer's
//! operation catalogue; all business rules (including deny-reason wording)
//! live below this crate, which only translates between HTTP and typed
//! operations.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::serve;
pub use state::AppState;
