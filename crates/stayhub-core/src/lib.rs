//! # stayhub-core
//!
//! Shared foundation for the StayHub workspace: the unified error type,
//! configuration schemas, the injectable clock, common types, and the
//! trait seams other crates implement.

pub mod clock;
pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{AppError, ErrorKind};
pub use result::AppResult;
