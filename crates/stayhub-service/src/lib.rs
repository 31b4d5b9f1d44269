//! # stayhub-service
//!
//! Business logic service layer for StayHub. Each service orchestrates
//! repositories and the access gateway to implement application-level use
//! cases: the room ledger and reservation engine, the verification engine,
//! inquiries, and the two-phase house removal flow.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references, including the clock.

pub mod access;
pub mod booking;
pub mod context;
pub mod house;
pub mod inquiry;
pub mod notify;
pub mod verification;

pub use access::{AccessAction, AccessDecision, AccessGateway, DenyReason};
pub use booking::{ReservationService, RoomLedger};
pub use context::RequestContext;
pub use house::HouseService;
pub use inquiry::InquiryService;
pub use notify::LogNotifier;
pub use verification::{ReviewDecision, VerificationService};
