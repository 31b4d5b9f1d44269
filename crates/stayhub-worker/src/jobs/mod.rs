//! Periodic job implementations.

pub mod reservation_sweep;
pub mod verification_report;

pub use reservation_sweep::ReservationSweepJob;
pub use verification_report::VerificationReportJob;
