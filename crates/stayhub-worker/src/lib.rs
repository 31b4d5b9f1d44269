//! # stayhub-worker
//!
//! Scheduled maintenance for StayHub. Two periodic tasks run on cron
//! schedules: the reservation sweep (expires lapsed holds and frees their
//! rooms) and the verification lapse report. Neither is load-bearing for
//! correctness — expiry is also checked lazily on every read — they keep
//! listings and admin views fresh.

pub mod jobs;
pub mod scheduler;

pub use scheduler::MaintenanceScheduler;
