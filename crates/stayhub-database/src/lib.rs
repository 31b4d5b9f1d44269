//! # stayhub-database
//!
//! PostgreSQL persistence for StayHub: connection pool management,
//! embedded migrations, and one repository per aggregate. Repositories are
//! the only code that speaks SQL; the state-machine guards live in
//! single-statement conditional updates so that concurrent writers can
//! never both win the same transition.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
