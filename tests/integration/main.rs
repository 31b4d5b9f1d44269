//! End-to-end tests against a live PostgreSQL instance.
//!
//! These exercise the reservation and verification state machines through
//! the real repositories. They are ignored by default; point
//! `STAYHUB_TEST_DATABASE_URL` at a scratch database and run with
//! `cargo test -- --ignored` to include them.

mod helpers;

mod booking_test;
mod house_test;
mod inquiry_test;
mod verification_test;
