//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use stayhub_auth::jwt::decoder::TokenDecoder;
use stayhub_core::clock::Clock;
use stayhub_core::config::AppConfig;
use stayhub_service::booking::ReservationService;
use stayhub_service::house::HouseService;
use stayhub_service::inquiry::InquiryService;
use stayhub_service::verification::VerificationService;

/// Application state containing all shared dependencies.
///
/// Passed to every axum handler via the `State` extractor. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool (health checks only; repositories hold
    /// their own clones).
    pub db_pool: PgPool,
    /// Bearer-token decoder.
    pub token_decoder: Arc<TokenDecoder>,
    /// Injectable time source.
    pub clock: Arc<dyn Clock>,
    /// Reservation engine.
    pub reservations: Arc<ReservationService>,
    /// Verification engine.
    pub verification: Arc<VerificationService>,
    /// Inquiry flow.
    pub inquiries: Arc<InquiryService>,
    /// House browsing and removal.
    pub houses: Arc<HouseService>,
}
