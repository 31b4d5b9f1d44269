//! StayHub Server — student housing marketplace core.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use stayhub_core::clock::{Clock, SystemClock};
use stayhub_core::config::AppConfig;
use stayhub_core::error::AppError;
use stayhub_core::traits::Notifier;

use stayhub_auth::jwt::decoder::TokenDecoder;
use stayhub_database::connection::DatabasePool;
use stayhub_database::repositories::{
    BookingRepository, HouseRepository, InquiryRepository, ProofRepository, RoomRepository,
    UserRepository,
};
use stayhub_service::access::AccessGateway;
use stayhub_service::booking::{ReservationService, RoomLedger};
use stayhub_service::house::HouseService;
use stayhub_service::inquiry::InquiryService;
use stayhub_service::notify::LogNotifier;
use stayhub_service::verification::VerificationService;
use stayhub_worker::jobs::{ReservationSweepJob, VerificationReportJob};
use stayhub_worker::scheduler::MaintenanceScheduler;

#[tokio::main]
async fn main() {
    let env = std::env::var("STAYHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting StayHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Infrastructure ───────────────────────────────────────
    let db = DatabasePool::connect(&config.database).await?;
    stayhub_database::migration::run_migrations(db.pool()).await?;
    let pool = db.into_pool();

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let notifier: Arc<dyn Notifier> = Arc::new(LogNotifier);
    let token_decoder = Arc::new(TokenDecoder::new(&config.auth));

    // ── Repositories ─────────────────────────────────────────
    let users = Arc::new(UserRepository::new(pool.clone()));
    let houses = Arc::new(HouseRepository::new(pool.clone()));
    let rooms = Arc::new(RoomRepository::new(pool.clone()));
    let bookings = Arc::new(BookingRepository::new(pool.clone()));
    let inquiries = Arc::new(InquiryRepository::new(pool.clone()));
    let proofs = Arc::new(ProofRepository::new(pool.clone()));

    // ── Services ─────────────────────────────────────────────
    let gateway = AccessGateway::new(Arc::clone(&users), Arc::clone(&clock));
    let ledger = RoomLedger::new(Arc::clone(&rooms), Arc::clone(&clock));

    let reservations = Arc::new(ReservationService::new(
        Arc::clone(&bookings),
        Arc::clone(&houses),
        ledger,
        gateway.clone(),
        Arc::clone(&notifier),
        Arc::clone(&clock),
        config.booking.hold_days,
    ));

    let verification = Arc::new(VerificationService::new(
        Arc::clone(&users),
        Arc::clone(&proofs),
        gateway.clone(),
        Arc::clone(&notifier),
        Arc::clone(&clock),
        config.verification.window_days,
    ));

    let inquiry_service = Arc::new(InquiryService::new(
        Arc::clone(&inquiries),
        Arc::clone(&houses),
        gateway.clone(),
        Arc::clone(&clock),
    ));

    let house_service = Arc::new(HouseService::new(
        Arc::clone(&houses),
        Arc::clone(&rooms),
        Arc::clone(&bookings),
        (*reservations).clone(),
        gateway,
    ));

    // ── Background worker ────────────────────────────────────
    let mut scheduler = None;
    if config.worker.enabled {
        let sweep = Arc::new(ReservationSweepJob::new(
            Arc::clone(&reservations),
            Arc::clone(&clock),
        ));
        let report = Arc::new(VerificationReportJob::new(
            Arc::clone(&verification),
            Arc::clone(&clock),
        ));

        let sched = MaintenanceScheduler::new(config.worker.clone(), sweep, report).await?;
        sched.register_tasks().await?;
        sched.start().await?;
        scheduler = Some(sched);
    }

    // ── HTTP server ──────────────────────────────────────────
    let state = stayhub_api::AppState {
        config: Arc::new(config),
        db_pool: pool,
        token_decoder,
        clock,
        reservations,
        verification,
        inquiries: inquiry_service,
        houses: house_service,
    };

    let result = stayhub_api::serve(state).await;

    if let Some(mut sched) = scheduler {
        sched.shutdown().await?;
    }

    result
}
