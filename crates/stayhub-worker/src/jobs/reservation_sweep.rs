//! Reservation expiry sweep.

use std::sync::Arc;

use tracing::{debug, error, info};

use stayhub_core::clock::Clock;
use stayhub_service::ReservationService;

/// Expires lapsed holds and releases their rooms.
#[derive(Debug, Clone)]
pub struct ReservationSweepJob {
    reservations: Arc<ReservationService>,
    clock: Arc<dyn Clock>,
}

impl ReservationSweepJob {
    /// Create a new sweep job.
    pub fn new(reservations: Arc<ReservationService>, clock: Arc<dyn Clock>) -> Self {
        Self {
            reservations,
            clock,
        }
    }

    /// Run one sweep pass. Failures are logged, never fatal.
    pub async fn run(&self) {
        let now = self.clock.now();
        match self.reservations.sweep_expired(now).await {
            Ok(expired) if expired.is_empty() => {
                debug!("Reservation sweep: nothing to expire");
            }
            Ok(expired) => {
                info!(count = expired.len(), "Reservation sweep expired lapsed holds");
            }
            Err(e) => {
                error!(error = %e, "Reservation sweep failed");
            }
        }
    }
}
