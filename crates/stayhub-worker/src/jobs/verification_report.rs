//! Verification lapse report.
//!
//! Access derivation never depends on this pass — `is_access_granted`
//! re-checks expiry on every read. This job only surfaces how many
//! students have silently lapsed so admin dashboards stay honest.

use std::sync::Arc;

use tracing::{debug, error, info};

use stayhub_core::clock::Clock;
use stayhub_service::VerificationService;

/// Reports students whose verification window has lapsed.
#[derive(Debug, Clone)]
pub struct VerificationReportJob {
    verification: Arc<VerificationService>,
    clock: Arc<dyn Clock>,
}

impl VerificationReportJob {
    /// Create a new report job.
    pub fn new(verification: Arc<VerificationService>, clock: Arc<dyn Clock>) -> Self {
        Self {
            verification,
            clock,
        }
    }

    /// Run one report pass. Failures are logged, never fatal.
    pub async fn run(&self) {
        let now = self.clock.now();
        match self.verification.lapsed_verifications(now).await {
            Ok(lapsed) if lapsed.is_empty() => {
                debug!("Verification report: no lapsed verifications");
            }
            Ok(lapsed) => {
                info!(
                    count = lapsed.len(),
                    "Verification report: students with lapsed windows"
                );
            }
            Err(e) => {
                error!(error = %e, "Verification report failed");
            }
        }
    }
}
