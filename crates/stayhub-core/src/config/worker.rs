//! Background worker configuration.

use serde::{Deserialize, Serialize};

/// Background maintenance worker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Whether the worker is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Cron schedule for the reservation expiry sweep.
    #[serde(default = "default_sweep_schedule")]
    pub reservation_sweep_schedule: String,
    /// Cron schedule for the verification lapse report.
    #[serde(default = "default_report_schedule")]
    pub verification_report_schedule: String,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            reservation_sweep_schedule: default_sweep_schedule(),
            verification_report_schedule: default_report_schedule(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Every 5 minutes.
fn default_sweep_schedule() -> String {
    "0 */5 * * * *".to_string()
}

/// Hourly.
fn default_report_schedule() -> String {
    "0 0 * * * *".to_string()
}
