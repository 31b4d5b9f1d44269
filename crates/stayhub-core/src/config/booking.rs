//! Reservation policy configuration.

use serde::{Deserialize, Serialize};

/// Reservation hold policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// How many days an unconfirmed reservation remains valid.
    #[serde(default = "default_hold_days")]
    pub hold_days: i64,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            hold_days: default_hold_days(),
        }
    }
}

fn default_hold_days() -> i64 {
    7
}
