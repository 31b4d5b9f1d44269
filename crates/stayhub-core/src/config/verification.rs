//! Student verification policy configuration.

use serde::{Deserialize, Serialize};

/// Admin-verification window policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationConfig {
    /// How many days an accepted payment proof keeps a student verified.
    #[serde(default = "default_window_days")]
    pub window_days: i64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
        }
    }
}

fn default_window_days() -> i64 {
    30
}
