//! Token verification configuration.
//!
//! StayHub never issues tokens; the identity layer does. This section only
//! carries what is needed to *verify* inbound bearer tokens.

use serde::{Deserialize, Serialize};

/// Bearer-token verification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret shared with the identity layer.
    #[serde(default = "default_secret")]
    pub jwt_secret: String,
    /// Clock-skew leeway in seconds when validating `exp`.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_secret(),
            leeway_seconds: default_leeway(),
        }
    }
}

fn default_secret() -> String {
    // Overridden via STAYHUB__AUTH__JWT_SECRET in any real deployment.
    "development-secret-change-me".to_string()
}

fn default_leeway() -> u64 {
    30
}
