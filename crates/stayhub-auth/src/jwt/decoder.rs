//! JWT decoding and validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use stayhub_core::config::auth::AuthConfig;
use stayhub_core::error::AppError;

use super::claims::Claims;

/// Decodes and validates HS256 bearer tokens signed by the identity layer.
#[derive(Clone)]
pub struct TokenDecoder {
    key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDecoder").finish()
    }
}

impl TokenDecoder {
    /// Create a decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway_seconds;

        Self {
            key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decode and validate a bearer token, returning its claims.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::unauthorized(format!("Invalid bearer token: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use stayhub_entity::user::UserRole;
    use uuid::Uuid;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            leeway_seconds: 0,
        }
    }

    fn sign(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("encode token")
    }

    #[test]
    fn test_round_trip() {
        let decoder = TokenDecoder::new(&config());
        let claims = Claims {
            sub: Uuid::new_v4(),
            role: UserRole::Student,
            iat: Utc::now().timestamp(),
            exp: Utc::now().timestamp() + 3600,
        };

        let decoded = decoder.decode(&sign(&claims, "test-secret")).unwrap();
        assert_eq!(decoded.sub, claims.sub);
        assert_eq!(decoded.role, UserRole::Student);
    }

    #[test]
    fn test_rejects_wrong_secret() {
        let decoder = TokenDecoder::new(&config());
        let claims = Claims {
            sub: Uuid::new_v4(),
            role: UserRole::Admin,
            iat: Utc::now().timestamp(),
            exp: Utc::now().timestamp() + 3600,
        };

        assert!(decoder.decode(&sign(&claims, "other-secret")).is_err());
    }

    #[test]
    fn test_rejects_expired_token() {
        let decoder = TokenDecoder::new(&config());
        let claims = Claims {
            sub: Uuid::new_v4(),
            role: UserRole::Student,
            iat: Utc::now().timestamp() - 7200,
            exp: Utc::now().timestamp() - 3600,
        };

        assert!(decoder.decode(&sign(&claims, "test-secret")).is_err());
    }
}
