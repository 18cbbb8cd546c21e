//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use roomhub_core::config::auth::AuthConfig;
use roomhub_core::error::AppError;

use super::claims::Claims;

/// Validates presented tokens: signature, expiry, issuer, and audience.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Expiry is strict: no grace period.
        validation.leeway = 0;
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string, returning the embedded claims.
    ///
    /// Expired tokens fail with a dedicated error that carries the expiry
    /// timestamp; any other signature or claims mismatch is rejected with
    /// a single invalid-token error.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => self.expired_error(token),
                _ => AppError::token_invalid("The authentication token is not valid"),
            })
    }

    /// Builds the expired-token error, recovering the expiry timestamp for
    /// client display. The signature is still checked on the second decode.
    fn expired_error(&self, token: &str) -> AppError {
        let mut relaxed = self.validation.clone();
        relaxed.validate_exp = false;

        match decode::<Claims>(token, &self.decoding_key, &relaxed) {
            Ok(data) => {
                let expired_at = data.claims.expires_at();
                AppError::token_expired("The session has expired. Please log in again.")
                    .with_details(serde_json::json!({ "expired_at": expired_at.to_rfc3339() }))
            }
            Err(_) => AppError::token_invalid("The authentication token is not valid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use roomhub_core::ErrorKind;
    use roomhub_entity::User;
    use uuid::Uuid;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            ..AuthConfig::default()
        }
    }

    fn test_user() -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            email: "alice@example.com".to_string(),
            password_hash: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn roundtrip_yields_same_identity() {
        let config = test_config();
        let user = test_user();
        let issued = JwtEncoder::new(&config).issue(&user).unwrap();
        assert_eq!(issued.expires_in_seconds, 3600);

        let claims = JwtDecoder::new(&config).decode(&issued.token).unwrap();
        assert_eq!(claims.user_id(), user.id);
        assert_eq!(claims.email, user.email);
    }

    #[test]
    fn expired_token_is_rejected_with_expiry() {
        let config = test_config();
        let now = Utc::now();
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "alice@example.com".to_string(),
            iat: (now - chrono::Duration::hours(2)).timestamp(),
            exp: (now - chrono::Duration::hours(1)).timestamp(),
            iss: config.issuer.clone(),
            aud: config.audience.clone(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        let err = JwtDecoder::new(&config).decode(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TokenExpired);
        let details = err.details.expect("expiry details");
        assert!(details.get("expired_at").is_some());
    }

    #[test]
    fn tampered_signature_is_rejected() {
        let config = test_config();
        let issued = JwtEncoder::new(&config).issue(&test_user()).unwrap();

        let other = AuthConfig {
            jwt_secret: "a-different-secret".to_string(),
            ..AuthConfig::default()
        };
        let err = JwtDecoder::new(&other).decode(&issued.token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TokenInvalid);
    }

    #[test]
    fn wrong_audience_is_rejected() {
        let config = test_config();
        let issued = JwtEncoder::new(&AuthConfig {
            audience: "someone-else".to_string(),
            ..test_config()
        })
        .issue(&test_user())
        .unwrap();

        let err = JwtDecoder::new(&config).decode(&issued.token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TokenInvalid);
    }

    #[test]
    fn garbage_token_is_rejected() {
        let err = JwtDecoder::new(&test_config())
            .decode("not-a-token")
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::TokenInvalid);
    }
}
