//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Token lifetime in minutes. Expired tokens require a fresh login;
    /// there is no refresh mechanism.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
    /// Issuer claim pinned on every token.
    #[serde(default = "default_issuer")]
    pub issuer: String,
    /// Audience claim pinned on every token.
    #[serde(default = "default_audience")]
    pub audience: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_minutes: default_token_ttl(),
            issuer: default_issuer(),
            audience: default_audience(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> u64 {
    60
}

fn default_issuer() -> String {
    "roomhub-api".to_string()
}

fn default_audience() -> String {
    "roomhub-client".to_string()
}
