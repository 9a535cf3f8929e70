//! Authentication configuration module
//!
//! Token issuance happens in a separate identity service; this backend only
//! verifies bearer tokens, so the configuration is limited to what
//! verification needs.

use serde::{Deserialize, Serialize};

/// JWT verification configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Shared secret used to verify HS256 signatures
    pub jwt_secret: String,

    /// Expected token issuer, checked when set
    #[serde(default)]
    pub issuer: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from("dev-secret-change-me"),
            issuer: None,
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            jwt_secret: std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| "dev-secret-change-me".to_string()),
            issuer: std::env::var("JWT_ISSUER").ok(),
        }
    }
}
