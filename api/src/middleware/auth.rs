//! JWT identity extraction.
//!
//! Token issuance lives in a separate identity service; this API only
//! verifies HS256 bearer tokens. The extractor pulls the token from the
//! Authorization header, verifies the signature against the configured
//! secret, and yields the caller's id and role.

use std::future::{ready, Ready};

use actix_web::http::header::AUTHORIZATION;
use actix_web::{dev::Payload, web, Error, FromRequest, HttpRequest};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rp_core::domain::entities::user::UserRole;
use rp_shared::config::AuthConfig;

use crate::handlers::error::{unauthorized, ApiError};

/// JWT claims issued by the identity service
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id
    pub sub: String,
    /// Role claim ("owner" or "renter")
    pub role: String,
    /// Expiry as a unix timestamp
    pub exp: usize,
}

/// Verified caller identity, available to any handler as an extractor
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub role: UserRole,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, Error> {
    let config = req
        .app_data::<web::Data<AuthConfig>>()
        .ok_or_else(|| unauthorized("Authentication is not configured"))?;

    let token = extract_bearer_token(req)
        .ok_or_else(|| unauthorized("Missing or invalid Authorization header"))?;

    let mut validation = Validation::new(Algorithm::HS256);
    if let Some(issuer) = &config.issuer {
        validation.set_issuer(&[issuer]);
    }

    let token_data = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )
    .map_err(|err| {
        tracing::debug!(error = %err, "token verification failed");
        unauthorized("Invalid or expired token")
    })?;

    let id = Uuid::parse_str(&token_data.claims.sub)
        .map_err(|_| unauthorized("Invalid token subject"))?;
    // An unrecognized role claim is a forbidden caller, not a broken token
    let role = UserRole::parse(&token_data.claims.role)
        .map_err(|err| actix_web::Error::from(ApiError::from(err)))?;

    Ok(AuthenticatedUser { id, role })
}

fn extract_bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
