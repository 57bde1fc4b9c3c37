//! Bearer token issuance and parsing.
//!
//! Tokens are HS256 JWTs carrying the username and email of the caller, valid for one
//! hour. The email is the identity used to load the caller on protected endpoints.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, internal::InternalError};

/// Lifetime of an issued token.
const TOKEN_TTL_HOURS: i64 = 1;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub email: String,
    /// Expiry as a Unix timestamp in seconds.
    pub exp: i64,
}

/// Issues a signed token for the given identity.
///
/// # Arguments
/// - `secret` - Signing secret
/// - `username` - Username claim
/// - `email` - Email claim
///
/// # Returns
/// - `Ok(String)` - Encoded token
/// - `Err(InternalError::TokenEncode)` - Signing failed
pub fn issue_token(secret: &str, username: &str, email: &str) -> Result<String, InternalError> {
    let claims = Claims {
        username: username.to_string(),
        email: email.to_string(),
        exp: (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
    };

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(InternalError::TokenEncode)
}

/// Parses a token and returns its claims.
///
/// Accepts the raw token or an `Authorization` header value with the `Bearer` prefix.
/// Surrounding whitespace is ignored.
///
/// # Arguments
/// - `secret` - Signing secret
/// - `token` - Token, optionally prefixed with `Bearer`
///
/// # Returns
/// - `Ok(Claims)` - Signature and expiry verified
/// - `Err(AuthError::InvalidToken)` - Empty, malformed, expired or wrongly signed token
pub fn parse_token(secret: &str, token: &str) -> Result<Claims, AuthError> {
    let token = token.trim();
    let token = token.strip_prefix("Bearer").unwrap_or(token).trim();

    if token.is_empty() {
        return Err(AuthError::InvalidToken);
    }

    let data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|e| {
        tracing::debug!("Rejected token: {}", e);
        AuthError::InvalidToken
    })?;

    Ok(data.claims)
}
