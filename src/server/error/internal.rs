use thiserror::Error;

/// Internal failures of the authentication primitives.
///
/// These indicate a broken environment or a bug rather than bad client input, so they
/// all result in a 500 Internal Server Error with a generic message returned to client.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to hash a password or to parse a stored hash.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Signing a freshly issued token failed.
    #[error("Failed to encode token: {0}")]
    TokenEncode(#[source] jsonwebtoken::errors::Error),
}
