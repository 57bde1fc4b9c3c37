//! Password hashing and verification using argon2id.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::server::error::internal::InternalError;

/// Hashes a password using argon2id with a random salt.
///
/// # Arguments
/// - `password` - Clear text password
///
/// # Returns
/// - `Ok(String)` - PHC string embedding algorithm, parameters and salt
/// - `Err(InternalError::PasswordHash)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, InternalError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verifies a password against a stored argon2id hash.
///
/// # Arguments
/// - `hash` - Stored PHC string
/// - `password` - Clear text password to check
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(InternalError::PasswordHash)` - Stored hash is not a valid PHC string
pub fn verify_password(hash: &str, password: &str) -> Result<bool, InternalError> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
