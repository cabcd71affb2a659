//! Argon2 password hashing.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand_core::OsRng;

use crate::server::error::internal::InternalError;

/// A freshly computed hash together with the salt it was computed with.
///
/// The salt is also embedded in the PHC hash string; it is stored separately to
/// keep the `passwordSalt` column populated.
pub struct HashedPassword {
    pub hash: String,
    pub salt: String,
}

pub fn hash_password(plain: &str) -> Result<HashedPassword, InternalError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            tracing::error!(error = %e, "argon2 hash_password error");
            InternalError::PasswordHash(e.to_string())
        })?
        .to_string();

    Ok(HashedPassword {
        hash,
        salt: salt.as_str().to_string(),
    })
}

/// Checks a plain password against a stored PHC hash string.
///
/// # Returns
/// - `Ok(true)` / `Ok(false)` - Whether the password matches
/// - `Err(InternalError::PasswordHash)` - The stored hash can't be parsed
pub fn verify_password(plain: &str, hash: &str) -> Result<bool, InternalError> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        tracing::error!(error = %e, "argon2 parse hash error");
        InternalError::PasswordHash(e.to_string())
    })?;

    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}
