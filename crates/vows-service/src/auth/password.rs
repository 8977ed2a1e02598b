use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};

use vows_core::constants::MIN_PASSWORD_LENGTH;

use crate::error::{ServiceError, ServiceResult};

/// Whether `password` has at least `MIN_PASSWORD_LENGTH` characters.
#[must_use]
pub fn is_long_enough(password: &str) -> bool {
    u64::try_from(password.chars().count()).is_ok_and(|len| len >= MIN_PASSWORD_LENGTH)
}

/// ## Summary
/// Hashes a password using Argon2id with a random salt.
///
/// ## Errors
/// Returns an error if password hashing fails.
pub fn hash_password(password: &str) -> ServiceResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ServiceError::InvalidConfiguration(format!("Failed to hash password: {e}")))?;

    Ok(password_hash.to_string())
}

/// ## Summary
/// Verifies a password against a stored Argon2 hash.
///
/// Returns `Ok(())` if the password matches the hash.
///
/// ## Errors
/// Returns `NotAuthenticated` on a mismatch, or `InvalidConfiguration` if the
/// stored hash cannot be parsed.
pub fn verify_password(password: &str, password_hash: &str) -> ServiceResult<()> {
    let parsed_hash = PasswordHash::new(password_hash)
        .map_err(|e| ServiceError::InvalidConfiguration(format!("Invalid stored password hash: {e}")))?;

    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|err| {
            tracing::trace!(error = %err, "Password verification failed");
            ServiceError::NotAuthenticated
        })
}
