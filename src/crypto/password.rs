//! Password hashing using Argon2id
//!
//! Hashes are stored as PHC strings, which carry their own salt and
//! parameters, so verification needs nothing but the stored string.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{ExpenseError, ExpenseResult};

/// Hash a password with a fresh random salt
pub fn hash_password(password: &str) -> ExpenseResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ExpenseError::Auth(format!("Password hashing failed: {}", e)))
}

/// Check a password against a stored PHC string
///
/// Returns `Ok(false)` for a wrong password and an error only when the stored
/// hash itself cannot be parsed.
pub fn verify_password(password: &str, stored_hash: &str) -> ExpenseResult<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| ExpenseError::Storage(format!("Invalid stored password hash: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
