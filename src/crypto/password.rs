//! Password and recovery-secret hashing using Argon2id
//!
//! Hashes are stored as PHC strings (`$argon2id$v=19$...`), which carry their
//! own salt and parameters, so verification needs nothing but the string.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{ExpenseError, ExpenseResult};

/// Hash a password or secret with a fresh random salt
pub fn hash_secret(plain: &str) -> ExpenseResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| ExpenseError::Credential(format!("Hashing failed: {}", e)))?;

    Ok(hash.to_string())
}

/// Check a plaintext candidate against a stored PHC string
///
/// A mismatch is `Ok(false)`; only a corrupt stored hash is an error.
pub fn verify_secret(plain: &str, stored: &str) -> ExpenseResult<bool> {
    let parsed = PasswordHash::new(stored)
        .map_err(|e| ExpenseError::Credential(format!("Stored hash is malformed: {}", e)))?;

    match Argon2::default().verify_password(plain.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(ExpenseError::Credential(format!("Verification failed: {}", e))),
    }
}
