//! Cryptographic functions for the expense tracker
//!
//! Salted Argon2id hashing for user passwords and recovery secrets.

pub mod password;

pub use password::{hash_secret, verify_secret};
