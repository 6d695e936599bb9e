//! User account model
//!
//! Passwords and recovery secrets are only ever held here as Argon2id PHC
//! strings; the plaintext lives in [`NewUser`] until the gateway hashes it,
//! and is zeroized when the input is dropped.

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::ids::UserId;

/// A registered user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,

    pub name: String,

    /// Unique login identifier
    pub email: String,

    /// Argon2id hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    pub gender: Option<String>,

    /// Argon2id hash of the recovery secret, if one was set
    #[serde(skip_serializing)]
    pub secret_hash: Option<String>,

    /// Monthly spending limit, 0 when unset
    pub budget_limit: f64,
}

impl User {
    /// Whether this user can use the secret-based recovery flow
    pub fn has_recovery_secret(&self) -> bool {
        self.secret_hash.is_some()
    }
}

/// Registration input
///
/// The plaintext password and secret are zeroized on drop.
#[derive(Debug, Clone, Zeroize, ZeroizeOnDrop)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub gender: Option<String>,
    pub secret: Option<String>,
}

impl NewUser {
    /// Create registration input with the required fields
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            gender: None,
            secret: None,
        }
    }

    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    /// Set the recovery secret used for password reset and account deletion
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_builder() {
        let input = NewUser::new("Ada", "ada@example.com", "pw")
            .gender("F")
            .secret("blue");
        assert_eq!(input.email, "ada@example.com");
        assert_eq!(input.gender.as_deref(), Some("F"));
        assert_eq!(input.secret.as_deref(), Some("blue"));
    }

    #[test]
    fn test_new_user_zeroize_clears_plaintext() {
        let mut input = NewUser::new("Ada", "ada@example.com", "pw").secret("blue");
        input.zeroize();
        assert!(input.password.is_empty());
        assert!(input.secret.is_none());
    }

    #[test]
    fn test_hashes_not_serialized() {
        let user = User {
            id: UserId::new(1),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password_hash: "$argon2id$hash".into(),
            gender: None,
            secret_hash: Some("$argon2id$secret".into()),
            budget_limit: 0.0,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2id"));
        assert!(user.has_recovery_secret());
    }
}
