//! User service
//!
//! Registration, login, and secret-based recovery on top of the user
//! repository.

use tracing::{info, warn};

use crate::error::ExpenseResult;
use crate::models::{NewUser, User};
use crate::storage::Storage;

/// Service for user accounts and credentials
pub struct UserService<'a> {
    storage: &'a Storage,
}

impl<'a> UserService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new user
    ///
    /// Fails with [`ExpenseError::DuplicateEmail`](crate::ExpenseError::DuplicateEmail) if the email is taken.
    pub fn register_user(&self, input: NewUser) -> ExpenseResult<User> {
        let user = self.storage.users().add_user(&input)?;
        info!(user_id = %user.id, "Registered user");
        Ok(user)
    }

    /// The matching user, or `None` on unknown email or wrong password
    pub fn authenticate_user(&self, email: &str, password: &str) -> ExpenseResult<Option<User>> {
        let user = self.storage.users().login_user(email, password)?;
        if user.is_none() {
            warn!("Failed login attempt");
        }
        Ok(user)
    }

    /// Look up a user by email for the recovery flow
    pub fn recover_user(&self, email: &str) -> ExpenseResult<Option<User>> {
        self.storage.users().get_user_by_email(email)
    }

    /// Reset a password with the recovery secret
    ///
    /// Returns `false` when the email/secret pair doesn't match.
    pub fn update_user_password(
        &self,
        email: &str,
        secret: &str,
        new_password: &str,
    ) -> ExpenseResult<bool> {
        let reset = self
            .storage
            .users()
            .reset_password(email, secret, new_password)?;
        if reset {
            info!("Password reset");
        } else {
            warn!("Password reset rejected");
        }
        Ok(reset)
    }

    /// Delete an account with the recovery secret
    pub fn delete_user(&self, email: &str, secret: &str) -> ExpenseResult<bool> {
        let deleted = self.storage.users().delete_user(email, secret)?;
        if deleted {
            info!("Deleted user");
        } else {
            warn!("Account deletion rejected");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpenseError;

    fn ada() -> NewUser {
        NewUser::new("Ada", "ada@example.com", "pw").secret("blue")
    }

    #[test]
    fn test_register_twice_is_duplicate() {
        let storage = Storage::open_in_memory().unwrap();
        let service = UserService::new(&storage);

        service.register_user(ada()).unwrap();
        let result = service.register_user(NewUser::new("Ada 2", "ada@example.com", "pw2"));
        assert!(matches!(result, Err(ExpenseError::DuplicateEmail(_))));
    }

    #[test]
    fn test_register_stores_input_as_given() {
        let storage = Storage::open_in_memory().unwrap();
        let service = UserService::new(&storage);

        let user = service
            .register_user(NewUser::new("Bob", "bob@example.com", "pw").secret(""))
            .unwrap();
        assert!(user.has_recovery_secret());
        assert!(service.update_user_password("bob@example.com", "", "x").unwrap());
        assert!(service.authenticate_user("bob@example.com", "x").unwrap().is_some());
    }

    #[test]
    fn test_authenticate() {
        let storage = Storage::open_in_memory().unwrap();
        let service = UserService::new(&storage);
        let ada = service.register_user(ada()).unwrap();

        let found = service.authenticate_user("ada@example.com", "pw").unwrap();
        assert_eq!(found.map(|u| u.id), Some(ada.id));
        assert!(service.authenticate_user("ada@example.com", "nope").unwrap().is_none());
        assert!(service.authenticate_user(" ada@example.com", "pw").unwrap().is_none());
    }

    #[test]
    fn test_recover_and_reset() {
        let storage = Storage::open_in_memory().unwrap();
        let service = UserService::new(&storage);
        service.register_user(ada()).unwrap();

        assert!(service.recover_user("ada@example.com").unwrap().is_some());
        assert!(service.recover_user("nobody@example.com").unwrap().is_none());

        assert!(!service.update_user_password("ada@example.com", "red", "new").unwrap());
        assert!(service.authenticate_user("ada@example.com", "pw").unwrap().is_some());

        assert!(service.update_user_password("ada@example.com", "blue", "new").unwrap());
        assert!(service.authenticate_user("ada@example.com", "new").unwrap().is_some());
    }

    #[test]
    fn test_delete_user() {
        let storage = Storage::open_in_memory().unwrap();
        let service = UserService::new(&storage);
        service.register_user(ada()).unwrap();

        assert!(!service.delete_user("ada@example.com", "red").unwrap());
        assert!(service.delete_user("ada@example.com", "blue").unwrap());
        assert!(service.recover_user("ada@example.com").unwrap().is_none());
    }
}
