//! User repository
//!
//! Registration, credential checks, secret-based recovery, and the per-user
//! budget limit. Passwords and secrets are hashed before they reach the table.

use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

use crate::crypto::{hash_secret, verify_secret};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{NewUser, User, UserId};

const USER_COLUMNS: &str = "id, name, email, password, gender, secret, budget_limit";

/// Queries and mutations against the `users` table
pub struct UserRepository<'a> {
    conn: &'a Connection,
}

impl<'a> UserRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert a new user
    ///
    /// The duplicate check and the insert are separate statements. A racing
    /// registration that slips between them is rejected by the table's
    /// `UNIQUE` constraint and surfaces as [`ExpenseError::Database`].
    pub fn add_user(&self, input: &NewUser) -> ExpenseResult<User> {
        if self.get_user_by_email(&input.email)?.is_some() {
            return Err(ExpenseError::DuplicateEmail(input.email.clone()));
        }

        let password_hash = hash_secret(&input.password)?;
        let secret_hash = input.secret.as_deref().map(hash_secret).transpose()?;

        self.conn.execute(
            "INSERT INTO users (name, email, password, gender, secret)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                input.name,
                input.email,
                password_hash,
                input.gender,
                secret_hash
            ],
        )?;
        let id = UserId::new(self.conn.last_insert_rowid());
        debug!(user_id = %id, "Inserted user");

        Ok(User {
            id,
            name: input.name.clone(),
            email: input.email.clone(),
            password_hash,
            gender: input.gender.clone(),
            secret_hash,
            budget_limit: 0.0,
        })
    }

    /// Return the user whose email and password both match
    pub fn login_user(&self, email: &str, password: &str) -> ExpenseResult<Option<User>> {
        let Some(user) = self.get_user_by_email(email)? else {
            return Ok(None);
        };

        if verify_secret(password, &user.password_hash)? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    pub fn get_user_by_email(&self, email: &str) -> ExpenseResult<Option<User>> {
        let user = self
            .conn
            .query_row(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?1"),
                params![email],
                user_from_row,
            )
            .optional()?;
        Ok(user)
    }

    pub fn get_user(&self, user_id: UserId) -> ExpenseResult<Option<User>> {
        let user = self
            .conn
            .query_row(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1"),
                params![user_id],
                user_from_row,
            )
            .optional()?;
        Ok(user)
    }

    /// Replace the password of the user matching `email` and `secret`
    ///
    /// Returns whether a row was updated. Users registered without a secret
    /// can never be reset this way.
    pub fn reset_password(
        &self,
        email: &str,
        secret: &str,
        new_password: &str,
    ) -> ExpenseResult<bool> {
        let Some(user) = self.find_by_secret(email, secret)? else {
            return Ok(false);
        };

        let password_hash = hash_secret(new_password)?;
        let rows = self.conn.execute(
            "UPDATE users SET password = ?1 WHERE id = ?2 AND email = ?3",
            params![password_hash, user.id, email],
        )?;
        debug!(user_id = %user.id, rows, "Reset password");

        Ok(rows > 0)
    }

    /// Delete the user matching `email` and `secret`
    ///
    /// Returns whether a row was deleted. The user's expenses are kept.
    pub fn delete_user(&self, email: &str, secret: &str) -> ExpenseResult<bool> {
        let Some(user) = self.find_by_secret(email, secret)? else {
            return Ok(false);
        };

        let rows = self.conn.execute(
            "DELETE FROM users WHERE id = ?1 AND email = ?2",
            params![user.id, email],
        )?;
        debug!(user_id = %user.id, rows, "Deleted user");

        Ok(rows > 0)
    }

    /// Returns whether the user exists
    pub fn set_budget_limit(&self, user_id: UserId, limit: f64) -> ExpenseResult<bool> {
        let rows = self.conn.execute(
            "UPDATE users SET budget_limit = ?1 WHERE id = ?2",
            params![limit, user_id],
        )?;
        debug!(user_id = %user_id, limit, rows, "Set budget limit");
        Ok(rows > 0)
    }

    /// The user's budget limit, or 0 when the user doesn't exist
    pub fn get_budget_limit(&self, user_id: UserId) -> ExpenseResult<f64> {
        let limit: Option<Option<f64>> = self
            .conn
            .query_row(
                "SELECT budget_limit FROM users WHERE id = ?1",
                params![user_id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(limit.flatten().unwrap_or(0.0))
    }

    fn find_by_secret(&self, email: &str, secret: &str) -> ExpenseResult<Option<User>> {
        let Some(user) = self.get_user_by_email(email)? else {
            return Ok(None);
        };

        match &user.secret_hash {
            Some(stored) if verify_secret(secret, stored)? => Ok(Some(user)),
            _ => Ok(None),
        }
    }
}

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        password_hash: row.get(3)?,
        gender: row.get(4)?,
        secret_hash: row.get(5)?,
        budget_limit: row.get::<_, Option<f64>>(6)?.unwrap_or(0.0),
    })
}
