//! Storage layer for the expense tracker
//!
//! A single SQLite connection owned by [`Storage`]. Repositories are cheap
//! views that borrow that connection; every statement auto-commits.

pub mod expenses;
pub mod schema;
pub mod users;

pub use expenses::ExpenseRepository;
pub use schema::{create_expense_table, create_user_table, initialize_schema};
pub use users::UserRepository;

use std::path::Path;

use rusqlite::Connection;
use tracing::debug;

use crate::error::ExpenseResult;

/// Owns the connection to the store
///
/// Open it once at startup, hand `&Storage` to the services, and call
/// [`Storage::close`] at shutdown.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Open (or create) a file-backed store and ensure the schema exists
    pub fn open(path: impl AsRef<Path>) -> ExpenseResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Opening expense database");
        Self::from_connection(Connection::open(path)?)
    }

    /// Open a private in-memory store
    pub fn open_in_memory() -> ExpenseResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> ExpenseResult<Self> {
        // expenses.user_id is a loose reference; user deletion leaves expenses behind
        conn.execute_batch("PRAGMA foreign_keys = OFF;")?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    /// User table operations
    pub fn users(&self) -> UserRepository<'_> {
        UserRepository::new(&self.conn)
    }

    /// Expense table operations
    pub fn expenses(&self) -> ExpenseRepository<'_> {
        ExpenseRepository::new(&self.conn)
    }

    /// Raw connection, for callers that need a query the repositories lack
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Close the connection, reporting any error SQLite raises on close
    pub fn close(self) -> ExpenseResult<()> {
        debug!("Closing expense database");
        self.conn.close().map_err(|(_, e)| e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewExpense, NewUser};
    use tempfile::TempDir;

    #[test]
    fn test_open_in_memory_creates_schema() {
        let storage = Storage::open_in_memory().unwrap();
        let count: i64 = storage
            .connection()
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('users', 'expenses')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_foreign_keys_are_not_enforced() {
        let storage = Storage::open_in_memory().unwrap();
        let enforced: i64 = storage
            .connection()
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enforced, 0);

        let orphan = storage
            .expenses()
            .insert_expense(&NewExpense::new(crate::models::UserId::new(42), "Food", 3.0))
            .unwrap();
        assert_eq!(orphan.user_id.value(), 42);
    }

    #[test]
    fn test_data_survives_close_and_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.db");

        let storage = Storage::open(&path).unwrap();
        let user = storage
            .users()
            .add_user(&NewUser::new("Ada", "ada@example.com", "pw"))
            .unwrap();
        storage
            .expenses()
            .insert_expense(&NewExpense::new(user.id, "Food", 9.5))
            .unwrap();
        storage.close().unwrap();

        let storage = Storage::open(&path).unwrap();
        assert!(storage.users().get_user_by_email("ada@example.com").unwrap().is_some());
        assert_eq!(storage.expenses().fetch_all_expenses(user.id).unwrap().len(), 1);
        storage.close().unwrap();
    }
}
