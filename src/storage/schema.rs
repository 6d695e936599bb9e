//! Table definitions
//!
//! Both creators are idempotent and safe to run on every startup.

use rusqlite::Connection;

use crate::error::ExpenseResult;

/// Create the `users` table if it doesn't exist
pub fn create_user_table(conn: &Connection) -> ExpenseResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT UNIQUE NOT NULL,
            password TEXT NOT NULL,
            gender TEXT,
            secret TEXT,
            budget_limit REAL DEFAULT 0
        );",
    )?;
    Ok(())
}

/// Create the `expenses` table if it doesn't exist
///
/// The foreign key is declared for documentation only; foreign key
/// enforcement stays off, so deleting a user leaves their expenses behind.
pub fn create_expense_table(conn: &Connection) -> ExpenseResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS expenses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER,
            \"date\" TEXT,
            category TEXT,
            amount REAL,
            description TEXT,
            FOREIGN KEY(user_id) REFERENCES users(id)
        );

        CREATE INDEX IF NOT EXISTS idx_expenses_user_date
            ON expenses(user_id, \"date\");",
    )?;
    Ok(())
}

/// Create every table the gateway needs
pub fn initialize_schema(conn: &Connection) -> ExpenseResult<()> {
    create_user_table(conn)?;
    create_expense_table(conn)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_names(conn: &Connection) -> Vec<String> {
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<String>, _>>()
            .unwrap()
    }

    #[test]
    fn test_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();
        initialize_schema(&conn).unwrap();

        assert_eq!(table_names(&conn), vec!["expenses", "users"]);
    }

    #[test]
    fn test_budget_limit_defaults_to_zero() {
        let conn = Connection::open_in_memory().unwrap();
        create_user_table(&conn).unwrap();
        conn.execute(
            "INSERT INTO users (name, email, password) VALUES ('a', 'a@x', 'h')",
            [],
        )
        .unwrap();

        let limit: f64 = conn
            .query_row("SELECT budget_limit FROM users", [], |row| row.get(0))
            .unwrap();
        assert_eq!(limit, 0.0);
    }
}
