//! Expense repository
//!
//! Expense CRUD plus the aggregate queries behind the reports. Dates are
//! stored as `YYYY-MM-DD` text, so `ORDER BY "date"` and `strftime` both work
//! directly on the column.

use chrono::{Local, NaiveDate};
use rusqlite::{params, types::ToSql, Connection, OptionalExtension, Row};
use tracing::debug;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{
    CategoryTotal, Expense, ExpenseId, ExpenseUpdate, MonthlyTotal, NewExpense, UserId,
};

const EXPENSE_COLUMNS: &str = "id, user_id, \"date\", category, amount, description";

/// Queries and mutations against the `expenses` table
pub struct ExpenseRepository<'a> {
    conn: &'a Connection,
}

impl<'a> ExpenseRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert an expense, dating it today when no date was given
    pub fn insert_expense(&self, input: &NewExpense) -> ExpenseResult<Expense> {
        let date = input.date.unwrap_or_else(today);

        self.conn.execute(
            "INSERT INTO expenses (user_id, \"date\", category, amount, description)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                input.user_id,
                date,
                input.category,
                input.amount,
                input.description
            ],
        )?;
        let id = ExpenseId::new(self.conn.last_insert_rowid());
        debug!(expense_id = %id, user_id = %input.user_id, %date, "Inserted expense");

        Ok(Expense {
            id,
            user_id: input.user_id,
            date,
            category: input.category.clone(),
            amount: input.amount,
            description: input.description.clone(),
        })
    }

    pub fn get_expense(&self, expense_id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        let expense = self
            .conn
            .query_row(
                &format!("SELECT {EXPENSE_COLUMNS} FROM expenses WHERE id = ?1"),
                params![expense_id],
                expense_from_row,
            )
            .optional()?;
        Ok(expense)
    }

    /// All of a user's expenses, newest first, ties in insertion order
    pub fn fetch_all_expenses(&self, user_id: UserId) -> ExpenseResult<Vec<Expense>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {EXPENSE_COLUMNS} FROM expenses
             WHERE user_id = ?1
             ORDER BY \"date\" DESC, id ASC"
        ))?;
        let expenses = stmt
            .query_map(params![user_id], expense_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(expenses)
    }

    /// A user's expenses in one category (exact match), newest first
    pub fn filter_by_category(
        &self,
        user_id: UserId,
        category: &str,
    ) -> ExpenseResult<Vec<Expense>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {EXPENSE_COLUMNS} FROM expenses
             WHERE user_id = ?1 AND category = ?2
             ORDER BY \"date\" DESC, id ASC"
        ))?;
        let expenses = stmt
            .query_map(params![user_id, category], expense_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(expenses)
    }

    /// Total spent in a calendar month across all years
    ///
    /// `month` is a number in text form (`"3"` and `"03"` are both March).
    pub fn fetch_by_month(&self, user_id: UserId, month: &str) -> ExpenseResult<f64> {
        let month = parse_month(month)?;
        self.sum_where(
            "strftime('%m', \"date\") = ?2",
            user_id,
            format!("{:02}", month),
        )
    }

    /// Total spent in a year
    pub fn fetch_by_year(&self, user_id: UserId, year: i32) -> ExpenseResult<f64> {
        self.sum_where(
            "strftime('%Y', \"date\") = ?2",
            user_id,
            format!("{:04}", year),
        )
    }

    /// Total spent in one month of one year
    pub fn fetch_by_year_month(
        &self,
        user_id: UserId,
        year: i32,
        month: u32,
    ) -> ExpenseResult<f64> {
        check_month(month)?;
        self.sum_where(
            "strftime('%Y-%m', \"date\") = ?2",
            user_id,
            format!("{:04}-{:02}", year, month),
        )
    }

    /// Per-category totals, ordered by category
    pub fn fetch_category_summary(&self, user_id: UserId) -> ExpenseResult<Vec<CategoryTotal>> {
        let mut stmt = self.conn.prepare(
            "SELECT category, SUM(amount) FROM expenses
             WHERE user_id = ?1
             GROUP BY category
             ORDER BY category",
        )?;
        let rows = stmt
            .query_map(params![user_id], |row| {
                Ok(CategoryTotal {
                    category: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
                    total: row.get::<_, Option<f64>>(1)?.unwrap_or(0.0),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Per-month totals (`"01"`..`"12"`, years folded together), ascending
    pub fn fetch_monthly_summary(&self, user_id: UserId) -> ExpenseResult<Vec<MonthlyTotal>> {
        let mut stmt = self.conn.prepare(
            "SELECT strftime('%m', \"date\") AS month, SUM(amount) FROM expenses
             WHERE user_id = ?1
             GROUP BY month
             ORDER BY month",
        )?;
        let rows = stmt
            .query_map(params![user_id], |row| {
                Ok(MonthlyTotal {
                    month: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
                    total: row.get::<_, Option<f64>>(1)?.unwrap_or(0.0),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Delete by id with no ownership check
    ///
    /// Returns whether a row was removed; a missing id is not an error.
    pub fn delete_expense_by_id(&self, expense_id: ExpenseId) -> ExpenseResult<bool> {
        let rows = self
            .conn
            .execute("DELETE FROM expenses WHERE id = ?1", params![expense_id])?;
        debug!(expense_id = %expense_id, rows, "Deleted expense");
        Ok(rows > 0)
    }

    /// Write the fields present in `update`
    ///
    /// Returns whether a row was changed. An empty update issues no SQL.
    pub fn update_expense_by_id(
        &self,
        expense_id: ExpenseId,
        update: &ExpenseUpdate,
    ) -> ExpenseResult<bool> {
        if update.is_empty() {
            return Ok(false);
        }

        let mut assignments: Vec<&str> = Vec::new();
        let mut values: Vec<&dyn ToSql> = Vec::new();

        if let Some(date) = &update.date {
            assignments.push("\"date\" = ?");
            values.push(date);
        }
        if let Some(category) = &update.category {
            assignments.push("category = ?");
            values.push(category);
        }
        if let Some(amount) = &update.amount {
            assignments.push("amount = ?");
            values.push(amount);
        }
        if let Some(description) = &update.description {
            assignments.push("description = ?");
            values.push(description);
        }
        values.push(&expense_id);

        let sql = format!(
            "UPDATE expenses SET {} WHERE id = ?",
            assignments.join(", ")
        );
        let rows = self.conn.execute(&sql, values.as_slice())?;
        debug!(expense_id = %expense_id, fields = assignments.len(), rows, "Updated expense");

        Ok(rows > 0)
    }

    fn sum_where(&self, condition: &str, user_id: UserId, key: String) -> ExpenseResult<f64> {
        let total: Option<f64> = self.conn.query_row(
            &format!("SELECT SUM(amount) FROM expenses WHERE user_id = ?1 AND {condition}"),
            params![user_id, key],
            |row| row.get(0),
        )?;
        Ok(total.unwrap_or(0.0))
    }
}

fn expense_from_row(row: &Row<'_>) -> rusqlite::Result<Expense> {
    Ok(Expense {
        id: row.get(0)?,
        user_id: row.get(1)?,
        date: row.get(2)?,
        category: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        amount: row.get::<_, Option<f64>>(4)?.unwrap_or(0.0),
        description: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
    })
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a month number given as text
pub fn parse_month(month: &str) -> ExpenseResult<u32> {
    let value: u32 = month
        .trim()
        .parse()
        .map_err(|_| ExpenseError::Validation(format!("Invalid month: '{}'", month)))?;
    check_month(value)?;
    Ok(value)
}

fn check_month(month: u32) -> ExpenseResult<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(ExpenseError::Validation(format!(
            "Month must be between 1 and 12, got {}",
            month
        )))
    }
}
