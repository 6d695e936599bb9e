//! Expense Tracker - personal expense tracking data layer
//!
//! User accounts with secret-based recovery, a per-user budget limit, and
//! categorized expenses with monthly, yearly, and per-category totals, all
//! stored in a single SQLite database.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and settings
//! - `error`: Custom error types
//! - `models`: Users, expenses, and report rows
//! - `crypto`: Argon2id hashing for passwords and recovery secrets
//! - `storage`: SQLite gateway (tables, queries, mutations)
//! - `services`: Domain façade grouped by users, budgets, and expenses
//! - `export`: CSV export
//! - `display` / `cli`: Terminal front end
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::models::{NewExpense, NewUser};
//! use expense_tracker::services::{ExpenseService, UserService};
//! use expense_tracker::storage::Storage;
//!
//! # fn main() -> expense_tracker::ExpenseResult<()> {
//! let storage = Storage::open("expenses.db")?;
//! let user = UserService::new(&storage)
//!     .register_user(NewUser::new("Ada", "ada@example.com", "pw").secret("blue"))?;
//!
//! let expenses = ExpenseService::new(&storage);
//! expenses.add_expense(NewExpense::new(user.id, "Food", 12.5))?;
//! let march = expenses.get_total_by_month(user.id, "3")?;
//! # let _ = march;
//! storage.close()?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
