//! Core data models for the expense tracker
//!
//! Users, expenses, and the aggregate rows produced by the report queries.

pub mod expense;
pub mod ids;
pub mod summary;
pub mod user;

pub use expense::{Expense, ExpenseUpdate, NewExpense};
pub use ids::{ExpenseId, UserId};
pub use summary::{BudgetStatus, CategoryTotal, MonthlyTotal};
pub use user::{NewUser, User};
