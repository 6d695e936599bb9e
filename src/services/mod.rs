//! Service layer for the expense tracker
//!
//! Thin façades over the storage gateway, grouped by business concept:
//! user accounts, budget limits, and expenses/reports.

pub mod budget;
pub mod expense;
pub mod user;

pub use budget::BudgetService;
pub use expense::ExpenseService;
pub use user::UserService;
