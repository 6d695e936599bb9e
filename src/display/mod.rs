//! Display formatting for terminal output
//!
//! Plain-text registers, summaries, and budget status lines.

pub mod expense;
pub mod report;

pub use expense::{format_expense_register, format_expense_row, format_user_details};
pub use report::{
    format_amount, format_budget_status, format_category_summary, format_monthly_summary,
};
