//! Export functionality
//!
//! CSV output for expense lists and summaries.

pub mod csv;

pub use self::csv::{export_category_summary_csv, export_expenses_csv, export_monthly_summary_csv};
