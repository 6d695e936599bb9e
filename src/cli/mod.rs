//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod expense;
pub mod report;
pub mod user;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use report::{handle_report_command, ReportCommands};
pub use user::{handle_user_command, UserCommands};

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::NaiveDate;
use clap::Args;
use zeroize::Zeroizing;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{NewUser, User};
use crate::services::UserService;
use crate::storage::Storage;

/// Login arguments shared by every command that acts for a user
#[derive(Args, Debug)]
pub struct Credentials {
    /// Account email
    #[arg(short, long, env = "EXPENSE_TRACKER_EMAIL")]
    pub email: String,

    /// Account password (prompted when omitted)
    #[arg(long, env = "EXPENSE_TRACKER_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

/// Authenticate the caller, failing if the credentials don't match
pub fn login(storage: &Storage, credentials: Credentials) -> ExpenseResult<User> {
    let password = read_secret(credentials.password, "Password: ")?;
    UserService::new(storage)
        .authenticate_user(credentials.email.trim(), &password)?
        .ok_or_else(|| ExpenseError::Validation("Invalid email or password".into()))
}

/// Use the flag value if given, otherwise prompt with hidden input
pub fn read_secret(value: Option<String>, prompt: &str) -> ExpenseResult<Zeroizing<String>> {
    match value {
        Some(value) => Ok(Zeroizing::new(value)),
        None => rpassword::prompt_password(prompt)
            .map(Zeroizing::new)
            .map_err(|e| ExpenseError::Io(format!("Failed to read input: {}", e))),
    }
}

/// Trim registration input and require name, email and password
///
/// A blank gender or recovery secret is treated as not given.
pub fn normalize_registration(mut input: NewUser) -> ExpenseResult<NewUser> {
    input.name = input.name.trim().to_string();
    input.email = input.email.trim().to_string();

    if input.name.is_empty() {
        return Err(ExpenseError::Validation("Name cannot be empty".into()));
    }
    if input.email.is_empty() {
        return Err(ExpenseError::Validation("Email cannot be empty".into()));
    }
    if input.password.is_empty() {
        return Err(ExpenseError::Validation("Password cannot be empty".into()));
    }

    input.gender = input
        .gender
        .take()
        .map(|g| g.trim().to_string())
        .filter(|g| !g.is_empty());
    input.secret = input.secret.take().filter(|s| !s.is_empty());

    Ok(input)
}

/// Reject NaN and infinite amounts
pub fn check_amount(amount: f64) -> ExpenseResult<f64> {
    if amount.is_finite() {
        Ok(amount)
    } else {
        Err(ExpenseError::Validation(format!(
            "Amount must be a finite number, got {}",
            amount
        )))
    }
}

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(s: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        ExpenseError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", s))
    })
}

/// Create an output file for CSV export
pub fn create_output(path: &Path) -> ExpenseResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
