//! Budget CLI commands

use chrono::{Datelike, Local};
use clap::Subcommand;

use super::{login, Credentials};
use crate::config::Settings;
use crate::display::{format_amount, format_budget_status};
use crate::error::{ExpenseError, ExpenseResult};
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the monthly spending limit
    Set {
        #[command(flatten)]
        credentials: Credentials,
        /// Limit amount (e.g., "500" or "500.00")
        #[arg(allow_negative_numbers = true)]
        limit: f64,
    },

    /// Show the monthly spending limit
    Show {
        #[command(flatten)]
        credentials: Credentials,
    },

    /// Compare a month's spending against the limit
    Status {
        #[command(flatten)]
        credentials: Credentials,
        /// Month to check (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle budget commands
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> ExpenseResult<()> {
    let service = BudgetService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { credentials, limit } => {
            if !limit.is_finite() || limit < 0.0 {
                return Err(ExpenseError::Validation(format!(
                    "Budget limit must be a non-negative number, got {}",
                    limit
                )));
            }
            let user = login(storage, credentials)?;
            service.set_user_budget(user.id, limit)?;
            println!("Budget limit set to {}", format_amount(limit, symbol));
        }

        BudgetCommands::Show { credentials } => {
            let user = login(storage, credentials)?;
            let limit = service.get_user_budget(user.id)?;
            if limit > 0.0 {
                println!("Budget limit: {}", format_amount(limit, symbol));
            } else {
                println!("No budget limit set.");
            }
        }

        BudgetCommands::Status { credentials, month } => {
            let user = login(storage, credentials)?;
            let (year, month) = match month {
                Some(period) => parse_period(&period)?,
                None => {
                    let today = Local::now().date_naive();
                    (today.year(), today.month())
                }
            };

            let status = service.budget_status(user.id, year, month)?;
            println!("{}", format_budget_status(&status, symbol));
        }
    }

    Ok(())
}

/// Parse a `YYYY-MM` period
fn parse_period(s: &str) -> ExpenseResult<(i32, u32)> {
    let invalid = || ExpenseError::Validation(format!("Invalid month '{}'. Use YYYY-MM", s));

    let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }

    Ok((year, month))
}
