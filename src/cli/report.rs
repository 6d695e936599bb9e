//! CLI commands for reports
//!
//! Totals by month and year, and grouped summaries with optional CSV export.

use std::path::PathBuf;

use clap::Subcommand;

use super::{create_output, login, Credentials};
use crate::config::Settings;
use crate::display::{format_amount, format_category_summary, format_monthly_summary};
use crate::error::ExpenseResult;
use crate::export::{export_category_summary_csv, export_monthly_summary_csv};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Total spent in a month number (1-12), across all years
    Month {
        #[command(flatten)]
        credentials: Credentials,
        month: String,
    },

    /// Total spent in a year
    Year {
        #[command(flatten)]
        credentials: Credentials,
        year: i32,
    },

    /// Totals per category
    Categories {
        #[command(flatten)]
        credentials: Credentials,
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Totals per month
    Monthly {
        #[command(flatten)]
        credentials: Credentials,
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Month { credentials, month } => {
            let user = login(storage, credentials)?;
            let total = service.get_total_by_month(user.id, &month)?;
            println!("Total for month {}: {}", month.trim(), format_amount(total, symbol));
        }

        ReportCommands::Year { credentials, year } => {
            let user = login(storage, credentials)?;
            let total = service.get_total_by_year(user.id, year)?;
            println!("Total for {}: {}", year, format_amount(total, symbol));
        }

        ReportCommands::Categories {
            credentials,
            output,
        } => {
            let user = login(storage, credentials)?;
            let rows = service.get_category_summary(user.id)?;

            if let Some(path) = output {
                export_category_summary_csv(&rows, create_output(&path)?)?;
                println!("Category summary exported to: {}", path.display());
            } else {
                print!("{}", format_category_summary(&rows, symbol));
            }
        }

        ReportCommands::Monthly {
            credentials,
            output,
        } => {
            let user = login(storage, credentials)?;
            let rows = service.get_monthly_summary(user.id)?;

            if let Some(path) = output {
                export_monthly_summary_csv(&rows, create_output(&path)?)?;
                println!("Monthly summary exported to: {}", path.display());
            } else {
                print!("{}", format_monthly_summary(&rows, symbol));
            }
        }
    }

    Ok(())
}
