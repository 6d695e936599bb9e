//! Expense CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use super::{check_amount, create_output, login, parse_date, Credentials};
use crate::config::Settings;
use crate::display::format_expense_register;
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::export_expenses_csv;
use crate::models::{ExpenseId, ExpenseUpdate, NewExpense};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        #[command(flatten)]
        credentials: Credentials,
        /// Amount spent
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Category name
        #[arg(short, long)]
        category: String,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },

    /// List expenses, newest first
    List {
        #[command(flatten)]
        credentials: Credentials,
        /// Only show this category (exact match)
        #[arg(short, long)]
        category: Option<String>,
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Change fields of an expense
    Update {
        #[command(flatten)]
        credentials: Credentials,
        /// Expense ID (e.g., "exp-12" or "12")
        id: ExpenseId,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long, allow_negative_numbers = true)]
        amount: Option<f64>,
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete an expense
    Delete {
        #[command(flatten)]
        credentials: Credentials,
        /// Expense ID (e.g., "exp-12" or "12")
        id: ExpenseId,
    },
}

/// Handle expense commands
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            credentials,
            amount,
            category,
            date,
            description,
        } => {
            let user = login(storage, credentials)?;

            let mut input = NewExpense::new(user.id, category.trim(), check_amount(amount)?);
            input.date = date.as_deref().map(parse_date).transpose()?;
            input.description = description.unwrap_or_default();

            let expense = service.add_expense(input)?;
            println!("Added expense {} on {}", expense.id, expense.date);
        }

        ExpenseCommands::List {
            credentials,
            category,
            output,
        } => {
            let user = login(storage, credentials)?;
            let expenses = match category {
                Some(category) => service.filter_expenses_by_category(user.id, category.trim())?,
                None => service.get_expenses(user.id)?,
            };

            if let Some(path) = output {
                export_expenses_csv(&expenses, create_output(&path)?)?;
                println!("Exported {} expenses to: {}", expenses.len(), path.display());
            } else {
                print!(
                    "{}",
                    format_expense_register(&expenses, &settings.currency_symbol)
                );
            }
        }

        ExpenseCommands::Update {
            credentials,
            id,
            date,
            category,
            amount,
            description,
        } => {
            login(storage, credentials)?;

            let update = ExpenseUpdate {
                date: date.as_deref().map(parse_date).transpose()?,
                category: category.map(|c| c.trim().to_string()),
                amount: amount.map(check_amount).transpose()?,
                description,
            };
            if update.is_empty() {
                println!("No changes specified. Use --date, --category, --amount or --description.");
                return Ok(());
            }

            if service.update_expense(id, update)? {
                println!("Updated expense {}", id);
            } else {
                return Err(ExpenseError::expense_not_found(id.to_string()));
            }
        }

        ExpenseCommands::Delete { credentials, id } => {
            login(storage, credentials)?;

            if service.delete_expense(id)? {
                println!("Deleted expense {}", id);
            } else {
                println!("No expense with ID {}", id);
            }
        }
    }

    Ok(())
}
