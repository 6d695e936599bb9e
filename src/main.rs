use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_budget_command, handle_expense_command, handle_report_command, handle_user_command,
    BudgetCommands, ExpenseCommands, ReportCommands, UserCommands,
};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
use expense_tracker::logging::init_tracing;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Personal expense tracking with budgets and spending summaries"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management commands
    #[command(subcommand)]
    User(UserCommands),

    /// Budget limit commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Spending reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Create the database and settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings.log_level);

    paths.ensure_directories()?;
    let storage = Storage::open(paths.database_file())?;

    let outcome = run(cli.command, &storage, &paths, &settings);
    storage.close()?;
    outcome
}

fn run(
    command: Option<Commands>,
    storage: &Storage,
    paths: &ExpensePaths,
    settings: &Settings,
) -> Result<()> {
    match command {
        Some(Commands::User(cmd)) => handle_user_command(storage, settings, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(storage, settings, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(storage, settings, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(storage, settings, cmd)?,
        Some(Commands::Init) => {
            settings.save(paths)?;
            println!("Initialized expense tracker at: {}", paths.base_dir().display());
            println!("Database: {}", paths.database_file().display());
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Database:         {}", paths.database_file().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!();
            println!("Settings:");
            println!("  Log level:       {}", settings.log_level);
            println!("  Currency symbol: {}", settings.currency_symbol);
        }
        None => {
            println!("Expense Tracker - personal expenses and budgets");
            println!();
            println!("Run 'expenses --help' for usage information.");
        }
    }

    Ok(())
}
