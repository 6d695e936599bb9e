//! User CLI commands
//!
//! Registration, login, and recovery.

use clap::Subcommand;

use super::{login, normalize_registration, read_secret, Credentials};
use crate::config::Settings;
use crate::display::format_user_details;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::NewUser;
use crate::services::UserService;
use crate::storage::Storage;

/// User subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Create a new account
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Account email (must be unique)
        #[arg(short, long)]
        email: String,
        /// Password (prompted when omitted)
        #[arg(long, env = "EXPENSE_TRACKER_PASSWORD", hide_env_values = true)]
        password: Option<String>,
        #[arg(short, long)]
        gender: Option<String>,
        /// Recovery secret for password reset and account deletion
        #[arg(short, long)]
        secret: Option<String>,
    },

    /// Check credentials and show the account
    Login {
        #[command(flatten)]
        credentials: Credentials,
    },

    /// Check whether an account exists for an email
    Lookup {
        email: String,
    },

    /// Reset a forgotten password using the recovery secret
    #[command(name = "reset-password")]
    ResetPassword {
        #[arg(short, long)]
        email: String,
        /// Recovery secret (prompted when omitted)
        #[arg(short, long)]
        secret: Option<String>,
        /// New password (prompted when omitted)
        #[arg(long)]
        new_password: Option<String>,
    },

    /// Delete an account using the recovery secret
    Delete {
        #[arg(short, long)]
        email: String,
        /// Recovery secret (prompted when omitted)
        #[arg(short, long)]
        secret: Option<String>,
    },
}

/// Handle user commands
pub fn handle_user_command(
    storage: &Storage,
    settings: &Settings,
    cmd: UserCommands,
) -> ExpenseResult<()> {
    let service = UserService::new(storage);

    match cmd {
        UserCommands::Register {
            name,
            email,
            password,
            gender,
            secret,
        } => {
            let password = read_secret(password, "Password: ")?;

            let mut input = NewUser::new(name, email, password.as_str());
            input.gender = gender;
            input.secret = secret;

            let user = service.register_user(normalize_registration(input)?)?;
            println!("Registered {} ({})", user.email, user.id);
            if !user.has_recovery_secret() {
                println!("No recovery secret set; the password cannot be reset.");
            }
        }

        UserCommands::Login { credentials } => {
            let user = login(storage, credentials)?;
            print!("{}", format_user_details(&user, &settings.currency_symbol));
        }

        UserCommands::Lookup { email } => {
            let user = service
                .recover_user(email.trim())?
                .ok_or_else(|| ExpenseError::user_not_found(&email))?;
            println!("Account found for {}", user.email);
            println!(
                "Recovery: {}",
                if user.has_recovery_secret() {
                    "secret set"
                } else {
                    "none"
                }
            );
        }

        UserCommands::ResetPassword {
            email,
            secret,
            new_password,
        } => {
            let secret = read_secret(secret, "Recovery secret: ")?;
            let new_password = read_secret(new_password, "New password: ")?;
            if new_password.is_empty() {
                return Err(ExpenseError::Validation("Password cannot be empty".into()));
            }

            if service.update_user_password(email.trim(), &secret, &new_password)? {
                println!("Password updated for {}", email.trim());
            } else {
                return Err(ExpenseError::Validation(
                    "Email and recovery secret do not match".into(),
                ));
            }
        }

        UserCommands::Delete { email, secret } => {
            let secret = read_secret(secret, "Recovery secret: ")?;

            if service.delete_user(email.trim(), &secret)? {
                println!("Deleted account {}", email.trim());
            } else {
                return Err(ExpenseError::Validation(
                    "Email and recovery secret do not match".into(),
                ));
            }
        }
    }

    Ok(())
}
