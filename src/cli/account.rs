//! CLI commands for account management

use clap::Subcommand;

use crate::display;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{AccountId, Money};
use crate::services::FinanceService;

/// Account subcommands
#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Create a new account
    Add {
        /// Account name
        name: String,
        /// Currency code (e.g. USD)
        currency: String,
        /// Initial balance, e.g. "100.00"
        #[arg(short, long, default_value = "0")]
        balance: String,
    },
    /// List all accounts
    List,
    /// Show one account in detail
    Show {
        /// Account id
        id: AccountId,
    },
    /// Delete an account
    Delete {
        /// Account id
        id: AccountId,
    },
}

/// Handle account commands
pub fn handle_account_command(
    service: &FinanceService,
    cmd: AccountCommands,
) -> FinanceResult<()> {
    match cmd {
        AccountCommands::Add {
            name,
            currency,
            balance,
        } => {
            let balance =
                Money::parse(&balance).map_err(|e| FinanceError::Validation(e.to_string()))?;
            let account = service.create_account(&name, &currency, balance)?;
            println!(
                "Created account '{}' ({})",
                account.name,
                account.id.as_uuid()
            );
        }
        AccountCommands::List => {
            let accounts = service.accounts()?;
            println!("{}", display::format_account_list(&accounts));
        }
        AccountCommands::Show { id } => {
            let account = service
                .account(id)?
                .ok_or_else(|| FinanceError::account_not_found(id.to_string()))?;
            println!("{}", display::format_account_details(&account));
        }
        AccountCommands::Delete { id } => {
            service.delete_account(id)?;
            println!("Deleted account {}", id);
        }
    }

    Ok(())
}
