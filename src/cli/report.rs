//! CLI commands for analytics reports

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display;
use crate::error::FinanceResult;
use crate::models::AccountId;
use crate::services::FinanceService;

use super::{day_end, day_start};

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Total balance across all accounts
    Balance,
    /// Balance of one account computed from its operations
    Account {
        /// Account id
        id: AccountId,
    },
    /// Net total of operations over an inclusive date range
    Period {
        /// Start date (YYYY-MM-DD)
        from: NaiveDate,
        /// End date (YYYY-MM-DD)
        to: NaiveDate,
    },
    /// Expense totals per category
    Expenses {
        /// Start date (YYYY-MM-DD)
        from: NaiveDate,
        /// End date (YYYY-MM-DD)
        to: NaiveDate,
    },
    /// Income totals per category
    Income {
        /// Start date (YYYY-MM-DD)
        from: NaiveDate,
        /// End date (YYYY-MM-DD)
        to: NaiveDate,
    },
}

/// Handle report commands
pub fn handle_report_command(service: &FinanceService, cmd: ReportCommands) -> FinanceResult<()> {
    match cmd {
        ReportCommands::Balance => {
            println!("Total balance: {}", service.total_balance()?);
        }
        ReportCommands::Account { id } => {
            println!("Account balance: {}", service.balance_by_account(id)?);
        }
        ReportCommands::Period { from, to } => {
            let total = service.total_by_period(day_start(from), day_end(to))?;
            println!("Net total {} to {}: {}", from, to, total);
        }
        ReportCommands::Expenses { from, to } => {
            let totals = service.expenses_by_category(day_start(from), day_end(to))?;
            println!("{}", display::format_category_totals(&totals));
        }
        ReportCommands::Income { from, to } => {
            let totals = service.income_by_category(day_start(from), day_end(to))?;
            println!("{}", display::format_category_totals(&totals));
        }
    }

    Ok(())
}
