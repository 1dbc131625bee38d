//! CLI commands for operation management

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{AccountId, CategoryId, Money, OperationId};
use crate::services::FinanceService;

use super::{day_end, day_start};

/// Operation subcommands
#[derive(Subcommand, Debug)]
pub enum OperationCommands {
    /// Record a new operation
    Add {
        /// Account id
        account: AccountId,
        /// Category id; its kind decides the sign of the stored amount
        category: CategoryId,
        /// Amount, e.g. "30.00" (sign is derived from the category)
        amount: String,
        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Operation date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List operations
    List {
        /// Filter by account id
        #[arg(short, long)]
        account: Option<AccountId>,
        /// Filter by category id
        #[arg(short, long)]
        category: Option<CategoryId>,
        /// Start of an inclusive date range (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// End of an inclusive date range (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Delete an operation
    Delete {
        /// Operation id
        id: OperationId,
    },
}

/// Handle operation commands
pub fn handle_operation_command(
    service: &FinanceService,
    cmd: OperationCommands,
) -> FinanceResult<()> {
    match cmd {
        OperationCommands::Add {
            account,
            category,
            amount,
            description,
            date,
        } => {
            let amount =
                Money::parse(&amount).map_err(|e| FinanceError::Validation(e.to_string()))?;
            let operation = service.create_operation(
                account,
                category,
                amount,
                &description,
                date.map(day_start),
            )?;
            println!(
                "Recorded operation {} for {}",
                operation.id.as_uuid(),
                operation.amount
            );
        }
        OperationCommands::List {
            account,
            category,
            from,
            to,
        } => {
            let operations = match (account, category, from, to) {
                (Some(account), None, None, None) => service.operations_by_account(account)?,
                (None, Some(category), None, None) => {
                    service.operations_by_category(category)?
                }
                (None, None, Some(from), Some(to)) => {
                    service.operations_by_date_range(day_start(from), day_end(to))?
                }
                (None, None, None, None) => service.operations()?,
                _ => {
                    return Err(FinanceError::Validation(
                        "use one filter: --account, --category, or --from with --to".into(),
                    ))
                }
            };

            let accounts = service.accounts()?;
            let categories = service.categories()?;
            println!(
                "{}",
                display::format_operation_list(&operations, &accounts, &categories)
            );
        }
        OperationCommands::Delete { id } => {
            service.delete_operation(id)?;
            println!("Deleted operation {}", id);
        }
    }

    Ok(())
}
