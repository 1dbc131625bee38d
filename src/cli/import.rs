//! CLI command for CSV operation import

use std::path::PathBuf;

use clap::Args;

use crate::error::FinanceResult;
use crate::models::{AccountId, CategoryId};
use crate::services::{import_operations, CsvLayout, FinanceService};

/// Import operations from a CSV file
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Path to the CSV file (columns: date, amount, description)
    pub file: PathBuf,

    /// Account the operations are recorded against
    #[arg(short, long)]
    pub account: AccountId,

    /// Category the operations are attributed to
    #[arg(short, long)]
    pub category: CategoryId,

    /// Date format of the date column
    #[arg(long, default_value = "%Y-%m-%d")]
    pub date_format: String,

    /// The file has no header row
    #[arg(long)]
    pub no_header: bool,
}

/// Handle the import command
pub fn handle_import_command(service: &FinanceService, args: ImportArgs) -> FinanceResult<()> {
    let layout = CsvLayout {
        date_format: args.date_format,
        has_header: !args.no_header,
        ..CsvLayout::default()
    };

    let imported = import_operations(service, args.account, args.category, &args.file, &layout)?;
    println!("Imported {} operations from {}", imported, args.file.display());
    Ok(())
}
