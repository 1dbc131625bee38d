//! CLI command for data export

use std::path::PathBuf;

use clap::Args;

use crate::error::FinanceResult;
use crate::export::Exporter;
use crate::services::FinanceService;

/// Export the full dataset to a directory
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output directory (created if absent)
    pub output: PathBuf,

    /// Export format: json, csv or yaml (case-insensitive)
    #[arg(short, long, default_value = "json")]
    pub format: String,
}

/// Handle the export command
pub fn handle_export_command(service: &FinanceService, args: ExportArgs) -> FinanceResult<()> {
    Exporter::new(service).export_named(&args.output, &args.format)?;
    println!(
        "Exported all data to {} ({} format)",
        args.output.display(),
        args.format.to_lowercase()
    );
    Ok(())
}
