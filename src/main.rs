use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fintrack_cli::cli::{
    handle_account_command, handle_category_command, handle_export_command,
    handle_import_command, handle_operation_command, handle_report_command, run_timed,
    AccountCommands, CategoryCommands, ExportArgs, ImportArgs, OperationCommands, ReportCommands,
};
use fintrack_cli::config::FintrackPaths;
use fintrack_cli::services::FinanceService;
use fintrack_cli::storage::Storage;
use fintrack_cli::FinanceResult;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Command-line personal finance tracker",
    long_about = "fintrack tracks bank accounts, income/expense categories, and dated \
                  monetary operations in a local SQLite database, with aggregate \
                  reports and export to JSON, CSV, or YAML."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Operation management commands
    #[command(subcommand, alias = "op")]
    Operation(OperationCommands),

    /// Analytics reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export all data to a directory
    Export(ExportArgs),

    /// Import operations from a CSV file
    Import(ImportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let paths = FintrackPaths::new()?;
    paths.ensure_directories()?;
    let service = FinanceService::new(Storage::open(&paths.db_file())?);

    let result: FinanceResult<()> = match cli.command {
        Commands::Account(cmd) => {
            run_timed("account", || handle_account_command(&service, cmd))
        }
        Commands::Category(cmd) => {
            run_timed("category", || handle_category_command(&service, cmd))
        }
        Commands::Operation(cmd) => {
            run_timed("operation", || handle_operation_command(&service, cmd))
        }
        Commands::Report(cmd) => run_timed("report", || handle_report_command(&service, cmd)),
        Commands::Export(args) => run_timed("export", || handle_export_command(&service, args)),
        Commands::Import(args) => run_timed("import", || handle_import_command(&service, args)),
        Commands::Config => {
            println!("fintrack configuration");
            println!("  Data directory: {}", paths.base_dir().display());
            println!("  Database:       {}", paths.db_file().display());
            Ok(())
        }
    };

    result?;
    Ok(())
}
