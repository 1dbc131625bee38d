//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. This is the only
//! layer that reports errors to the user; everything below propagates them.

pub mod account;
pub mod category;
pub mod export;
pub mod import;
pub mod operation;
pub mod report;

pub use account::{handle_account_command, AccountCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export_command, ExportArgs};
pub use import::{handle_import_command, ImportArgs};
pub use operation::{handle_operation_command, OperationCommands};
pub use report::{handle_report_command, ReportCommands};

use std::time::Instant;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use tracing::{debug, error};

use crate::error::FinanceResult;

/// Run a command handler, recording how long it took
///
/// Failures are logged with the elapsed time and re-raised unchanged.
pub fn run_timed<T>(name: &str, action: impl FnOnce() -> FinanceResult<T>) -> FinanceResult<T> {
    let started = Instant::now();
    match action() {
        Ok(value) => {
            debug!(
                command = name,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "command finished"
            );
            Ok(value)
        }
        Err(err) => {
            error!(
                command = name,
                elapsed_ms = started.elapsed().as_millis() as u64,
                error = %err,
                "command failed"
            );
            Err(err)
        }
    }
}

/// First instant of the given day, UTC
pub(crate) fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Last whole second of the given day, UTC
///
/// Used for inclusive `--to` bounds.
pub(crate) fn day_end(date: NaiveDate) -> DateTime<Utc> {
    day_start(date) + Duration::days(1) - Duration::seconds(1)
}
