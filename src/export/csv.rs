//! CSV export
//!
//! Writes one shared file per entity kind (`accounts.csv`, `categories.csv`,
//! `operations.csv`), appending one row per instance. Fields are written in
//! a fixed order with timestamps as `YYYY-MM-DD HH:MM:SS`. There is no
//! header row and no quoting; a field value containing the delimiter will
//! corrupt its row.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Account, Category, Operation};

use super::EntityWriter;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Per-kind appending CSV writer
pub struct CsvWriter {
    output_dir: PathBuf,
}

impl CsvWriter {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
        }
    }

    fn append_line(&self, file_name: &str, line: &str) -> FinanceResult<()> {
        let path = self.output_dir.join(file_name);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| FinanceError::Export(format!("{}: {e}", path.display())))?;
        writeln!(file, "{line}")
            .map_err(|e| FinanceError::Export(format!("{}: {e}", path.display())))
    }
}

fn format_ts(ts: DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

impl EntityWriter for CsvWriter {
    fn visit_account(&mut self, account: &Account) -> FinanceResult<()> {
        let line = format!(
            "{},{},{},{},{}",
            account.id.as_uuid(),
            account.name,
            account.currency,
            account.balance().to_decimal_string(),
            format_ts(account.created_at),
        );
        self.append_line("accounts.csv", &line)
    }

    fn visit_category(&mut self, category: &Category) -> FinanceResult<()> {
        let line = format!(
            "{},{},{},{},{}",
            category.id.as_uuid(),
            category.name,
            category.kind,
            category.description,
            format_ts(category.created_at),
        );
        self.append_line("categories.csv", &line)
    }

    fn visit_operation(&mut self, operation: &Operation) -> FinanceResult<()> {
        let line = format!(
            "{},{},{},{},{},{}",
            operation.id.as_uuid(),
            operation.account_id.as_uuid(),
            operation.category_id.as_uuid(),
            operation.amount.to_decimal_string(),
            operation.description,
            format_ts(operation.date),
        );
        self.append_line("operations.csv", &line)
    }
}
