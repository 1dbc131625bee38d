//! CSV operation import
//!
//! Reads dated amounts from a CSV file and records them as operations
//! through the finance service, so sign normalization and the balance
//! update apply exactly as they do for manually entered operations.

use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use csv::ReaderBuilder;
use tracing::info;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{AccountId, CategoryId, Money};
use crate::services::FinanceService;

/// Column layout of the CSV file being imported
#[derive(Debug, Clone)]
pub struct CsvLayout {
    /// Index of the date column
    pub date_column: usize,
    /// Index of the amount column
    pub amount_column: usize,
    /// Index of the description column, if any
    pub description_column: Option<usize>,
    /// Date format string (e.g., "%Y-%m-%d", "%m/%d/%Y")
    pub date_format: String,
    /// Whether the first row is a header
    pub has_header: bool,
}

impl Default for CsvLayout {
    fn default() -> Self {
        Self {
            date_column: 0,
            amount_column: 1,
            description_column: Some(2),
            date_format: "%Y-%m-%d".to_string(),
            has_header: true,
        }
    }
}

/// Import operations from a CSV file into one account and category
///
/// Returns the number of operations created. Any malformed row aborts the
/// import; rows already imported stay recorded.
pub fn import_operations(
    service: &FinanceService,
    account_id: AccountId,
    category_id: CategoryId,
    path: &Path,
    layout: &CsvLayout,
) -> FinanceResult<usize> {
    let mut reader = ReaderBuilder::new()
        .has_headers(layout.has_header)
        .flexible(true)
        .from_path(path)
        .map_err(|e| FinanceError::Import(e.to_string()))?;

    let mut imported = 0;

    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| FinanceError::Import(e.to_string()))?;
        let row = index + 1;

        let field = |column: usize| {
            record
                .get(column)
                .ok_or_else(|| FinanceError::Import(format!("row {row}: missing column {column}")))
        };

        let date = NaiveDate::parse_from_str(field(layout.date_column)?, &layout.date_format)
            .map_err(|e| FinanceError::Import(format!("row {row}: bad date: {e}")))?
            .and_time(NaiveTime::MIN)
            .and_utc();

        let amount = Money::parse(field(layout.amount_column)?)
            .map_err(|e| FinanceError::Import(format!("row {row}: {e}")))?;

        let description = match layout.description_column {
            Some(column) => record.get(column).unwrap_or("").to_string(),
            None => String::new(),
        };

        service.create_operation(account_id, category_id, amount, &description, Some(date))?;
        imported += 1;
    }

    info!(count = imported, "operations imported");
    Ok(imported)
}
