//! JSON export
//!
//! Writes one indented JSON file per entity instance, named by entity kind
//! and id: `account_{id}.json`, `category_{id}.json`, `operation_{id}.json`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Account, Category, Operation};

use super::EntityWriter;

/// Per-instance JSON file writer
pub struct JsonWriter {
    output_dir: PathBuf,
}

impl JsonWriter {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
        }
    }

    fn write<T: Serialize>(&self, file_name: &str, value: &T) -> FinanceResult<()> {
        let json = serde_json::to_string_pretty(value)?;
        let path = self.output_dir.join(file_name);
        fs::write(&path, json)
            .map_err(|e| FinanceError::Export(format!("{}: {e}", path.display())))
    }
}

impl EntityWriter for JsonWriter {
    fn visit_account(&mut self, account: &Account) -> FinanceResult<()> {
        self.write(&format!("account_{}.json", account.id.as_uuid()), account)
    }

    fn visit_category(&mut self, category: &Category) -> FinanceResult<()> {
        self.write(&format!("category_{}.json", category.id.as_uuid()), category)
    }

    fn visit_operation(&mut self, operation: &Operation) -> FinanceResult<()> {
        self.write(
            &format!("operation_{}.json", operation.id.as_uuid()),
            operation,
        )
    }
}
