//! YAML export
//!
//! Writes one YAML file per entity instance with camelCase keys, named
//! `account_{id}.yaml`, `category_{id}.yaml`, `operation_{id}.yaml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Account, Category, Operation};

use super::EntityWriter;

/// Per-instance YAML file writer
pub struct YamlWriter {
    output_dir: PathBuf,
}

impl YamlWriter {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
        }
    }

    fn write<T: Serialize>(&self, file_name: &str, value: &T) -> FinanceResult<()> {
        let yaml = serde_yaml::to_string(value)?;
        let path = self.output_dir.join(file_name);
        fs::write(&path, yaml)
            .map_err(|e| FinanceError::Export(format!("{}: {e}", path.display())))
    }
}

impl EntityWriter for YamlWriter {
    fn visit_account(&mut self, account: &Account) -> FinanceResult<()> {
        self.write(&format!("account_{}.yaml", account.id.as_uuid()), account)
    }

    fn visit_category(&mut self, category: &Category) -> FinanceResult<()> {
        self.write(&format!("category_{}.yaml", category.id.as_uuid()), category)
    }

    fn visit_operation(&mut self, operation: &Operation) -> FinanceResult<()> {
        self.write(
            &format!("operation_{}.yaml", operation.id.as_uuid()),
            operation,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{Exporter, ExportFormat};
    use crate::models::{CategoryKind, Money};
    use crate::services::FinanceService;
    use crate::storage::Storage;
    use tempfile::TempDir;

    #[test]
    fn test_one_file_per_instance_with_camel_case_keys() {
        let temp_dir = TempDir::new().unwrap();
        let service = FinanceService::new(Storage::open_in_memory().unwrap());
        let account = service
            .create_account("Checking", "USD", Money::from_cents(10000))
            .unwrap();
        let category = service
            .create_category("Groceries", CategoryKind::Expense, "")
            .unwrap();
        let operation = service
            .create_operation(account.id, category.id, Money::from_cents(500), "", None)
            .unwrap();

        Exporter::new(&service)
            .export(temp_dir.path(), ExportFormat::Yaml)
            .unwrap();

        let op_yaml = std::fs::read_to_string(
            temp_dir
                .path()
                .join(format!("operation_{}.yaml", operation.id.as_uuid())),
        )
        .unwrap();

        assert!(op_yaml.contains("accountId:"));
        assert!(op_yaml.contains("categoryId:"));
        assert!(op_yaml.contains("createdAt:"));

        let account_yaml = std::fs::read_to_string(
            temp_dir
                .path()
                .join(format!("account_{}.yaml", account.id.as_uuid())),
        )
        .unwrap();
        assert!(account_yaml.contains("name: Checking"));
        assert!(account_yaml.contains("currency: USD"));
    }

    #[test]
    fn test_yaml_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let service = FinanceService::new(Storage::open_in_memory().unwrap());
        let category = service
            .create_category("Salary", CategoryKind::Income, "pay")
            .unwrap();

        Exporter::new(&service)
            .export(temp_dir.path(), ExportFormat::Yaml)
            .unwrap();

        let yaml = std::fs::read_to_string(
            temp_dir
                .path()
                .join(format!("category_{}.yaml", category.id.as_uuid())),
        )
        .unwrap();

        let back: Category = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.id, category.id);
        assert_eq!(back.kind, CategoryKind::Income);
    }
}
