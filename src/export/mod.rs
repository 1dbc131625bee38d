//! Export module for fintrack
//!
//! Serializes the full dataset (all accounts, categories, operations) to a
//! target directory in one of three formats:
//! - JSON: one indented file per entity instance
//! - CSV: one shared file per entity kind, rows appended
//! - YAML: one file per entity instance, camelCase keys
//!
//! The format is chosen by a case-insensitive tag; an unrecognized tag fails
//! before any file or directory is touched.

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::CsvWriter;
pub use json::JsonWriter;
pub use yaml::YamlWriter;

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::info;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Account, Category, Operation};
use crate::services::FinanceService;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Yaml,
}

impl FromStr for ExportFormat {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "yaml" => Ok(Self::Yaml),
            _ => Err(FinanceError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Per-format serialization handler, invoked once per entity instance
pub trait EntityWriter {
    fn visit_account(&mut self, account: &Account) -> FinanceResult<()>;
    fn visit_category(&mut self, category: &Category) -> FinanceResult<()>;
    fn visit_operation(&mut self, operation: &Operation) -> FinanceResult<()>;
}

/// Exports the current dataset by reading through the finance service
pub struct Exporter<'a> {
    service: &'a FinanceService,
}

impl<'a> Exporter<'a> {
    /// Create a new exporter over the given service
    pub fn new(service: &'a FinanceService) -> Self {
        Self { service }
    }

    /// Parse the format tag, then export
    ///
    /// An unrecognized tag fails here, before the output directory is
    /// created or any file is written.
    pub fn export_named(&self, output_dir: &Path, format: &str) -> FinanceResult<()> {
        self.export(output_dir, format.parse()?)
    }

    /// Export all accounts, then all categories, then all operations
    ///
    /// The output directory is created if absent. The first write failure
    /// aborts the export; files already written stay on disk.
    pub fn export(&self, output_dir: &Path, format: ExportFormat) -> FinanceResult<()> {
        fs::create_dir_all(output_dir)
            .map_err(|e| FinanceError::Export(format!("{}: {e}", output_dir.display())))?;

        let mut writer: Box<dyn EntityWriter> = match format {
            ExportFormat::Json => Box::new(JsonWriter::new(output_dir)),
            ExportFormat::Csv => Box::new(CsvWriter::new(output_dir)),
            ExportFormat::Yaml => Box::new(YamlWriter::new(output_dir)),
        };

        for account in self.service.accounts()? {
            writer.visit_account(&account)?;
        }
        for category in self.service.categories()? {
            writer.visit_category(&category)?;
        }
        for operation in self.service.operations()? {
            writer.visit_operation(&operation)?;
        }

        info!(dir = %output_dir.display(), %format, "export finished");
        Ok(())
    }
}
