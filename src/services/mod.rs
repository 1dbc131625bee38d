//! Service layer for fintrack
//!
//! Business logic on top of the storage layer: validation, the
//! balance-consistency rule, analytics, and CSV import.

pub mod finance;
pub mod import;

pub use finance::{CategoryTotal, FinanceService};
pub use import::{import_operations, CsvLayout};
