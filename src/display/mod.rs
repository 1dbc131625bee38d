//! Terminal output formatting
//!
//! Plain-text table and detail views for each entity kind; no styling
//! dependencies, the tables are plain column layout.

pub mod account;
pub mod category;
pub mod operation;
pub mod report;

pub use account::{format_account_details, format_account_list};
pub use category::format_category_list;
pub use operation::format_operation_list;
pub use report::format_category_totals;
