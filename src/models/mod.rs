//! Core data models for fintrack
//!
//! Plain data holders with identity and invariants: accounts, categories,
//! and operations, plus the `Money` value type and strongly-typed IDs.

pub mod account;
pub mod category;
pub mod ids;
pub mod money;
pub mod operation;

pub use account::{Account, AccountValidationError};
pub use category::{Category, CategoryKind, CategoryValidationError};
pub use ids::{AccountId, CategoryId, OperationId};
pub use money::{Money, MoneyParseError};
pub use operation::Operation;
