//! fintrack - Command-line personal finance tracker
//!
//! Manages bank accounts, income/expense categories, and dated monetary
//! operations, persisting them to SQLite and exporting them to JSON, CSV,
//! or YAML.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Storage location resolution
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, categories, operations)
//! - `storage`: SQLite persistence layer
//! - `services`: Business logic layer (balance rule, analytics, import)
//! - `export`: Multi-format data export
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers bridging clap and the service layer

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
