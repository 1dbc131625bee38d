//! Configuration for fintrack
//!
//! The only configurable piece is the storage location; see [`paths`].

pub mod paths;

pub use paths::FintrackPaths;
