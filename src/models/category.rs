//! Category model
//!
//! Categories classify operations as income or expense. The kind decides the
//! sign every operation in the category is stored with, and it does not
//! change after creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::money::Money;

/// Whether operations in a category add to or subtract from a balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Income,
    Expense,
}

impl CategoryKind {
    /// Parse a kind from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }

    /// Force the sign of an amount to match this kind
    ///
    /// Expense categories store amounts negative, income categories positive.
    pub fn signed(self, amount: Money) -> Money {
        match self {
            Self::Expense => -amount.abs(),
            Self::Income => amount.abs(),
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A spending or income category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Income or Expense; fixed at creation
    pub kind: CategoryKind,

    /// When the category was created
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category
    ///
    /// Fails if the name is empty.
    pub fn new(
        name: impl Into<String>,
        kind: CategoryKind,
        description: impl Into<String>,
    ) -> Result<Self, CategoryValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        Ok(Self {
            id: CategoryId::new(),
            name,
            description: description.into(),
            kind,
            created_at: Utc::now(),
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
