//! Operation model
//!
//! A single dated monetary movement against one account, attributed to one
//! category. The stored amount is already signed; sign normalization happens
//! once at service-level creation and is not re-checked afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, CategoryId, OperationId};
use super::money::Money;

/// A dated monetary movement
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Unique identifier
    pub id: OperationId,

    /// The account this operation moves money on
    pub account_id: AccountId,

    /// The category this operation is attributed to
    pub category_id: CategoryId,

    /// Signed amount; negative for expenses, positive for income
    pub amount: Money,

    /// Free-text description
    pub description: String,

    /// When the movement happened
    pub date: DateTime<Utc>,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Operation {
    /// Create a new operation dated now
    pub fn new(
        account_id: AccountId,
        category_id: CategoryId,
        amount: Money,
        description: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: OperationId::new(),
            account_id,
            category_id,
            amount,
            description: description.into(),
            date: now,
            created_at: now,
        }
    }

    /// Create a new operation with an explicit date
    pub fn dated(
        account_id: AccountId,
        category_id: CategoryId,
        amount: Money,
        description: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        let mut op = Self::new(account_id, category_id, amount, description);
        op.date = date;
        op
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {}",
            self.date.format("%Y-%m-%d %H:%M"),
            self.amount,
            self.description
        )
    }
}
