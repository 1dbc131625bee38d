//! Account model
//!
//! A bank account holds a named balance in a single currency. The balance is
//! only ever changed through [`Account::apply`], which keeps it equal to the
//! initial balance plus the sum of all operation amounts applied to it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;

/// A bank account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Account name (e.g., "Chase Checking")
    pub name: String,

    /// ISO-style currency code (e.g., "USD")
    pub currency: String,

    /// Current balance; mutated only through `apply`
    balance: Money,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the balance was last modified
    pub updated_at: Option<DateTime<Utc>>,
}

impl Account {
    /// Create a new account with an initial balance
    ///
    /// Fails if the name or currency is empty.
    pub fn new(
        name: impl Into<String>,
        currency: impl Into<String>,
        initial_balance: Money,
    ) -> Result<Self, AccountValidationError> {
        let name = name.into();
        let currency = currency.into();

        if name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }
        if currency.trim().is_empty() {
            return Err(AccountValidationError::EmptyCurrency);
        }

        Ok(Self {
            id: AccountId::new(),
            name,
            currency,
            balance: initial_balance,
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    /// The current balance
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Apply a signed amount to the balance and stamp the modification time
    pub fn apply(&mut self, amount: Money) {
        self.balance += amount;
        self.updated_at = Some(Utc::now());
    }

    /// Rebuild an account from its persisted fields
    pub(crate) fn from_parts(
        id: AccountId,
        name: String,
        currency: String,
        balance: Money,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            currency,
            balance,
            created_at,
            updated_at,
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.currency, self.balance)
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName,
    EmptyCurrency,
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account name cannot be empty"),
            Self::EmptyCurrency => write!(f, "Currency cannot be empty"),
        }
    }
}

impl std::error::Error for AccountValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account() {
        let account = Account::new("Checking", "USD", Money::from_cents(10000)).unwrap();
        assert_eq!(account.name, "Checking");
        assert_eq!(account.currency, "USD");
        assert_eq!(account.balance().cents(), 10000);
        assert!(account.updated_at.is_none());
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Account::new("", "USD", Money::zero()).unwrap_err();
        assert_eq!(err, AccountValidationError::EmptyName);

        let err = Account::new("   ", "USD", Money::zero()).unwrap_err();
        assert_eq!(err, AccountValidationError::EmptyName);
    }

    #[test]
    fn test_empty_currency_rejected() {
        let err = Account::new("Checking", "", Money::zero()).unwrap_err();
        assert_eq!(err, AccountValidationError::EmptyCurrency);
    }

    #[test]
    fn test_apply_moves_balance_and_stamps() {
        let mut account = Account::new("Checking", "USD", Money::from_cents(10000)).unwrap();

        account.apply(Money::from_cents(-3000));
        assert_eq!(account.balance().cents(), 7000);
        assert!(account.updated_at.is_some());

        account.apply(Money::from_cents(500));
        assert_eq!(account.balance().cents(), 7500);
    }

    #[test]
    fn test_fresh_ids() {
        let a = Account::new("A", "USD", Money::zero()).unwrap();
        let b = Account::new("B", "USD", Money::zero()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_display() {
        let account = Account::new("Wallet", "EUR", Money::from_cents(250)).unwrap();
        assert_eq!(format!("{}", account), "Wallet (EUR): 2.50");
    }

    #[test]
    fn test_serialization_camel_case() {
        let account = Account::new("Checking", "USD", Money::zero()).unwrap();
        let json = serde_json::to_string(&account).unwrap();
        assert!(json.contains("\"createdAt\""));

        let back: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, account.id);
        assert_eq!(back.balance(), account.balance());
    }
}
