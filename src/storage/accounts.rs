//! Account repository
//!
//! Persists accounts to the `accounts` table. Besides the shared CRUD
//! surface it sums balances across all accounts and applies signed balance
//! adjustments.

use std::rc::Rc;

use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

use crate::error::FinanceResult;
use crate::models::{Account, AccountId, Money};

use super::{decode_ts, decode_uuid, encode_ts, Repository};

/// Repository for account persistence
pub struct AccountRepository {
    conn: Rc<Connection>,
}

impl AccountRepository {
    pub(crate) fn new(conn: Rc<Connection>) -> Self {
        Self { conn }
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Account> {
        let id: String = row.get(0)?;
        let name: String = row.get(1)?;
        let currency: String = row.get(2)?;
        let balance_cents: i64 = row.get(3)?;
        let created_at: String = row.get(4)?;
        let updated_at: Option<String> = row.get(5)?;

        let updated_at = match updated_at {
            Some(s) => Some(decode_ts(5, &s)?),
            None => None,
        };

        Ok(Account::from_parts(
            decode_uuid(0, &id)?.into(),
            name,
            currency,
            Money::from_cents(balance_cents),
            decode_ts(4, &created_at)?,
            updated_at,
        ))
    }

    /// Sum of all account balances
    pub fn total_balance(&self) -> FinanceResult<Money> {
        let cents: i64 = self.conn.query_row(
            "SELECT COALESCE(SUM(balance_cents), 0) FROM accounts",
            [],
            |row| row.get(0),
        )?;
        Ok(Money::from_cents(cents))
    }

    /// Add a signed amount to an account's balance and stamp the modification
    /// time; no-op if the account is absent
    pub fn update_balance(&self, id: AccountId, amount: Money) -> FinanceResult<()> {
        if let Some(mut account) = self.get(id)? {
            account.apply(amount);
            self.update(&account)?;
            debug!(account = %id, amount = %amount, "balance updated");
        }
        Ok(())
    }
}

impl Repository for AccountRepository {
    type Entity = Account;
    type Id = AccountId;

    fn get(&self, id: AccountId) -> FinanceResult<Option<Account>> {
        let account = self
            .conn
            .query_row(
                "SELECT id, name, currency, balance_cents, created_at, updated_at
                 FROM accounts WHERE id = ?1",
                params![id.as_uuid().to_string()],
                Self::from_row,
            )
            .optional()?;
        Ok(account)
    }

    fn get_all(&self) -> FinanceResult<Vec<Account>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, currency, balance_cents, created_at, updated_at FROM accounts",
        )?;
        let accounts = stmt
            .query_map([], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(accounts)
    }

    fn add(&self, account: &Account) -> FinanceResult<()> {
        self.conn.execute(
            "INSERT INTO accounts (id, name, currency, balance_cents, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                account.id.as_uuid().to_string(),
                account.name,
                account.currency,
                account.balance().cents(),
                encode_ts(account.created_at),
                account.updated_at.map(encode_ts),
            ],
        )?;
        Ok(())
    }

    fn update(&self, account: &Account) -> FinanceResult<()> {
        self.conn.execute(
            "UPDATE accounts
             SET name = ?2, currency = ?3, balance_cents = ?4, created_at = ?5, updated_at = ?6
             WHERE id = ?1",
            params![
                account.id.as_uuid().to_string(),
                account.name,
                account.currency,
                account.balance().cents(),
                encode_ts(account.created_at),
                account.updated_at.map(encode_ts),
            ],
        )?;
        Ok(())
    }

    fn delete(&self, id: AccountId) -> FinanceResult<()> {
        self.conn.execute(
            "DELETE FROM accounts WHERE id = ?1",
            params![id.as_uuid().to_string()],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;

    fn test_account(name: &str, cents: i64) -> Account {
        Account::new(name, "USD", Money::from_cents(cents)).unwrap()
    }

    #[test]
    fn test_add_and_get() {
        let storage = Storage::open_in_memory().unwrap();
        let account = test_account("Checking", 10000);

        storage.accounts.add(&account).unwrap();

        let retrieved = storage.accounts.get(account.id).unwrap().unwrap();
        assert_eq!(retrieved.id, account.id);
        assert_eq!(retrieved.name, "Checking");
        assert_eq!(retrieved.currency, "USD");
        assert_eq!(retrieved.balance().cents(), 10000);
        assert!(retrieved.updated_at.is_none());
    }

    #[test]
    fn test_get_missing_is_none() {
        let storage = Storage::open_in_memory().unwrap();
        assert!(storage.accounts.get(AccountId::new()).unwrap().is_none());
    }

    #[test]
    fn test_get_all() {
        let storage = Storage::open_in_memory().unwrap();
        storage.accounts.add(&test_account("A", 100)).unwrap();
        storage.accounts.add(&test_account("B", 200)).unwrap();

        let all = storage.accounts.get_all().unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_update_replaces_record() {
        let storage = Storage::open_in_memory().unwrap();
        let mut account = test_account("Old", 100);
        storage.accounts.add(&account).unwrap();

        account.name = "New".to_string();
        storage.accounts.update(&account).unwrap();

        let retrieved = storage.accounts.get(account.id).unwrap().unwrap();
        assert_eq!(retrieved.name, "New");
    }

    #[test]
    fn test_update_missing_is_noop() {
        let storage = Storage::open_in_memory().unwrap();
        let account = test_account("Ghost", 100);

        storage.accounts.update(&account).unwrap();
        assert!(storage.accounts.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let storage = Storage::open_in_memory().unwrap();
        let account = test_account("Gone", 100);
        storage.accounts.add(&account).unwrap();

        storage.accounts.delete(account.id).unwrap();
        assert!(storage.accounts.get(account.id).unwrap().is_none());

        // Deleting again must not fail
        storage.accounts.delete(account.id).unwrap();
    }

    #[test]
    fn test_total_balance() {
        let storage = Storage::open_in_memory().unwrap();
        assert_eq!(storage.accounts.total_balance().unwrap(), Money::zero());

        storage.accounts.add(&test_account("A", 10000)).unwrap();
        storage.accounts.add(&test_account("B", -2500)).unwrap();

        assert_eq!(storage.accounts.total_balance().unwrap().cents(), 7500);
    }

    #[test]
    fn test_update_balance() {
        let storage = Storage::open_in_memory().unwrap();
        let account = test_account("Checking", 10000);
        storage.accounts.add(&account).unwrap();

        storage
            .accounts
            .update_balance(account.id, Money::from_cents(-3000))
            .unwrap();

        let retrieved = storage.accounts.get(account.id).unwrap().unwrap();
        assert_eq!(retrieved.balance().cents(), 7000);
        assert!(retrieved.updated_at.is_some());
    }

    #[test]
    fn test_update_balance_missing_is_noop() {
        let storage = Storage::open_in_memory().unwrap();
        storage
            .accounts
            .update_balance(AccountId::new(), Money::from_cents(100))
            .unwrap();
        assert_eq!(storage.accounts.total_balance().unwrap(), Money::zero());
    }
}
