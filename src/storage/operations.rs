//! Operation repository
//!
//! Persists operations to the `operations` table. The table references both
//! parents with cascading foreign keys, so inserting an operation against a
//! missing account or category surfaces a constraint violation from SQLite,
//! and deleting a parent removes its operations at the storage level.

use std::rc::Rc;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::FinanceResult;
use crate::models::{AccountId, CategoryId, Money, Operation, OperationId};

use super::{decode_ts, decode_uuid, encode_ts, Repository};

/// Repository for operation persistence
pub struct OperationRepository {
    conn: Rc<Connection>,
}

impl OperationRepository {
    pub(crate) fn new(conn: Rc<Connection>) -> Self {
        Self { conn }
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Operation> {
        let id: String = row.get(0)?;
        let account_id: String = row.get(1)?;
        let category_id: String = row.get(2)?;
        let amount_cents: i64 = row.get(3)?;
        let description: String = row.get(4)?;
        let date: String = row.get(5)?;
        let created_at: String = row.get(6)?;

        Ok(Operation {
            id: decode_uuid(0, &id)?.into(),
            account_id: decode_uuid(1, &account_id)?.into(),
            category_id: decode_uuid(2, &category_id)?.into(),
            amount: Money::from_cents(amount_cents),
            description,
            date: decode_ts(5, &date)?,
            created_at: decode_ts(6, &created_at)?,
        })
    }

    const SELECT: &'static str =
        "SELECT id, account_id, category_id, amount_cents, description, date, created_at
         FROM operations";

    /// All operations against the given account
    pub fn get_by_account(&self, account_id: AccountId) -> FinanceResult<Vec<Operation>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} WHERE account_id = ?1", Self::SELECT))?;
        let operations = stmt
            .query_map(params![account_id.as_uuid().to_string()], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(operations)
    }

    /// All operations attributed to the given category
    pub fn get_by_category(&self, category_id: CategoryId) -> FinanceResult<Vec<Operation>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} WHERE category_id = ?1", Self::SELECT))?;
        let operations = stmt
            .query_map(params![category_id.as_uuid().to_string()], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(operations)
    }

    /// Operations whose date falls in the inclusive range
    pub fn get_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> FinanceResult<Vec<Operation>> {
        let mut stmt = self.conn.prepare(&format!(
            "{} WHERE date >= ?1 AND date <= ?2 ORDER BY date",
            Self::SELECT
        ))?;
        let operations = stmt
            .query_map(params![encode_ts(start), encode_ts(end)], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(operations)
    }

    /// Sum of amounts over all operations against the given account
    pub fn total_by_account(&self, account_id: AccountId) -> FinanceResult<Money> {
        let cents: i64 = self.conn.query_row(
            "SELECT COALESCE(SUM(amount_cents), 0) FROM operations WHERE account_id = ?1",
            params![account_id.as_uuid().to_string()],
            |row| row.get(0),
        )?;
        Ok(Money::from_cents(cents))
    }

    /// Sum of amounts over all operations attributed to the given category
    pub fn total_by_category(&self, category_id: CategoryId) -> FinanceResult<Money> {
        let cents: i64 = self.conn.query_row(
            "SELECT COALESCE(SUM(amount_cents), 0) FROM operations WHERE category_id = ?1",
            params![category_id.as_uuid().to_string()],
            |row| row.get(0),
        )?;
        Ok(Money::from_cents(cents))
    }
}

impl Repository for OperationRepository {
    type Entity = Operation;
    type Id = OperationId;

    fn get(&self, id: OperationId) -> FinanceResult<Option<Operation>> {
        let operation = self
            .conn
            .query_row(
                &format!("{} WHERE id = ?1", Self::SELECT),
                params![id.as_uuid().to_string()],
                Self::from_row,
            )
            .optional()?;
        Ok(operation)
    }

    fn get_all(&self) -> FinanceResult<Vec<Operation>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} ORDER BY created_at", Self::SELECT))?;
        let operations = stmt
            .query_map([], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(operations)
    }

    fn add(&self, operation: &Operation) -> FinanceResult<()> {
        self.conn.execute(
            "INSERT INTO operations
                (id, account_id, category_id, amount_cents, description, date, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                operation.id.as_uuid().to_string(),
                operation.account_id.as_uuid().to_string(),
                operation.category_id.as_uuid().to_string(),
                operation.amount.cents(),
                operation.description,
                encode_ts(operation.date),
                encode_ts(operation.created_at),
            ],
        )?;
        Ok(())
    }

    fn update(&self, operation: &Operation) -> FinanceResult<()> {
        self.conn.execute(
            "UPDATE operations
             SET account_id = ?2, category_id = ?3, amount_cents = ?4,
                 description = ?5, date = ?6, created_at = ?7
             WHERE id = ?1",
            params![
                operation.id.as_uuid().to_string(),
                operation.account_id.as_uuid().to_string(),
                operation.category_id.as_uuid().to_string(),
                operation.amount.cents(),
                operation.description,
                encode_ts(operation.date),
                encode_ts(operation.created_at),
            ],
        )?;
        Ok(())
    }

    fn delete(&self, id: OperationId) -> FinanceResult<()> {
        self.conn.execute(
            "DELETE FROM operations WHERE id = ?1",
            params![id.as_uuid().to_string()],
        )?;
        Ok(())
    }
}
