//! Storage layer for fintrack
//!
//! SQLite persistence through a single shared connection. The schema is three
//! tables (accounts, categories, operations); operations carry foreign keys
//! to both parents with cascading delete at the storage level. The request
//! flow is single-threaded, so repositories share the connection through an
//! `Rc` rather than a pool.

pub mod accounts;
pub mod categories;
pub mod operations;

pub use accounts::AccountRepository;
pub use categories::CategoryRepository;
pub use operations::OperationRepository;

use std::path::Path;
use std::rc::Rc;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Connection;
use uuid::Uuid;

use crate::error::FinanceResult;

/// Shared capability set every entity repository provides
///
/// `update` and `delete` silently no-op when the id is absent; absence on
/// `get` is an `Ok(None)`, not an error.
pub trait Repository {
    type Entity;
    type Id;

    /// Fetch a single entity by id
    fn get(&self, id: Self::Id) -> FinanceResult<Option<Self::Entity>>;

    /// Fetch every stored entity (unspecified order)
    fn get_all(&self) -> FinanceResult<Vec<Self::Entity>>;

    /// Persist a new entity
    fn add(&self, entity: &Self::Entity) -> FinanceResult<()>;

    /// Replace the full record matching the entity's id
    fn update(&self, entity: &Self::Entity) -> FinanceResult<()>;

    /// Remove the record with the given id
    fn delete(&self, id: Self::Id) -> FinanceResult<()>;
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    pub accounts: AccountRepository,
    pub categories: CategoryRepository,
    pub operations: OperationRepository,
}

impl Storage {
    /// Open (or create) the database file at the given path
    pub fn open(path: &Path) -> FinanceResult<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Open an in-memory database (useful for testing)
    pub fn open_in_memory() -> FinanceResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> FinanceResult<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        create_schema(&conn)?;

        let conn = Rc::new(conn);
        Ok(Self {
            accounts: AccountRepository::new(Rc::clone(&conn)),
            categories: CategoryRepository::new(Rc::clone(&conn)),
            operations: OperationRepository::new(conn),
        })
    }
}

fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS accounts (
            id            TEXT PRIMARY KEY,
            name          TEXT NOT NULL,
            currency      TEXT NOT NULL,
            balance_cents INTEGER NOT NULL,
            created_at    TEXT NOT NULL,
            updated_at    TEXT
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS categories (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            kind        TEXT NOT NULL,
            created_at  TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS operations (
            id           TEXT PRIMARY KEY,
            account_id   TEXT NOT NULL REFERENCES accounts(id) ON DELETE CASCADE,
            category_id  TEXT NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
            amount_cents INTEGER NOT NULL,
            description  TEXT NOT NULL DEFAULT '',
            date         TEXT NOT NULL,
            created_at   TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_operations_account ON operations(account_id)",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_operations_category ON operations(category_id)",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_operations_date ON operations(date)",
        [],
    )?;

    Ok(())
}

/// Encode a timestamp as a fixed-width RFC 3339 UTC string
///
/// Fixed width keeps lexicographic comparison chronological, which the date
/// range queries rely on.
pub(crate) fn encode_ts(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Decode a stored timestamp, reporting the column on failure
pub(crate) fn decode_ts(idx: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| conversion_failure(idx, Box::new(e)))
}

/// Decode a stored UUID, reporting the column on failure
pub(crate) fn decode_uuid(idx: usize, s: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| conversion_failure(idx, Box::new(e)))
}

pub(crate) fn conversion_failure(
    idx: usize,
    err: Box<dyn std::error::Error + Send + Sync + 'static>,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, err)
}
