//! Category repository
//!
//! Persists categories to the `categories` table, with a kind-filtered query
//! on top of the shared CRUD surface.

use std::rc::Rc;

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::FinanceResult;
use crate::models::{Category, CategoryId, CategoryKind};

use super::{conversion_failure, decode_ts, decode_uuid, encode_ts, Repository};

fn encode_kind(kind: CategoryKind) -> &'static str {
    match kind {
        CategoryKind::Income => "income",
        CategoryKind::Expense => "expense",
    }
}

/// Repository for category persistence
pub struct CategoryRepository {
    conn: Rc<Connection>,
}

impl CategoryRepository {
    pub(crate) fn new(conn: Rc<Connection>) -> Self {
        Self { conn }
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Category> {
        let id: String = row.get(0)?;
        let name: String = row.get(1)?;
        let description: String = row.get(2)?;
        let kind: String = row.get(3)?;
        let created_at: String = row.get(4)?;

        let kind = CategoryKind::parse(&kind).ok_or_else(|| {
            conversion_failure(3, format!("unknown category kind: {kind}").into())
        })?;

        Ok(Category {
            id: decode_uuid(0, &id)?.into(),
            name,
            description,
            kind,
            created_at: decode_ts(4, &created_at)?,
        })
    }

    /// All categories of the given kind
    pub fn get_by_kind(&self, kind: CategoryKind) -> FinanceResult<Vec<Category>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, description, kind, created_at FROM categories WHERE kind = ?1",
        )?;
        let categories = stmt
            .query_map(params![encode_kind(kind)], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(categories)
    }
}

impl Repository for CategoryRepository {
    type Entity = Category;
    type Id = CategoryId;

    fn get(&self, id: CategoryId) -> FinanceResult<Option<Category>> {
        let category = self
            .conn
            .query_row(
                "SELECT id, name, description, kind, created_at FROM categories WHERE id = ?1",
                params![id.as_uuid().to_string()],
                Self::from_row,
            )
            .optional()?;
        Ok(category)
    }

    fn get_all(&self) -> FinanceResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, description, kind, created_at FROM categories")?;
        let categories = stmt
            .query_map([], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(categories)
    }

    fn add(&self, category: &Category) -> FinanceResult<()> {
        self.conn.execute(
            "INSERT INTO categories (id, name, description, kind, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                category.id.as_uuid().to_string(),
                category.name,
                category.description,
                encode_kind(category.kind),
                encode_ts(category.created_at),
            ],
        )?;
        Ok(())
    }

    fn update(&self, category: &Category) -> FinanceResult<()> {
        self.conn.execute(
            "UPDATE categories
             SET name = ?2, description = ?3, kind = ?4, created_at = ?5
             WHERE id = ?1",
            params![
                category.id.as_uuid().to_string(),
                category.name,
                category.description,
                encode_kind(category.kind),
                encode_ts(category.created_at),
            ],
        )?;
        Ok(())
    }

    fn delete(&self, id: CategoryId) -> FinanceResult<()> {
        self.conn.execute(
            "DELETE FROM categories WHERE id = ?1",
            params![id.as_uuid().to_string()],
        )?;
        Ok(())
    }
}
