// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::ExpenseStore;
use crate::db::init_schema;
use crate::error::{LedgerError, Result};
use crate::models::{CategoryTotal, Expense, checked_add, summarize};
use rusqlite::{Connection, OptionalExtension, Row, params};
use rust_decimal::Decimal;
use std::path::Path;

/// SQLite backend. Amounts are kept as decimal TEXT and summed in process so
/// no float rounding creeps into totals.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Wrap a connection whose schema is already in place, e.g. one from
    /// `db::open_or_init`.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        init_schema(&conn)?;
        Ok(Self::new(conn))
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Self::new(conn))
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn query_expenses(&self, sql: &str) -> Result<Vec<Expense>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query([])?;
        let mut data = Vec::new();
        while let Some(r) = rows.next()? {
            data.push(row_to_expense(r)?);
        }
        Ok(data)
    }
}

fn row_to_expense(r: &Row<'_>) -> Result<Expense> {
    let id: i64 = r.get(0)?;
    let raw: String = r.get(1)?;
    let amount = raw
        .parse::<Decimal>()
        .map_err(|_| LedgerError::CorruptAmount { id, raw })?;
    Ok(Expense {
        id,
        amount,
        category: r.get(2)?,
        note: r.get(3)?,
    })
}

impl ExpenseStore for SqliteStore {
    fn insert(&mut self, amount: Decimal, category: &str, note: &str) -> Result<i64> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO expenses(amount, category, note) VALUES (?1, ?2, ?3)",
            params![amount.to_string(), category, note],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(id)
    }

    fn list(&self) -> Result<Vec<Expense>> {
        self.query_expenses("SELECT id, amount, category, note FROM expenses ORDER BY id")
    }

    fn get(&self, id: i64) -> Result<Option<Expense>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, amount, category, note FROM expenses WHERE id=?1")?;
        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(r) => Ok(Some(row_to_expense(r)?)),
            None => Ok(None),
        }
    }

    fn remove(&mut self, id: i64) -> Result<bool> {
        let tx = self.conn.transaction()?;
        let n = tx.execute("DELETE FROM expenses WHERE id=?1", params![id])?;
        tx.commit()?;
        Ok(n > 0)
    }

    fn total(&self) -> Result<Decimal> {
        let mut stmt = self.conn.prepare("SELECT id, amount FROM expenses")?;
        let mut rows = stmt.query([])?;
        let mut total = Decimal::ZERO;
        while let Some(r) = rows.next()? {
            let id: i64 = r.get(0)?;
            let raw: String = r.get(1)?;
            let amount = raw
                .parse::<Decimal>()
                .map_err(|_| LedgerError::CorruptAmount { id, raw })?;
            total = checked_add(total, amount)?;
        }
        Ok(total)
    }

    fn category_summary(&self) -> Result<Vec<CategoryTotal>> {
        // Grouped here rather than with GROUP BY so order is first-seen by id
        summarize(&self.list()?)
    }

    fn last(&self) -> Result<Option<Expense>> {
        let id: Option<i64> = self
            .conn
            .query_row("SELECT MAX(id) FROM expenses", [], |r| r.get(0))
            .optional()?
            .flatten();
        match id {
            Some(id) => self.get(id),
            None => Ok(None),
        }
    }
}
