// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Persistence backends for the expense ledger.
//!
//! A backend owns the record collection and the id counter. Ids are handed out
//! by the backend, grow strictly and are never reused, even after the newest
//! record is deleted.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::Result;
use crate::models::{CategoryTotal, Expense};
use rust_decimal::Decimal;

pub trait ExpenseStore {
    /// Store a new expense and return the id assigned to it.
    fn insert(&mut self, amount: Decimal, category: &str, note: &str) -> Result<i64>;

    /// All expenses, ascending by id.
    fn list(&self) -> Result<Vec<Expense>>;

    fn get(&self, id: i64) -> Result<Option<Expense>>;

    /// Remove an expense. Returns false when no expense has that id.
    fn remove(&mut self, id: i64) -> Result<bool>;

    /// Sum of every amount; zero for an empty ledger.
    fn total(&self) -> Result<Decimal>;

    /// Per-category sums in first-seen order.
    fn category_summary(&self) -> Result<Vec<CategoryTotal>>;

    /// The expense with the highest id.
    fn last(&self) -> Result<Option<Expense>>;
}
