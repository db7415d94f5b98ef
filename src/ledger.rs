// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::Result;
use crate::models::{CategoryTotal, Expense};
use crate::store::{ExpenseStore, MemoryStore, SqliteStore};
use crate::utils::parse_amount;
use rust_decimal::Decimal;
use tracing::{info, warn};

/// The expense ledger. Built once at startup and handed to whichever front end
/// drives it; every call writes one audit event.
pub struct Ledger {
    store: Box<dyn ExpenseStore>,
}

impl Ledger {
    pub fn new(store: Box<dyn ExpenseStore>) -> Self {
        info!("Expense Tracker started");
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    pub fn sqlite(store: SqliteStore) -> Self {
        Self::new(Box::new(store))
    }

    /// Parse `amount` and record a new expense. Nothing is stored when the
    /// amount is rejected.
    pub fn add(&mut self, amount: &str, category: &str, note: &str) -> Result<i64> {
        let amount = match parse_amount(amount) {
            Ok(a) => a,
            Err(e) => {
                warn!("Failed to add expense - invalid amount {:?}", amount);
                return Err(e);
            }
        };
        self.add_amount(amount, category, note)
    }

    pub fn add_amount(&mut self, amount: Decimal, category: &str, note: &str) -> Result<i64> {
        let id = self.store.insert(amount, category, note)?;
        info!("Added expense ID {} - {} - {}", id, amount, category);
        Ok(id)
    }

    pub fn list(&self) -> Result<Vec<Expense>> {
        let data = self.store.list()?;
        if data.is_empty() {
            info!("Tried to view expenses - list is empty");
        } else {
            info!("Viewed all expenses ({})", data.len());
        }
        Ok(data)
    }

    pub fn get(&self, id: i64) -> Result<Option<Expense>> {
        let found = self.store.get(id)?;
        match found {
            Some(_) => info!("Viewed expense ID {}", id),
            None => warn!("Expense ID {} not found when trying to view", id),
        }
        Ok(found)
    }

    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let removed = self.store.remove(id)?;
        if removed {
            info!("Deleted expense ID {}", id);
        } else {
            warn!("Expense ID {} not found when trying to delete", id);
        }
        Ok(removed)
    }

    pub fn total(&self) -> Result<Decimal> {
        let total = self.store.total()?;
        info!("Viewed total spent: {}", total);
        Ok(total)
    }

    pub fn category_summary(&self) -> Result<Vec<CategoryTotal>> {
        let summary = self.store.category_summary()?;
        if summary.is_empty() {
            info!("Tried to view category summary - no expenses");
        } else {
            info!("Viewed category summary ({} categories)", summary.len());
        }
        Ok(summary)
    }

    pub fn last_added(&self) -> Result<Option<Expense>> {
        let last = self.store.last()?;
        match &last {
            Some(e) => info!("Viewed last expense: ID {}", e.id),
            None => info!("Tried to view last expense - list is empty"),
        }
        Ok(last)
    }
}
