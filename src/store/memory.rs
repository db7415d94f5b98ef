// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::ExpenseStore;
use crate::error::Result;
use crate::models::{CategoryTotal, Expense, checked_add, summarize};
use rust_decimal::Decimal;

/// Volatile backend; everything is lost when the process exits.
#[derive(Debug)]
pub struct MemoryStore {
    expenses: Vec<Expense>,
    next_id: i64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            expenses: Vec::new(),
            next_id: 1,
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExpenseStore for MemoryStore {
    fn insert(&mut self, amount: Decimal, category: &str, note: &str) -> Result<i64> {
        let id = self.next_id;
        self.expenses.push(Expense {
            id,
            amount,
            category: category.to_string(),
            note: note.to_string(),
        });
        self.next_id += 1;
        Ok(id)
    }

    fn list(&self) -> Result<Vec<Expense>> {
        // Appends happen in id order, so the vector is already sorted
        Ok(self.expenses.clone())
    }

    fn get(&self, id: i64) -> Result<Option<Expense>> {
        Ok(self.expenses.iter().find(|e| e.id == id).cloned())
    }

    fn remove(&mut self, id: i64) -> Result<bool> {
        match self.expenses.iter().position(|e| e.id == id) {
            Some(idx) => {
                self.expenses.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn total(&self) -> Result<Decimal> {
        self.expenses
            .iter()
            .try_fold(Decimal::ZERO, |acc, e| checked_add(acc, e.amount))
    }

    fn category_summary(&self) -> Result<Vec<CategoryTotal>> {
        summarize(&self.expenses)
    }

    fn last(&self) -> Result<Option<Expense>> {
        Ok(self.expenses.last().cloned())
    }
}
