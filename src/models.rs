// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub amount: Decimal,
    pub category: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

/// Add two amounts, failing instead of panicking past `Decimal::MAX`.
pub fn checked_add(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_add(b).ok_or(LedgerError::Overflow)
}

/// Group expenses by exact category text, in the order each category is
/// first seen. Callers pass expenses sorted by ascending id.
pub fn summarize<'a, I>(expenses: I) -> Result<Vec<CategoryTotal>>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut out: Vec<CategoryTotal> = Vec::new();
    for e in expenses {
        match out.iter_mut().find(|c| c.category == e.category) {
            Some(c) => c.total = checked_add(c.total, e.amount)?,
            None => out.push(CategoryTotal {
                category: e.category.clone(),
                total: e.amount,
            }),
        }
    }
    Ok(out)
}
