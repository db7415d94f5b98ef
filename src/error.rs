// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Errors raised by the ledger core. A missing record is not an error:
/// lookups return `None` and deletes return `false`.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid amount '{0}', expected a number")]
    InvalidAmount(String),

    #[error("Invalid expense ID '{0}', expected a whole number")]
    InvalidIdentifier(String),

    #[error("Invalid menu choice '{0}'")]
    InvalidMenuChoice(String),

    #[error("Stored amount '{raw}' for expense {id} is not a valid decimal")]
    CorruptAmount { id: i64, raw: String },

    #[error("Amounts add up to more than can be represented")]
    Overflow,

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LedgerError {
    /// Errors the user can act on; the menu reports them and carries on.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LedgerError::InvalidAmount(_)
                | LedgerError::InvalidIdentifier(_)
                | LedgerError::InvalidMenuChoice(_)
                | LedgerError::Overflow
        )
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
