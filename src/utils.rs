// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{LedgerError, Result};
use crate::models::Expense;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;
use std::io::Write;

pub const DEFAULT_SYMBOL: &str = "₹";

/// Parse user-supplied amount text. Zero and negative values are accepted.
pub fn parse_amount(s: &str) -> Result<Decimal> {
    let t = s.trim();
    t.parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(t))
        .map_err(|_| LedgerError::InvalidAmount(s.to_string()))
}

pub fn parse_id(s: &str) -> Result<i64> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| LedgerError::InvalidIdentifier(s.to_string()))
}

pub fn fmt_money(d: &Decimal, symbol: &str) -> String {
    format!("{}{}", symbol, d.normalize())
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn expense_table(expenses: &[Expense], symbol: &str) -> Table {
    let rows: Vec<Vec<String>> = expenses
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                fmt_money(&e.amount, symbol),
                e.category.clone(),
                e.note.clone(),
            ]
        })
        .collect();
    pretty_table(&["ID", "Amount", "Category", "Note"], rows)
}

pub fn write_expense<W: Write>(out: &mut W, e: &Expense, symbol: &str) -> std::io::Result<()> {
    writeln!(out, "ID: {}", e.id)?;
    writeln!(out, "Amount: {}", fmt_money(&e.amount, symbol))?;
    writeln!(out, "Category: {}", e.category)?;
    writeln!(out, "Note: {}", e.note)
}

pub fn maybe_print_json<T: serde::Serialize, W: Write>(
    out: &mut W,
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> anyhow::Result<bool> {
    if json_flag {
        writeln!(out, "{}", serde_json::to_string_pretty(v)?)?;
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                writeln!(out, "{}", serde_json::to_string(item)?)?;
            }
        } else {
            writeln!(out, "{}", serde_json::to_string(&val)?)?;
        }
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_accept_decimals_negatives_and_padding() {
        assert_eq!(parse_amount("12.50").unwrap().to_string(), "12.50");
        assert_eq!(parse_amount(" 5 ").unwrap().to_string(), "5");
        assert_eq!(parse_amount("-3.2").unwrap().to_string(), "-3.2");
        assert!(parse_amount("0").unwrap().is_zero());
        assert_eq!(parse_amount("1e3").unwrap().normalize().to_string(), "1000");
    }

    #[test]
    fn bad_amount_keeps_the_raw_text() {
        match parse_amount("abc") {
            Err(LedgerError::InvalidAmount(raw)) => assert_eq!(raw, "abc"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(parse_amount("").is_err());
    }

    #[test]
    fn ids_must_be_integers() {
        assert_eq!(parse_id(" 42\n").unwrap(), 42);
        assert!(matches!(
            parse_id("4.2"),
            Err(LedgerError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn money_drops_trailing_zeros() {
        let d: Decimal = "12.50".parse().unwrap();
        assert_eq!(fmt_money(&d, "₹"), "₹12.5");
    }
}
