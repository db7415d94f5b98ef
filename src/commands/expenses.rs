// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::utils::{
    expense_table, fmt_money, maybe_print_json, parse_id, pretty_table, write_expense,
};
use anyhow::{Result, anyhow};
use std::io::Write;

/// Run one non-interactive subcommand against the ledger.
pub fn handle<W: Write>(
    ledger: &mut Ledger,
    name: &str,
    sub: &clap::ArgMatches,
    symbol: &str,
    out: &mut W,
) -> Result<()> {
    match name {
        "add" => {
            let amount = sub.get_one::<String>("AMOUNT").map(String::as_str).unwrap_or("");
            let category = sub.get_one::<String>("CATEGORY").map(String::as_str).unwrap_or("");
            let note = sub.get_one::<String>("note").map(String::as_str).unwrap_or("");
            let id = ledger.add(amount, category, note)?;
            writeln!(out, "Expense added with ID: {}", id)?;
        }
        "list" => {
            let data = ledger.list()?;
            if !maybe_print_json(out, sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
                if data.is_empty() {
                    writeln!(out, "No expenses yet.")?;
                } else {
                    writeln!(out, "{}", expense_table(&data, symbol))?;
                }
            }
        }
        "total" => {
            let total = ledger.total()?;
            writeln!(out, "Total amount spent: {}", fmt_money(&total, symbol))?;
        }
        "summary" => {
            let summary = ledger.category_summary()?;
            if !maybe_print_json(out, sub.get_flag("json"), sub.get_flag("jsonl"), &summary)? {
                if summary.is_empty() {
                    writeln!(out, "No expenses to summarize.")?;
                } else {
                    let rows = summary
                        .iter()
                        .map(|c| vec![c.category.clone(), fmt_money(&c.total, symbol)])
                        .collect();
                    writeln!(out, "{}", pretty_table(&["Category", "Total"], rows))?;
                }
            }
        }
        "last" => match ledger.last_added()? {
            Some(e) => write_expense(out, &e, symbol)?,
            None => writeln!(out, "No expenses found.")?,
        },
        "show" => {
            let id = parse_id(sub.get_one::<String>("ID").map(String::as_str).unwrap_or(""))?;
            match ledger.get(id)? {
                Some(e) => write_expense(out, &e, symbol)?,
                None => writeln!(out, "Expense with that ID not found.")?,
            }
        }
        "rm" => {
            let id = parse_id(sub.get_one::<String>("ID").map(String::as_str).unwrap_or(""))?;
            if ledger.delete(id)? {
                writeln!(out, "Deleted expense with ID: {}", id)?;
            } else {
                writeln!(out, "Expense ID not found.")?;
            }
        }
        other => return Err(anyhow!("Unknown command '{}'", other)),
    }
    Ok(())
}
