// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Interactive text menu over a [`Ledger`].
//!
//! The shell reads from any `BufRead` and writes to any `Write`, so the same
//! loop drives a terminal session and the tests. Input mistakes are reported
//! and the loop carries on; only storage and I/O failures end a session.

use crate::error::{LedgerError, Result};
use crate::ledger::Ledger;
use crate::utils::{
    DEFAULT_SYMBOL, expense_table, fmt_money, parse_amount, parse_id, write_expense,
};
use std::io::{BufRead, Write};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    Add,
    List,
    Total,
    Summary,
    Last,
    Show,
    Delete,
}

impl MenuChoice {
    pub fn parse(s: &str) -> Result<Self> {
        let n: i64 = s
            .trim()
            .parse()
            .map_err(|_| LedgerError::InvalidMenuChoice(s.trim().to_string()))?;
        match n {
            0 => Ok(MenuChoice::Exit),
            1 => Ok(MenuChoice::Add),
            2 => Ok(MenuChoice::List),
            3 => Ok(MenuChoice::Total),
            4 => Ok(MenuChoice::Summary),
            5 => Ok(MenuChoice::Last),
            6 => Ok(MenuChoice::Show),
            7 => Ok(MenuChoice::Delete),
            _ => Err(LedgerError::InvalidMenuChoice(n.to_string())),
        }
    }
}

/// What the loop should do after one menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

const MENU: &str = "\nPersonal Expense Tracker
1. Add Expense
2. View Expenses
3. View Total Spent
4. View Category Summary
5. View Last Expense
6. View Expense by ID
7. Delete Expense by ID
0. Exit";

pub struct Shell<'a, R, W> {
    ledger: &'a mut Ledger,
    input: R,
    out: W,
    symbol: String,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(ledger: &'a mut Ledger, input: R, out: W) -> Self {
        Self {
            ledger,
            input,
            out,
            symbol: DEFAULT_SYMBOL.to_string(),
        }
    }

    pub fn with_symbol(mut self, symbol: &str) -> Self {
        self.symbol = symbol.to_string();
        self
    }

    /// Loop until the user picks Exit or the input is closed.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.out, "{}", MENU)?;
            if self.step()? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Read and act on a single menu selection.
    pub fn step(&mut self) -> Result<Flow> {
        let Some(line) = self.prompt("Choose an option:")? else {
            info!("Input closed, leaving");
            return Ok(Flow::Exit);
        };
        let outcome = MenuChoice::parse(&line).and_then(|choice| self.dispatch(choice));
        match outcome {
            Ok(flow) => Ok(flow),
            Err(e) if e.is_recoverable() => {
                writeln!(self.out, "{}", user_message(&e))?;
                Ok(Flow::Continue)
            }
            Err(e) => Err(e),
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Exit => {
                writeln!(self.out, "Goodbye!")?;
                info!("App exited by user");
                return Ok(Flow::Exit);
            }
            MenuChoice::Add => return self.add(),
            MenuChoice::List => self.list()?,
            MenuChoice::Total => {
                let total = self.ledger.total()?;
                writeln!(
                    self.out,
                    "Total amount spent: {}",
                    fmt_money(&total, &self.symbol)
                )?;
            }
            MenuChoice::Summary => self.summary()?,
            MenuChoice::Last => match self.ledger.last_added()? {
                Some(e) => {
                    writeln!(self.out, "Last Expense ->")?;
                    write_expense(&mut self.out, &e, &self.symbol)?;
                }
                None => writeln!(self.out, "No expenses found.")?,
            },
            MenuChoice::Show => return self.show(),
            MenuChoice::Delete => return self.delete(),
        }
        Ok(Flow::Continue)
    }

    fn add(&mut self) -> Result<Flow> {
        let Some(raw) = self.prompt("How much is the expense?")? else {
            return Ok(Flow::Exit);
        };
        // Reject a bad amount before asking anything else
        let amount = parse_amount(&raw).inspect_err(|_| {
            warn!("Failed to add expense - invalid amount {:?}", raw.trim());
        })?;
        let Some(category) = self.prompt("What category is it?")? else {
            return Ok(Flow::Exit);
        };
        let Some(note) = self.prompt("Note (optional):")? else {
            return Ok(Flow::Exit);
        };
        let id = self.ledger.add_amount(amount, &category, &note)?;
        writeln!(self.out, "Expense added with ID: {}", id)?;
        Ok(Flow::Continue)
    }

    fn list(&mut self) -> Result<()> {
        let data = self.ledger.list()?;
        if data.is_empty() {
            writeln!(self.out, "No expenses yet.")?;
        } else {
            writeln!(self.out, "{}", expense_table(&data, &self.symbol))?;
        }
        Ok(())
    }

    fn summary(&mut self) -> Result<()> {
        let summary = self.ledger.category_summary()?;
        if summary.is_empty() {
            writeln!(self.out, "No expenses to summarize.")?;
            return Ok(());
        }
        writeln!(self.out, "Category-wise Summary:")?;
        for c in &summary {
            writeln!(
                self.out,
                "{}: {}",
                c.category,
                fmt_money(&c.total, &self.symbol)
            )?;
        }
        Ok(())
    }

    fn show(&mut self) -> Result<Flow> {
        let Some(raw) = self.prompt("Enter expense ID to view:")? else {
            return Ok(Flow::Exit);
        };
        let id = parse_id(&raw).inspect_err(|_| {
            warn!("Invalid input when trying to view by ID");
        })?;
        match self.ledger.get(id)? {
            Some(e) => {
                writeln!(self.out, "\nExpense Found:")?;
                write_expense(&mut self.out, &e, &self.symbol)?;
            }
            None => writeln!(self.out, "Expense with that ID not found.")?,
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow> {
        let Some(raw) = self.prompt("Enter expense ID to delete:")? else {
            return Ok(Flow::Exit);
        };
        let id = parse_id(&raw).inspect_err(|_| {
            warn!("Invalid input when trying to delete by ID");
        })?;
        if self.ledger.delete(id)? {
            writeln!(self.out, "Deleted expense with ID: {}", id)?;
        } else {
            writeln!(self.out, "Expense ID not found.")?;
        }
        Ok(Flow::Continue)
    }

    /// Print a question and read one line. `None` means end of input.
    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.out, "{}\n-> ", question)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

fn user_message(e: &LedgerError) -> String {
    match e {
        LedgerError::InvalidAmount(_) => "Invalid amount. Please enter a number.".to_string(),
        LedgerError::InvalidIdentifier(_) => "Invalid input. Please enter a number.".to_string(),
        LedgerError::InvalidMenuChoice(raw) => {
            if is_integer(raw) {
                warn!("Invalid menu option selected: {}", raw);
                "Invalid input. Try again.".to_string()
            } else {
                warn!("Invalid menu input - not a number");
                "Please enter a valid number.".to_string()
            }
        }
        other => other.to_string(),
    }
}

/// Any whole number, however large, counts as a menu attempt.
fn is_integer(raw: &str) -> bool {
    let digits = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}
