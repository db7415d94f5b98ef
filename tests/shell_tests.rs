// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pocketledger::ledger::Ledger;
use pocketledger::shell::{Flow, Shell};
use std::io::Cursor;

fn run_session(ledger: &mut Ledger, input: &str) -> String {
    let mut out = Vec::new();
    Shell::new(ledger, Cursor::new(input.as_bytes()), &mut out)
        .run()
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn full_session_follows_the_menu() {
    let mut ledger = Ledger::in_memory();
    let input = "1\n12.50\nFood\nlunch\n\
                 1\n5\nTransport\n\n\
                 7\n1\n\
                 1\n20\nFood\n\n\
                 3\n4\n5\n6\n99\n0\n";
    let out = run_session(&mut ledger, input);

    assert!(out.contains("Expense added with ID: 1"));
    assert!(out.contains("Expense added with ID: 2"));
    assert!(out.contains("Deleted expense with ID: 1"));
    assert!(out.contains("Expense added with ID: 3"));
    assert!(out.contains("Total amount spent: ₹25"));
    assert!(out.contains("Category-wise Summary:\nTransport: ₹5\nFood: ₹20\n"));
    assert!(out.contains("Last Expense ->\nID: 3\n"));
    assert!(out.contains("Expense with that ID not found."));
    assert!(out.trim_end().ends_with("Goodbye!"));
}

#[test]
fn bad_input_is_reported_and_the_loop_continues() {
    let mut ledger = Ledger::in_memory();
    let input = "x\n9\n1\nabc\n6\nseven\n7\n\n2\n0\n";
    let out = run_session(&mut ledger, input);

    assert!(out.contains("Please enter a valid number."));
    assert!(out.contains("Invalid input. Try again."));
    assert!(out.contains("Invalid amount. Please enter a number."));
    assert_eq!(out.matches("Invalid input. Please enter a number.").count(), 2);
    assert!(out.contains("No expenses yet."));
    assert!(out.contains("Goodbye!"));
    assert!(ledger.list().unwrap().is_empty());
}

#[test]
fn invalid_amount_does_not_ask_for_category() {
    let mut ledger = Ledger::in_memory();
    let out = run_session(&mut ledger, "1\nten\n0\n");
    assert!(!out.contains("What category is it?"));
    assert_eq!(ledger.add("1", "Food", "").unwrap(), 1);
}

#[test]
fn empty_views_have_their_own_messages() {
    let mut ledger = Ledger::in_memory();
    let out = run_session(&mut ledger, "2\n3\n4\n5\n7\n1\n0\n");
    assert!(out.contains("No expenses yet."));
    assert!(out.contains("Total amount spent: ₹0"));
    assert!(out.contains("No expenses to summarize."));
    assert!(out.contains("No expenses found."));
    assert!(out.contains("Expense ID not found."));
}

#[test]
fn end_of_input_ends_the_session() {
    let mut ledger = Ledger::in_memory();
    let out = run_session(&mut ledger, "1\n3\n");
    assert!(!out.contains("Goodbye!"));
    assert!(ledger.list().unwrap().is_empty());
}

#[test]
fn step_signals_exit_without_terminating() {
    let mut ledger = Ledger::in_memory();
    let mut out = Vec::new();
    let mut shell = Shell::new(&mut ledger, Cursor::new("3\n0\n".as_bytes()), &mut out);
    assert_eq!(shell.step().unwrap(), Flow::Continue);
    assert_eq!(shell.step().unwrap(), Flow::Exit);
    assert_eq!(shell.step().unwrap(), Flow::Exit);
}

#[test]
fn custom_symbol_is_used_for_amounts() {
    let mut ledger = Ledger::in_memory();
    ledger.add("3.75", "Coffee", "").unwrap();
    let mut out = Vec::new();
    Shell::new(&mut ledger, Cursor::new("3\n0\n".as_bytes()), &mut out)
        .with_symbol("$")
        .run()
        .unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Total amount spent: $3.75"));
}

#[test]
fn overflowing_total_is_reported_and_the_menu_continues() {
    let mut ledger = Ledger::in_memory();
    ledger.add("79228162514264337593543950335", "Big", "").unwrap();
    ledger.add("79228162514264337593543950335", "Big", "").unwrap();
    let out = run_session(&mut ledger, "3\n4\n5\n0\n");
    assert_eq!(
        out.matches("Amounts add up to more than can be represented").count(),
        2
    );
    assert!(out.contains("Last Expense ->\nID: 2\n"));
    assert!(out.contains("Goodbye!"));
}

#[test]
fn numbers_too_big_for_the_menu_are_out_of_range() {
    let mut ledger = Ledger::in_memory();
    let out = run_session(&mut ledger, "99999999999999999999\n0\n");
    assert!(out.contains("Invalid input. Try again."));
    assert!(!out.contains("Please enter a valid number."));
}
