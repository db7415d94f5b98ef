// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, arg, value_parser};
use std::path::PathBuf;

fn output_flags(cmd: Command) -> Command {
    cmd.arg(arg!(--json "Print as pretty JSON").conflicts_with("jsonl"))
        .arg(arg!(--jsonl "Print as JSON lines"))
}

pub fn build_cli() -> Command {
    Command::new("pocketledger")
        .about("Personal expense ledger")
        .version(clap::crate_version!())
        .arg(
            Arg::new("db")
                .long("db")
                .value_name("PATH")
                .env("POCKETLEDGER_DB")
                .value_parser(value_parser!(PathBuf))
                .global(true)
                .help("SQLite database file (defaults to the platform data dir)"),
        )
        .arg(
            Arg::new("memory")
                .long("memory")
                .action(ArgAction::SetTrue)
                .conflicts_with("db")
                .global(true)
                .help("Keep expenses in memory only; nothing is saved on exit"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_name("PATH")
                .env("POCKETLEDGER_LOG_FILE")
                .value_parser(value_parser!(PathBuf))
                .global(true)
                .help("Audit log file"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("FILTER")
                .env("POCKETLEDGER_LOG")
                .global(true)
                .help("Audit log filter, e.g. info or warn [default: info]"),
        )
        .arg(
            Arg::new("symbol")
                .long("symbol")
                .value_name("SYM")
                .env("POCKETLEDGER_SYMBOL")
                .global(true)
                .help("Currency symbol used when printing amounts [default: ₹]"),
        )
        .subcommand(Command::new("shell").about("Interactive menu (default)"))
        .subcommand(
            Command::new("add")
                .about("Record an expense")
                .allow_negative_numbers(true)
                .arg(arg!(<AMOUNT> "Amount spent").allow_hyphen_values(true))
                .arg(arg!(<CATEGORY> "Category label"))
                .arg(arg!(--note <NOTE> "Optional note").required(false)),
        )
        .subcommand(output_flags(
            Command::new("list").about("List all expenses"),
        ))
        .subcommand(Command::new("total").about("Total amount spent"))
        .subcommand(output_flags(
            Command::new("summary").about("Totals per category"),
        ))
        .subcommand(Command::new("last").about("Most recently added expense"))
        .subcommand(
            Command::new("show")
                .about("Show one expense")
                .arg(arg!(<ID> "Expense ID")),
        )
        .subcommand(
            Command::new("rm")
                .about("Delete an expense")
                .arg(arg!(<ID> "Expense ID")),
        )
}
