// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::io;
use std::path::PathBuf;

use pocketledger::{
    cli, commands, db, ledger::Ledger, logging, shell::Shell, store::SqliteStore, utils,
};

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();

    let log_file = match matches.get_one::<PathBuf>("log-file") {
        Some(p) => p.clone(),
        None => db::log_path()?,
    };
    let level = matches
        .get_one::<String>("log-level")
        .map(String::as_str)
        .unwrap_or(logging::DEFAULT_FILTER);
    logging::init(&log_file, level)?;

    let symbol = matches
        .get_one::<String>("symbol")
        .map(String::as_str)
        .unwrap_or(utils::DEFAULT_SYMBOL);

    let mut ledger = if matches.get_flag("memory") {
        Ledger::in_memory()
    } else {
        let path = match matches.get_one::<PathBuf>("db") {
            Some(p) => p.clone(),
            None => db::db_path()?,
        };
        let conn = db::open_or_init(&path)?;
        Ledger::sqlite(SqliteStore::new(conn))
    };

    match matches.subcommand() {
        None | Some(("shell", _)) => {
            let stdin = io::stdin();
            Shell::new(&mut ledger, stdin.lock(), io::stdout().lock())
                .with_symbol(symbol)
                .run()?;
        }
        Some((name, sub)) => {
            commands::expenses::handle(&mut ledger, name, sub, symbol, &mut io::stdout().lock())?
        }
    }
    Ok(())
}
