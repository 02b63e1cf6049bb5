// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A text-mode host for an accordion menu.
//!
//! This example plays the role of a list view:
//! - builds placeholder content ("Item N" parents with a few "Subitem i" children each),
//! - renders every visible row using `Accordion::rows`,
//! - treats each command line row index as a tap, ignoring taps on child rows
//!   and toggling parent rows, then applies the returned insert/remove range.
//!
//! Run:
//! - `cargo run -p understory_demos --example accordion_menu -- 10 3 0 4 2 0`
//!
//! The first two arguments are the number of parents and the maximum number of
//! children per parent, both clamped to the limits in `understory_demos`; the
//! rest are tapped rows. Set `RUST_LOG=debug` to see the accordion's own
//! mutation log.

use std::env;
use std::process::ExitCode;

use env_logger::Env;
use understory_accordion::{Accordion, AccordionError, Mutation, RowKind};
use understory_demos::placeholder_content;

const DEFAULT_PARENTS: usize = 10;
const DEFAULT_MAX_CHILDREN: usize = 3;

fn render(menu: &Accordion<String>) {
    println!("{} rows", menu.len());
    for row in menu.rows() {
        match row.kind() {
            RowKind::Parent => println!("  {:>3}  {}", row.index, row.label),
            RowKind::Child => println!("  {:>3}      {}", row.index, row.label),
        }
    }
}

fn tap(menu: &mut Accordion<String>, row: usize) -> Result<(), AccordionError> {
    if menu.row_kind(row)? == RowKind::Child {
        log::info!("a child was tapped: row {row} ({})", menu.label_for(row)?);
        return Ok(());
    }
    match menu.toggle(row)? {
        Mutation::Inserted(rows) => println!("tap {row}: insert rows {rows:?}"),
        Mutation::Removed(rows) => println!("tap {row}: remove rows {rows:?}"),
    }
    Ok(())
}

fn parse_arg(arg: &str) -> Option<usize> {
    let parsed = arg.parse().ok();
    if parsed.is_none() {
        log::warn!("ignoring non-numeric argument {arg:?}");
    }
    parsed
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut args = env::args().skip(1);
    let parents = args
        .next()
        .and_then(|a| parse_arg(&a))
        .unwrap_or(DEFAULT_PARENTS);
    let max_children = args
        .next()
        .and_then(|a| parse_arg(&a))
        .unwrap_or(DEFAULT_MAX_CHILDREN);
    let taps: Vec<usize> = args.filter_map(|a| parse_arg(&a)).collect();

    let mut menu = match Accordion::new(placeholder_content(parents, max_children)) {
        Ok(menu) => menu,
        Err(err) => {
            log::error!("cannot build menu: {err}");
            return ExitCode::FAILURE;
        }
    };
    render(&menu);

    for row in taps {
        match tap(&mut menu, row) {
            Ok(()) => render(&menu),
            Err(err) => log::warn!("tap rejected: {err}"),
        }
    }
    ExitCode::SUCCESS
}
