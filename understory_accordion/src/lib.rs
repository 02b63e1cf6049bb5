// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_accordion --heading-base-level=0

//! Understory Accordion: flat row indexing for two-level expandable lists.
//!
//! An accordion menu shows a list of parents; expanding a parent reveals its
//! children directly below it. Host list views usually want a single dense
//! strip of rows `0..len`, so this crate keeps the mapping between that flat
//! index space and hierarchical `(parent, child)` positions up to date as
//! parents are expanded and collapsed in any order.
//!
//! - [`Accordion`]: owns parent and child labels, the expansion state, and the
//!   flat row of every parent.
//! - [`Accordion::toggle`]: expands or collapses the parent at a flat row and
//!   returns the [`Mutation`] (inserted or removed rows) so the host can
//!   animate the change.
//! - [`Accordion::row_kind`], [`Accordion::label_for`], [`Accordion::locate`]:
//!   per-row queries for rendering. [`Accordion::rows`] walks all visible rows.
//! - [`Accordion::flat_index_of`]: the reverse mapping, from a [`RowPosition`]
//!   to its flat row.
//! - [`Resolver`]: pluggable flat row → parent lookup. [`LinearScan`] is the
//!   default; [`Fenwick`] keeps lookups and toggles logarithmic.
//!
//! This crate does not draw, animate, recycle cells, or pick row heights.
//! Host frameworks are responsible for:
//!
//! - Sizing their list from [`Accordion::len`] and re-querying it after every toggle.
//! - Filtering taps to parent rows before calling [`Accordion::toggle`]
//!   (child rows are rejected with [`AccordionError::InvalidToggleTarget`]).
//! - Bracketing the returned [`Mutation`] in whatever batched-update mechanism
//!   their list view uses.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_accordion::{Accordion, Mutation, RowKind};
//!
//! let mut menu = Accordion::new([
//!     ("Fruit", vec!["Apple", "Pear"]),
//!     ("Bread", vec![]),
//!     ("Cheese", vec!["Brie"]),
//! ])
//! .unwrap();
//! assert_eq!(menu.len(), 3);
//!
//! // Expanding the first parent inserts its two children after it.
//! assert_eq!(menu.toggle(0), Ok(Mutation::Inserted(1..3)));
//! assert_eq!(menu.len(), 5);
//! assert_eq!(menu.label_for(2), Ok(&"Pear"));
//! assert_eq!(menu.row_kind(2), Ok(RowKind::Child));
//!
//! // "Cheese" moved down by two rows.
//! assert_eq!(menu.parent_position(2), Ok(4));
//! assert_eq!(menu.resolve_parent(4), Ok(2));
//! ```
//!
//! ## Choosing a resolver
//!
//! ```rust
//! use understory_accordion::{Accordion, Fenwick, RowPosition};
//!
//! let content = (0..1000).map(|p| (p, vec![p * 10, p * 10 + 1]));
//! let mut menu = Accordion::with_resolver(Fenwick::new(), content).unwrap();
//!
//! menu.toggle_parent(500).unwrap();
//! assert_eq!(menu.locate(502), Ok(RowPosition::child(500, 1)));
//! assert_eq!(menu.label_for(502), Ok(&5001));
//! ```
//!
//! Queries never clamp: a flat row outside `0..len` yields
//! [`AccordionError::IndexOutOfRange`], and a failed call never changes state.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod accordion;
mod error;
mod resolver;
mod resolvers;
mod types;

pub use accordion::Accordion;
pub use error::{AccordionError, ConstructionError};
pub use resolver::Resolver;
pub use resolvers::{Fenwick, LinearScan};
pub use types::{Mutation, RowKind, RowPosition, VisibleRow};
