// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolver implementations.
//!
//! - `linear`: walks parents in order, accumulating their spans. O(parents) per lookup,
//!   O(1) per toggle. Plenty for menus with tens of parents.
//! - `fenwick`: a binary indexed tree over spans. O(log parents) for both lookups and toggles.

pub(crate) mod fenwick;
pub(crate) mod linear;

pub use fenwick::Fenwick;
pub use linear::LinearScan;
