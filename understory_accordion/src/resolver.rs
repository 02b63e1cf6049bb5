// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolver trait for flat index to parent lookup.

/// Strategy used by [`Accordion`][crate::Accordion] to find the parent owning a flat row.
///
/// A resolver tracks one *span* per parent: the number of flat rows the
/// parent currently occupies (`1` when collapsed, `1 + children` when
/// expanded). Spans are therefore never zero, and parents are laid out back
/// to back in ordinal order.
pub trait Resolver {
    /// Forget all spans and track `parents` collapsed parents.
    fn reset(&mut self, parents: usize);

    /// Set the span of `parent`.
    ///
    /// `parent` is always in range and `span` is always at least `1`.
    fn set_span(&mut self, parent: usize, span: usize);

    /// Returns the parent whose span contains `index`, or `None` if `index`
    /// lies past the last row.
    fn resolve(&self, index: usize) -> Option<usize>;
}
