// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public row and mutation types.

use core::ops::Range;

/// Classification of a flat row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// The row of a parent itself, whether it is expanded or collapsed.
    Parent,
    /// A row belonging to one of an expanded parent's children.
    Child,
}

/// Hierarchical position of a row: a parent ordinal plus an optional child ordinal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RowPosition {
    /// Ordinal of the owning parent.
    pub parent: usize,
    /// Ordinal of the child within its parent, or `None` for the parent row.
    pub child: Option<usize>,
}

impl RowPosition {
    /// Position of a parent's own row.
    #[must_use]
    pub const fn parent(parent: usize) -> Self {
        Self {
            parent,
            child: None,
        }
    }

    /// Position of child `child` of parent `parent`.
    #[must_use]
    pub const fn child(parent: usize, child: usize) -> Self {
        Self {
            parent,
            child: Some(child),
        }
    }

    /// Returns the kind of row this position describes.
    #[must_use]
    pub const fn kind(&self) -> RowKind {
        match self.child {
            Some(_) => RowKind::Child,
            None => RowKind::Parent,
        }
    }
}

/// A visible row, as yielded by [`Accordion::rows`](crate::Accordion::rows).
#[derive(Debug)]
pub struct VisibleRow<'a, T> {
    /// Flat index of the row.
    pub index: usize,
    /// Hierarchical position of the row.
    pub position: RowPosition,
    /// Label of the parent or child occupying the row.
    pub label: &'a T,
}

impl<T> VisibleRow<'_, T> {
    /// Returns the kind of this row.
    #[must_use]
    pub const fn kind(&self) -> RowKind {
        self.position.kind()
    }
}

impl<T> Clone for VisibleRow<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for VisibleRow<'_, T> {}

/// Flat rows that appeared or disappeared as the result of a toggle.
///
/// Ranges are half-open and expressed in the flat index space as it is
/// *after* an insertion and *before* a removal, which is what a host needs
/// to animate the change. A parent without children produces an empty range
/// directly after its own row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mutation {
    /// The parent was expanded and its children now occupy these rows.
    Inserted(Range<usize>),
    /// The parent was collapsed and its children no longer occupy these rows.
    Removed(Range<usize>),
}

impl Mutation {
    /// Returns the affected flat range.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        match self {
            Self::Inserted(rows) | Self::Removed(rows) => rows.clone(),
        }
    }

    /// Returns `true` if no rows appeared or disappeared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range().is_empty()
    }
}
