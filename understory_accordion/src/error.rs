// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types returned by [`Accordion`](crate::Accordion).

use thiserror::Error;

/// Reasons the content handed to a constructor was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstructionError {
    /// Separate parent and child lists disagree on the number of parents.
    #[error("{parents} parents were given but {child_lists} child lists")]
    MismatchedChildLists {
        /// Number of parent labels.
        parents: usize,
        /// Number of child label lists.
        child_lists: usize,
    },
    /// Expanding every parent would produce more rows than `usize` can index.
    #[error("total row count does not fit in usize")]
    RowCountOverflow,
}

/// Errors reported by queries and mutations.
///
/// These are caller contract violations. Whenever one is returned the
/// accordion is left exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AccordionError {
    /// A flat index outside `0..len`.
    #[error("row {index} is out of range for {len} visible rows")]
    IndexOutOfRange {
        /// The requested flat index.
        index: usize,
        /// Visible row count at the time of the call.
        len: usize,
    },
    /// A toggle was requested on a child row.
    #[error("row {index} is a child row and cannot be toggled")]
    InvalidToggleTarget {
        /// The requested flat index.
        index: usize,
    },
    /// A parent ordinal outside `0..parent_count`.
    #[error("parent {parent} is out of range for {parents} parents")]
    ParentOutOfRange {
        /// The requested parent ordinal.
        parent: usize,
        /// Number of parents.
        parents: usize,
    },
    /// A child ordinal outside the parent's child list.
    #[error("child {child} is out of range for parent {parent} with {children} children")]
    ChildOutOfRange {
        /// The owning parent ordinal.
        parent: usize,
        /// The requested child ordinal.
        child: usize,
        /// Number of children of `parent`.
        children: usize,
    },
    /// The content could not be turned into an accordion.
    #[error(transparent)]
    Construction(#[from] ConstructionError),
}
