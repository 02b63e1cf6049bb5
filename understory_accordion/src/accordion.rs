// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Accordion`] index: hierarchy, expansion state, and the flat offset table.

use alloc::vec::Vec;
use core::iter;

use smallvec::SmallVec;

use crate::error::{AccordionError, ConstructionError};
use crate::resolver::Resolver;
use crate::resolvers::LinearScan;
use crate::types::{Mutation, RowKind, RowPosition, VisibleRow};

#[derive(Clone, Debug)]
struct Parent<T> {
    label: T,
    children: Vec<T>,
}

/// A two-level list flattened into rows `0..len`.
///
/// Each parent occupies one row, followed by one row per child while it is
/// expanded. The accordion keeps, for every parent, the flat index of its own
/// row, so mapping in either direction between flat rows and
/// [`RowPosition`]s is cheap after any sequence of toggles.
///
/// Flat to parent resolution is delegated to a [`Resolver`]; the default
/// [`LinearScan`] suits lists with tens of parents, and
/// [`Fenwick`](crate::Fenwick) keeps lookups logarithmic for large ones.
#[derive(Clone, Debug)]
pub struct Accordion<T, R: Resolver = LinearScan> {
    parents: Vec<Parent<T>>,
    expanded: Vec<bool>,
    // Currently expanded parents, in the order they were expanded.
    expansion_order: SmallVec<[usize; 8]>,
    // Flat row of each parent's own row, kept exact for collapsed parents too.
    positions: Vec<usize>,
    len: usize,
    resolver: R,
}

impl<T> Accordion<T, LinearScan> {
    /// Builds a collapsed accordion from `(parent label, child labels)` pairs.
    ///
    /// Fails only if the fully expanded row count would overflow `usize`.
    pub fn new<I, C>(parents: I) -> Result<Self, AccordionError>
    where
        I: IntoIterator<Item = (T, C)>,
        C: IntoIterator<Item = T>,
    {
        Self::with_resolver(LinearScan::new(), parents)
    }

    /// Builds a collapsed accordion from separate parent and child label lists.
    ///
    /// `children[p]` holds the children of `parents[p]`; mismatched lengths
    /// are rejected with [`ConstructionError::MismatchedChildLists`].
    pub fn from_parts(parents: Vec<T>, children: Vec<Vec<T>>) -> Result<Self, AccordionError> {
        Self::from_parts_with_resolver(LinearScan::new(), parents, children)
    }
}

impl<T, R: Resolver + Default> Default for Accordion<T, R> {
    fn default() -> Self {
        let mut resolver = R::default();
        resolver.reset(0);
        Self {
            parents: Vec::new(),
            expanded: Vec::new(),
            expansion_order: SmallVec::new(),
            positions: Vec::new(),
            len: 0,
            resolver,
        }
    }
}

impl<T, R: Resolver> Accordion<T, R> {
    /// Builds a collapsed accordion that resolves rows with `resolver`.
    pub fn with_resolver<I, C>(resolver: R, parents: I) -> Result<Self, AccordionError>
    where
        I: IntoIterator<Item = (T, C)>,
        C: IntoIterator<Item = T>,
    {
        Self::assemble(resolver, collect_parents(parents))
    }

    /// Like [`Accordion::from_parts`], resolving rows with `resolver`.
    pub fn from_parts_with_resolver(
        resolver: R,
        parents: Vec<T>,
        children: Vec<Vec<T>>,
    ) -> Result<Self, AccordionError> {
        if parents.len() != children.len() {
            return Err(ConstructionError::MismatchedChildLists {
                parents: parents.len(),
                child_lists: children.len(),
            }
            .into());
        }
        let parents = parents
            .into_iter()
            .zip(children)
            .map(|(label, children)| Parent { label, children })
            .collect();
        Self::assemble(resolver, parents)
    }

    fn assemble(mut resolver: R, parents: Vec<Parent<T>>) -> Result<Self, AccordionError> {
        check_row_count(&parents)?;
        let count = parents.len();
        resolver.reset(count);
        Ok(Self {
            parents,
            expanded: alloc::vec![false; count],
            expansion_order: SmallVec::new(),
            positions: (0..count).collect(),
            len: count,
            resolver,
        })
    }

    /// Replaces all content and collapses every parent.
    ///
    /// On error the previous content and expansion state are kept.
    pub fn rebuild<I, C>(&mut self, parents: I) -> Result<(), AccordionError>
    where
        I: IntoIterator<Item = (T, C)>,
        C: IntoIterator<Item = T>,
    {
        let parents = collect_parents(parents);
        check_row_count(&parents)?;
        let count = parents.len();
        self.parents = parents;
        self.expanded.clear();
        self.expanded.resize(count, false);
        self.expansion_order.clear();
        self.positions.clear();
        self.positions.extend(0..count);
        self.len = count;
        self.resolver.reset(count);
        log::debug!("accordion rebuilt with {count} parents");
        Ok(())
    }

    /// Number of visible rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no rows at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of parents, expanded or not.
    #[must_use]
    pub fn parent_count(&self) -> usize {
        self.parents.len()
    }

    /// Returns a shared reference to the resolver.
    #[must_use]
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Number of children owned by `parent`, visible or not.
    pub fn child_count(&self, parent: usize) -> Result<usize, AccordionError> {
        Ok(self.parent(parent)?.children.len())
    }

    /// Label of `parent`.
    pub fn parent_label(&self, parent: usize) -> Result<&T, AccordionError> {
        Ok(&self.parent(parent)?.label)
    }

    /// Child labels of `parent`, visible or not.
    pub fn children(&self, parent: usize) -> Result<&[T], AccordionError> {
        Ok(&self.parent(parent)?.children)
    }

    /// Returns `true` if `parent` is expanded.
    pub fn is_expanded(&self, parent: usize) -> Result<bool, AccordionError> {
        self.check_parent(parent)?;
        Ok(self.expanded[parent])
    }

    /// Flat row currently occupied by `parent`'s own row.
    pub fn parent_position(&self, parent: usize) -> Result<usize, AccordionError> {
        self.check_parent(parent)?;
        Ok(self.positions[parent])
    }

    /// Expanded parents, in the order they were expanded.
    pub fn expanded_parents(&self) -> impl Iterator<Item = usize> + '_ {
        self.expansion_order.iter().copied()
    }

    /// Parent owning row `index`, whether `index` is the parent's row or one of its children.
    pub fn resolve_parent(&self, index: usize) -> Result<usize, AccordionError> {
        if index >= self.len {
            return Err(self.out_of_range(index));
        }
        self.resolver
            .resolve(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Whether row `index` is a parent row or a child row.
    pub fn row_kind(&self, index: usize) -> Result<RowKind, AccordionError> {
        let parent = self.resolve_parent(index)?;
        Ok(if self.expanded[parent] && index != self.positions[parent] {
            RowKind::Child
        } else {
            RowKind::Parent
        })
    }

    /// Hierarchical position of row `index`.
    pub fn locate(&self, index: usize) -> Result<RowPosition, AccordionError> {
        let parent = self.resolve_parent(index)?;
        Ok(match index - self.positions[parent] {
            0 => RowPosition::parent(parent),
            offset => RowPosition::child(parent, offset - 1),
        })
    }

    /// Label of the parent or child occupying row `index`.
    pub fn label_for(&self, index: usize) -> Result<&T, AccordionError> {
        let position = self.locate(index)?;
        let parent = &self.parents[position.parent];
        Ok(match position.child {
            None => &parent.label,
            Some(child) => &parent.children[child],
        })
    }

    /// Flat row of `position`, or `None` for a child of a collapsed parent.
    pub fn flat_index_of(&self, position: RowPosition) -> Result<Option<usize>, AccordionError> {
        let parent = self.parent(position.parent)?;
        let start = self.positions[position.parent];
        let Some(child) = position.child else {
            return Ok(Some(start));
        };
        if child >= parent.children.len() {
            return Err(AccordionError::ChildOutOfRange {
                parent: position.parent,
                child,
                children: parent.children.len(),
            });
        }
        Ok(self.expanded[position.parent].then_some(start + 1 + child))
    }

    /// Visible rows in flat order.
    pub fn rows(&self) -> impl Iterator<Item = VisibleRow<'_, T>> + '_ {
        self.parents
            .iter()
            .enumerate()
            .flat_map(move |(p, parent)| {
                let start = self.positions[p];
                let visible: &[T] = if self.expanded[p] {
                    &parent.children
                } else {
                    &[]
                };
                iter::once(VisibleRow {
                    index: start,
                    position: RowPosition::parent(p),
                    label: &parent.label,
                })
                .chain(visible.iter().enumerate().map(move |(c, label)| {
                    VisibleRow {
                        index: start + 1 + c,
                        position: RowPosition::child(p, c),
                        label,
                    }
                }))
            })
    }

    /// Expands or collapses the parent whose own row is `index`.
    ///
    /// Returns the rows that were inserted (expand) or removed (collapse).
    /// Toggling a child row fails with [`AccordionError::InvalidToggleTarget`]
    /// and leaves the accordion untouched.
    pub fn toggle(&mut self, index: usize) -> Result<Mutation, AccordionError> {
        let parent = self.resolve_parent(index)?;
        if self.positions[parent] != index {
            return Err(AccordionError::InvalidToggleTarget { index });
        }
        Ok(self.apply_toggle(parent))
    }

    /// Expands or collapses `parent`, wherever its row currently is.
    pub fn toggle_parent(&mut self, parent: usize) -> Result<Mutation, AccordionError> {
        self.check_parent(parent)?;
        Ok(self.apply_toggle(parent))
    }

    /// Puts `parent` into the requested state.
    ///
    /// Returns `None` if it was already there.
    pub fn set_expanded(
        &mut self,
        parent: usize,
        expanded: bool,
    ) -> Result<Option<Mutation>, AccordionError> {
        self.check_parent(parent)?;
        Ok((self.expanded[parent] != expanded).then(|| self.apply_toggle(parent)))
    }

    /// Collapses every expanded parent.
    ///
    /// Removals are returned from the highest rows down, so each range is
    /// valid when applied after the ones before it.
    pub fn collapse_all(&mut self) -> Vec<Mutation> {
        let mut expanded: SmallVec<[usize; 8]> = self.expansion_order.clone();
        expanded.sort_unstable_by(|a, b| b.cmp(a));
        expanded
            .into_iter()
            .map(|parent| self.apply_toggle(parent))
            .collect()
    }

    fn apply_toggle(&mut self, parent: usize) -> Mutation {
        let start = self.positions[parent];
        let count = self.parents[parent].children.len();
        let rows = start + 1..start + 1 + count;

        let mutation = if self.expanded[parent] {
            self.expanded[parent] = false;
            self.expansion_order.retain(|p| *p != parent);
            for position in &mut self.positions[parent + 1..] {
                *position -= count;
            }
            self.len -= count;
            self.resolver.set_span(parent, 1);
            Mutation::Removed(rows)
        } else {
            self.expanded[parent] = true;
            self.expansion_order.push(parent);
            for position in &mut self.positions[parent + 1..] {
                *position += count;
            }
            self.len += count;
            self.resolver.set_span(parent, 1 + count);
            Mutation::Inserted(rows)
        };

        debug_assert_eq!(
            self.resolver.resolve(start),
            Some(parent),
            "resolver and offset table disagree on parent {parent}"
        );
        log::debug!(
            "parent {parent} at row {start}: {mutation:?}, {} rows visible",
            self.len
        );
        mutation
    }

    fn parent(&self, parent: usize) -> Result<&Parent<T>, AccordionError> {
        self.parents
            .get(parent)
            .ok_or(AccordionError::ParentOutOfRange {
                parent,
                parents: self.parents.len(),
            })
    }

    fn check_parent(&self, parent: usize) -> Result<(), AccordionError> {
        self.parent(parent).map(|_| ())
    }

    fn out_of_range(&self, index: usize) -> AccordionError {
        AccordionError::IndexOutOfRange {
            index,
            len: self.len,
        }
    }
}

fn collect_parents<T, I, C>(parents: I) -> Vec<Parent<T>>
where
    I: IntoIterator<Item = (T, C)>,
    C: IntoIterator<Item = T>,
{
    parents
        .into_iter()
        .map(|(label, children)| Parent {
            label,
            children: children.into_iter().collect(),
        })
        .collect()
}

fn check_row_count<T>(parents: &[Parent<T>]) -> Result<usize, ConstructionError> {
    parents
        .iter()
        .try_fold(parents.len(), |rows, parent| {
            rows.checked_add(parent.children.len())
        })
        .ok_or(ConstructionError::RowCountOverflow)
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::Accordion;
    use crate::error::{AccordionError, ConstructionError};
    use crate::resolvers::Fenwick;
    use crate::types::{Mutation, RowKind, RowPosition};

    fn menu() -> Accordion<&'static str> {
        Accordion::new([
            ("P0", vec!["a", "b"]),
            ("P1", vec![]),
            ("P2", vec!["c"]),
        ])
        .unwrap()
    }

    fn labels<R: crate::Resolver>(acc: &Accordion<&'static str, R>) -> Vec<&'static str> {
        (0..acc.len()).map(|i| *acc.label_for(i).unwrap()).collect()
    }

    fn kinds<R: crate::Resolver>(acc: &Accordion<&'static str, R>) -> Vec<RowKind> {
        (0..acc.len()).map(|i| acc.row_kind(i).unwrap()).collect()
    }

    #[test]
    fn starts_collapsed() {
        let acc = menu();
        assert_eq!(acc.len(), 3);
        assert_eq!(labels(&acc), ["P0", "P1", "P2"]);
        assert_eq!(kinds(&acc), [RowKind::Parent; 3]);
        assert_eq!(acc.expanded_parents().count(), 0);
        for p in 0..3 {
            assert_eq!(acc.parent_position(p), Ok(p));
        }
    }

    #[test]
    fn expanding_inserts_children_after_parent() {
        let mut acc = menu();
        assert_eq!(acc.toggle(0), Ok(Mutation::Inserted(1..3)));
        assert_eq!(acc.len(), 5);
        assert_eq!(labels(&acc), ["P0", "a", "b", "P1", "P2"]);
        assert_eq!(acc.row_kind(1), Ok(RowKind::Child));
        assert_eq!(acc.row_kind(2), Ok(RowKind::Child));
        assert_eq!(acc.row_kind(3), Ok(RowKind::Parent));
        assert_eq!(acc.parent_position(1), Ok(3));
        assert_eq!(acc.parent_position(2), Ok(4));
    }

    #[test]
    fn collapsing_restores_initial_rows() {
        let mut acc = menu();
        acc.toggle(0).unwrap();
        assert_eq!(acc.toggle(0), Ok(Mutation::Removed(1..3)));
        assert_eq!(acc.len(), 3);
        assert_eq!(labels(&acc), ["P0", "P1", "P2"]);
        assert_eq!(kinds(&acc), [RowKind::Parent; 3]);
        assert_eq!(acc.is_expanded(0), Ok(false));
        for p in 0..3 {
            assert_eq!(acc.parent_position(p), Ok(p));
        }
    }

    #[test]
    fn childless_parent_expands_without_rows() {
        let mut acc = menu();
        acc.toggle(0).unwrap();
        assert_eq!(acc.toggle(3), Ok(Mutation::Inserted(4..4)));
        assert_eq!(acc.len(), 5);
        assert_eq!(acc.is_expanded(1), Ok(true));
        assert_eq!(acc.row_kind(3), Ok(RowKind::Parent));

        assert_eq!(acc.toggle(4), Ok(Mutation::Inserted(5..6)));
        assert_eq!(acc.len(), 6);
        assert_eq!(acc.label_for(5), Ok(&"c"));
        assert_eq!(acc.expanded_parents().collect::<Vec<_>>(), [0, 1, 2]);
    }

    #[test]
    fn toggling_a_child_row_is_rejected() {
        let mut acc = menu();
        acc.toggle(0).unwrap();
        let before = (labels(&acc), kinds(&acc), acc.len());

        assert_eq!(
            acc.toggle(2),
            Err(AccordionError::InvalidToggleTarget { index: 2 })
        );
        assert_eq!((labels(&acc), kinds(&acc), acc.len()), before);
        assert_eq!(acc.expanded_parents().collect::<Vec<_>>(), [0]);
    }

    #[test]
    fn out_of_range_rows_are_reported_not_clamped() {
        let mut acc = menu();
        let err = AccordionError::IndexOutOfRange { index: 3, len: 3 };
        assert_eq!(acc.resolve_parent(3), Err(err.clone()));
        assert_eq!(acc.row_kind(3), Err(err.clone()));
        assert_eq!(acc.label_for(3), Err(err.clone()));
        assert_eq!(acc.toggle(3), Err(err));
        assert_eq!(acc.len(), 3);
    }

    #[test]
    fn empty_accordion_has_no_rows() {
        let mut acc: Accordion<&str> = Accordion::new(Vec::<(&str, Vec<&str>)>::new()).unwrap();
        assert!(acc.is_empty());
        assert_eq!(acc.rows().count(), 0);
        assert_eq!(
            acc.toggle(0),
            Err(AccordionError::IndexOutOfRange { index: 0, len: 0 })
        );
        assert!(acc.collapse_all().is_empty());

        let default: Accordion<&str> = Accordion::default();
        assert!(default.is_empty());
    }

    #[test]
    fn from_parts_rejects_mismatched_lists() {
        let err = Accordion::from_parts(vec!["P0", "P1"], vec![vec!["a"]]).unwrap_err();
        assert_eq!(
            err,
            AccordionError::Construction(ConstructionError::MismatchedChildLists {
                parents: 2,
                child_lists: 1,
            })
        );

        let acc = Accordion::from_parts(vec!["P0", "P1"], vec![vec!["a"], vec![]]).unwrap();
        assert_eq!(acc.child_count(0), Ok(1));
        assert_eq!(acc.children(1), Ok(&[][..]));
    }

    #[test]
    fn locate_and_flat_index_of_are_inverse() {
        let mut acc = menu();
        acc.toggle(0).unwrap();
        acc.toggle_parent(2).unwrap();

        for index in 0..acc.len() {
            let position = acc.locate(index).unwrap();
            assert_eq!(acc.flat_index_of(position), Ok(Some(index)));
        }
        assert_eq!(acc.locate(5), Ok(RowPosition::child(2, 0)));
    }

    #[test]
    fn hidden_children_have_no_flat_row() {
        let acc = menu();
        assert_eq!(acc.flat_index_of(RowPosition::child(0, 1)), Ok(None));
        assert_eq!(acc.flat_index_of(RowPosition::parent(2)), Ok(Some(2)));
        assert_eq!(
            acc.flat_index_of(RowPosition::child(0, 2)),
            Err(AccordionError::ChildOutOfRange {
                parent: 0,
                child: 2,
                children: 2,
            })
        );
        assert_eq!(
            acc.flat_index_of(RowPosition::parent(3)),
            Err(AccordionError::ParentOutOfRange {
                parent: 3,
                parents: 3,
            })
        );
    }

    #[test]
    fn rows_match_per_index_queries() {
        let mut acc = menu();
        acc.toggle(0).unwrap();
        acc.toggle(4).unwrap();

        let rows: Vec<_> = acc.rows().collect();
        assert_eq!(rows.len(), acc.len());
        for (expected, row) in rows.iter().enumerate() {
            assert_eq!(row.index, expected);
            assert_eq!(Ok(row.position), acc.locate(expected));
            assert_eq!(Ok(row.kind()), acc.row_kind(expected));
            assert_eq!(Ok(row.label), acc.label_for(expected));
        }
    }

    #[test]
    fn set_expanded_is_a_no_op_in_the_requested_state() {
        let mut acc = menu();
        assert_eq!(acc.set_expanded(2, false), Ok(None));
        assert_eq!(acc.set_expanded(2, true), Ok(Some(Mutation::Inserted(3..4))));
        assert_eq!(acc.set_expanded(2, true), Ok(None));
        assert_eq!(
            acc.set_expanded(9, true),
            Err(AccordionError::ParentOutOfRange {
                parent: 9,
                parents: 3,
            })
        );
    }

    #[test]
    fn collapse_all_removes_from_the_bottom_up() {
        let mut acc = menu();
        acc.toggle_parent(2).unwrap();
        acc.toggle_parent(0).unwrap();
        assert_eq!(labels(&acc), ["P0", "a", "b", "P1", "P2", "c"]);

        assert_eq!(
            acc.collapse_all(),
            [Mutation::Removed(5..6), Mutation::Removed(1..3)]
        );
        assert_eq!(acc.len(), 3);
        assert_eq!(acc.expanded_parents().count(), 0);
    }

    #[test]
    fn rebuild_resets_expansion() {
        let mut acc = menu();
        acc.toggle(0).unwrap();
        acc.rebuild([("Q0", vec!["x"]), ("Q1", vec!["y", "z"])])
            .unwrap();

        assert_eq!(acc.len(), 2);
        assert_eq!(acc.parent_count(), 2);
        assert_eq!(labels(&acc), ["Q0", "Q1"]);
        assert_eq!(acc.toggle(1), Ok(Mutation::Inserted(2..4)));
        assert_eq!(labels(&acc), ["Q0", "Q1", "y", "z"]);
    }

    #[test]
    fn row_count_overflow_is_rejected() {
        let overflow = AccordionError::Construction(ConstructionError::RowCountOverflow);

        // Zero-sized labels: one parent plus `usize::MAX` children, nothing allocated.
        let err = Accordion::new([((), vec![(); usize::MAX])]).unwrap_err();
        assert_eq!(err, overflow);
        let err = Accordion::from_parts(vec![()], vec![vec![(); usize::MAX]]).unwrap_err();
        assert_eq!(err, overflow);

        let mut acc = Accordion::new([((), vec![(); 2]), ((), vec![])]).unwrap();
        acc.toggle(0).unwrap();
        assert_eq!(
            acc.rebuild([((), vec![(); usize::MAX])]),
            Err(overflow)
        );
        assert_eq!(acc.len(), 4);
        assert_eq!(acc.parent_count(), 2);
        assert_eq!(acc.is_expanded(0), Ok(true));
        assert_eq!(acc.parent_position(1), Ok(3));
        assert_eq!(acc.row_kind(2), Ok(RowKind::Child));
    }

    #[test]
    fn fenwick_resolver_answers_like_linear_scan() {
        let content = [
            ("P0", vec!["a", "b"]),
            ("P1", vec![]),
            ("P2", vec!["c"]),
            ("P3", vec!["d", "e", "f"]),
        ];
        let mut linear = Accordion::new(content.clone()).unwrap();
        let mut fenwick = Accordion::with_resolver(Fenwick::new(), content).unwrap();

        for parent in [3, 0, 2, 0, 1, 3] {
            assert_eq!(linear.toggle_parent(parent), fenwick.toggle_parent(parent));
            assert_eq!(labels(&linear), labels(&fenwick));
            assert_eq!(kinds(&linear), kinds(&fenwick));
        }
    }
}
