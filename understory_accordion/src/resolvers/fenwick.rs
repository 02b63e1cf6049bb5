// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fenwick tree resolver.

use alloc::vec::Vec;

use crate::resolver::Resolver;

/// Resolves rows with a Fenwick (binary indexed) tree over parent spans.
///
/// | Operation  | Time         |
/// |------------|--------------|
/// | `resolve`  | O(log n)     |
/// | `set_span` | O(log n)     |
/// | `reset`    | O(n)         |
///
/// Use this for accordions with many parents, where the linear walk of
/// [`LinearScan`](crate::LinearScan) would dominate row lookups.
#[derive(Clone, Debug, Default)]
pub struct Fenwick {
    spans: Vec<usize>,
    // 1-based: `tree[i]` holds the sum of spans `(i - lowbit(i))..i`.
    tree: Vec<usize>,
}

const fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

impl Fenwick {
    /// Creates an empty resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, parent: usize, delta: usize) {
        let mut i = parent + 1;
        while i < self.tree.len() {
            self.tree[i] += delta;
            i += lowbit(i);
        }
    }

    fn sub(&mut self, parent: usize, delta: usize) {
        let mut i = parent + 1;
        while i < self.tree.len() {
            self.tree[i] -= delta;
            i += lowbit(i);
        }
    }

    /// Sum of the spans of parents `0..parents`.
    #[cfg(test)]
    fn prefix(&self, parents: usize) -> usize {
        let mut i = parents.min(self.spans.len());
        let mut sum = 0;
        while i > 0 {
            sum += self.tree[i];
            i -= lowbit(i);
        }
        sum
    }
}

impl Resolver for Fenwick {
    fn reset(&mut self, parents: usize) {
        self.spans.clear();
        self.spans.resize(parents, 1);

        self.tree.clear();
        self.tree.resize(parents + 1, 0);
        for i in 1..=parents {
            self.tree[i] += 1;
            let up = i + lowbit(i);
            if up <= parents {
                let carried = self.tree[i];
                self.tree[up] += carried;
            }
        }
    }

    fn set_span(&mut self, parent: usize, span: usize) {
        debug_assert!(span >= 1, "a parent always occupies its own row");
        let Some(old) = self.spans.get(parent).copied() else {
            return;
        };
        self.spans[parent] = span;
        if span > old {
            self.add(parent, span - old);
        } else if span < old {
            self.sub(parent, old - span);
        }
    }

    fn resolve(&self, index: usize) -> Option<usize> {
        let n = self.spans.len();
        if n == 0 {
            return None;
        }
        // Descend to the largest `pos` whose prefix sum is `<= index`; that many
        // parents end at or before `index`, so `pos` is the owning parent.
        let mut pos = 0;
        let mut remaining = index;
        let mut step = 1_usize << (usize::BITS - 1 - n.leading_zeros());
        while step > 0 {
            let next = pos + step;
            if next <= n && self.tree[next] <= remaining {
                pos = next;
                remaining -= self.tree[next];
            }
            step >>= 1;
        }
        (pos < n).then_some(pos)
    }
}
