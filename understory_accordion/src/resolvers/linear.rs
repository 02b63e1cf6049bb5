// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear scan resolver.

use alloc::vec::Vec;

use crate::resolver::Resolver;

/// Resolves rows by walking parents from the first one, accumulating spans.
#[derive(Clone, Debug, Default)]
pub struct LinearScan {
    spans: Vec<usize>,
}

impl LinearScan {
    /// Creates an empty resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Resolver for LinearScan {
    fn reset(&mut self, parents: usize) {
        self.spans.clear();
        self.spans.resize(parents, 1);
    }

    fn set_span(&mut self, parent: usize, span: usize) {
        debug_assert!(span >= 1, "a parent always occupies its own row");
        if let Some(slot) = self.spans.get_mut(parent) {
            *slot = span;
        }
    }

    fn resolve(&self, index: usize) -> Option<usize> {
        // Bounded by the number of parents, so a stale index cannot loop forever.
        let mut cursor = 0_usize;
        for (parent, span) in self.spans.iter().enumerate() {
            cursor += span;
            if index < cursor {
                return Some(parent);
            }
        }
        None
    }
}
