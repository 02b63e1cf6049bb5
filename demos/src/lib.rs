// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable hosts for `understory_accordion`. See the `examples/` directory of this crate.
//!
//! This library holds the placeholder content shared by those hosts.

/// Upper bound on the number of generated parents.
pub const MAX_PARENTS: usize = 1_000;

/// Upper bound on the per-parent child limit.
pub const MAX_CHILDREN: usize = 100;

/// Placeholder accordion content: parents `"Item 1"`, `"Item 2"`, … each owning
/// between one and `max_children + 1` children named `"Subitem 0"`, `"Subitem 1"`, ….
///
/// Requests above [`MAX_PARENTS`] or [`MAX_CHILDREN`] are clamped with a warning.
pub fn placeholder_content(parents: usize, max_children: usize) -> Vec<(String, Vec<String>)> {
    if parents > MAX_PARENTS {
        log::warn!("clamping {parents} parents to {MAX_PARENTS}");
    }
    if max_children > MAX_CHILDREN {
        log::warn!("clamping {max_children} children per parent to {MAX_CHILDREN}");
    }
    let parents = parents.min(MAX_PARENTS);
    let max_children = max_children.min(MAX_CHILDREN);

    (0..parents)
        .map(|p| {
            let children = 1 + (p * 7 + 3) % (max_children + 1);
            let labels = (0..children).map(|c| format!("Subitem {c}")).collect();
            (format!("Item {}", p + 1), labels)
        })
        .collect()
}
