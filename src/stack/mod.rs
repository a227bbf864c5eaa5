// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Monotonic stack algorithms.
//!
//! A monotonic stack keeps its values ordered from bottom to top. Each new
//! element pops everything it "beats" before being pushed, and each pop is
//! where an answer gets decided. Since every element is pushed once and popped
//! at most once, a full run costs at most 2n stack operations no matter how
//! the pops bunch up. `CountingStack` records those operations so the bound
//! can be checked rather than assumed.

mod digits;
mod next_greater;

pub use digits::{
    max_after_removal, max_after_removal_with_stats, min_after_removal,
    min_after_removal_with_stats,
};
pub use next_greater::{
    next_greater, next_greater_circular, next_greater_circular_with_stats,
    next_greater_with_stats,
};

use serde::Serialize;

/// Direction a monotonic stack is kept in, read from bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackOrder {
    NonIncreasing,
    NonDecreasing,
}

/// Push and pop counts from one algorithm run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StackStats {
    pub pushes: usize,
    pub pops: usize,
}

impl StackStats {
    pub fn total(&self) -> usize {
        self.pushes + self.pops
    }

    /// Whether the run stayed within the amortized bound of `2 * n` operations.
    pub fn within_bound(&self, n: usize) -> bool {
        self.total() <= 2 * n
    }
}

/// A `Vec`-backed stack that counts its pushes and pops.
#[derive(Debug, Clone)]
pub(crate) struct CountingStack<T> {
    items: Vec<T>,
    stats: StackStats,
}

impl<T: Copy> CountingStack<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            stats: StackStats::default(),
        }
    }

    pub(crate) fn push(&mut self, item: T) {
        self.stats.pushes += 1;
        self.items.push(item);
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        let item = self.items.pop();
        if item.is_some() {
            self.stats.pops += 1;
        }
        item
    }

    pub(crate) fn peek(&self) -> Option<T> {
        self.items.last().copied()
    }

    pub(crate) fn stats(&self) -> StackStats {
        self.stats
    }

    /// Remaining items, bottom first.
    pub(crate) fn into_items(self) -> Vec<T> {
        self.items
    }
}
