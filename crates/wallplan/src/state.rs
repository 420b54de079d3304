//! Build state: which bricks have been placed.
//!
//! Kept apart from the immutable [`WallDesign`](crate::WallDesign) and passed
//! explicitly to every call that reads or writes it. Planning checkpoints it
//! and restores it afterwards.

use crate::design::BrickId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of built bricks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildState {
    built: BTreeSet<BrickId>,
}

/// Saved copy of a [`BuildState`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCheckpoint(BTreeSet<BrickId>);

impl BuildState {
    /// Empty state: nothing built
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a brick is built
    #[must_use]
    pub fn is_built(&self, id: BrickId) -> bool {
        self.built.contains(&id)
    }

    /// Mark a brick built; returns false if it already was
    pub fn mark_built(&mut self, id: BrickId) -> bool {
        self.built.insert(id)
    }

    /// Number of built bricks
    #[must_use]
    pub fn built_count(&self) -> usize {
        self.built.len()
    }

    /// Whether nothing is built
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.built.is_empty()
    }

    /// Built bricks in (row, col) order
    pub fn iter(&self) -> impl Iterator<Item = BrickId> + '_ {
        self.built.iter().copied()
    }

    /// Reset every brick to unbuilt
    pub fn clear(&mut self) {
        self.built.clear();
    }

    /// Save the current state
    #[must_use]
    pub fn checkpoint(&self) -> BuildCheckpoint {
        BuildCheckpoint(self.built.clone())
    }

    /// Return to a saved state
    pub fn restore(&mut self, checkpoint: BuildCheckpoint) {
        self.built = checkpoint.0;
    }
}
