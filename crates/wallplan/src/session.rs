//! Execution phase: walking a stride plan.
//!
//! A [`BuildSession`] owns a fresh [`BuildState`] and commits the planned
//! strides one at a time, so a caller (a robot driver, the CLI) can step
//! through the wall and report progress between strides.

use crate::design::{BrickId, WallDesign};
use crate::partitioner::StridePlan;
use crate::sequencer::BuildOrderSequencer;
use crate::state::BuildState;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// Bricks built out of the wall total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Bricks built so far
    pub built: usize,
    /// Bricks in the design
    pub total: usize,
}

impl Progress {
    /// Whether every brick is built
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.built >= self.total
    }

    /// Built fraction as a percentage
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.built as f64 * 100.0 / self.total as f64
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Built: {} / {}", self.built, self.total)
    }
}

/// One committed stride
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrideBuild {
    /// Position in the plan
    pub index: usize,
    /// Anchor brick
    pub origin: BrickId,
    /// Placements in build order
    pub order: Vec<BrickId>,
}

/// Steps through a stride plan, committing each stride in turn
#[derive(Debug)]
pub struct BuildSession<'a> {
    design: &'a WallDesign,
    origins: Vec<BrickId>,
    next: usize,
    state: BuildState,
}

impl<'a> BuildSession<'a> {
    /// Start a session over a design with nothing built
    #[must_use]
    pub fn new(design: &'a WallDesign, plan: &StridePlan) -> Self {
        Self {
            design,
            origins: plan.origins(),
            next: 0,
            state: BuildState::new(),
        }
    }

    /// Commit the next planned stride
    pub fn next_stride(&mut self) -> Option<StrideBuild> {
        let origin = *self.origins.get(self.next)?;
        let index = self.next;
        self.next += 1;

        let order = BuildOrderSequencer::new(self.design).commit(&mut self.state, origin);
        info!(
            stride = index,
            origin = %origin,
            placed = order.len(),
            progress = %self.progress(),
            "stride built"
        );
        Some(StrideBuild {
            index,
            origin,
            order,
        })
    }

    /// Strides not yet committed
    #[must_use]
    pub fn remaining_strides(&self) -> usize {
        self.origins.len() - self.next
    }

    /// Bricks built out of the total
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            built: self.state.built_count(),
            total: self.design.len(),
        }
    }

    /// Whether every brick of the wall is built
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress().is_complete()
    }

    /// Current build state
    #[must_use]
    pub const fn state(&self) -> &BuildState {
        &self.state
    }

    /// Finish the session, returning its build state
    #[must_use]
    pub fn into_state(self) -> BuildState {
        self.state
    }
}

impl Iterator for BuildSession<'_> {
    type Item = StrideBuild;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_stride()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.remaining_strides();
        (left, Some(left))
    }
}
