//! Greedy stride partitioning.
//!
//! Candidate origins are the bricks of every `candidate_row_spacing`-th row.
//! Each round simulates every remaining candidate against the working build
//! state, keeps the one whose simulated order covers the most remaining
//! bricks (first candidate in (row, col) order on ties), commits it and drops
//! it from the candidate list. Rounds stop when nothing is left or no
//! candidate adds coverage. The caller's build state is restored afterwards.

use crate::design::{Brick, BrickId, WallDesign};
use crate::sequencer::BuildOrderSequencer;
use crate::state::BuildState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument, warn};

/// One selected stride
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedStride {
    /// Anchor brick
    pub origin: BrickId,
    /// Bricks this stride places that no earlier stride placed
    pub bricks: usize,
}

/// Result of partitioning a wall into strides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StridePlan {
    /// Strides in execution order
    pub strides: Vec<PlannedStride>,
    /// Bricks no candidate could reach
    pub uncovered: Vec<BrickId>,
}

impl StridePlan {
    /// Stride origins in execution order
    #[must_use]
    pub fn origins(&self) -> Vec<BrickId> {
        self.strides.iter().map(|stride| stride.origin).collect()
    }

    /// Number of strides
    #[must_use]
    pub fn len(&self) -> usize {
        self.strides.len()
    }

    /// Whether no stride was selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strides.is_empty()
    }

    /// Whether every brick is covered by some stride
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.uncovered.is_empty()
    }

    /// Bricks placed across all strides
    #[must_use]
    pub fn covered(&self) -> usize {
        self.strides.iter().map(|stride| stride.bricks).sum()
    }
}

/// Greedy max-coverage stride selector
#[derive(Debug, Clone, Copy)]
pub struct StridePartitioner<'a> {
    design: &'a WallDesign,
    spacing: usize,
}

impl<'a> StridePartitioner<'a> {
    /// Partitioner using the design's candidate row spacing
    #[must_use]
    pub fn new(design: &'a WallDesign) -> Self {
        Self {
            design,
            spacing: design.config().candidate_row_spacing.max(1),
        }
    }

    /// Override the candidate row spacing (0 is treated as 1)
    #[must_use]
    pub fn with_spacing(mut self, spacing: usize) -> Self {
        self.spacing = spacing.max(1);
        self
    }

    /// Candidate origins in (row, col) order
    #[must_use]
    pub fn candidates(&self) -> Vec<BrickId> {
        self.design
            .bricks()
            .filter(|brick| brick.row % self.spacing == 0)
            .map(Brick::id)
            .collect()
    }

    /// Select strides until every reachable brick is covered.
    ///
    /// Bricks already built in `state` are not counted as remaining. `state`
    /// is returned unchanged.
    #[instrument(skip_all, fields(bricks = self.design.len(), spacing = self.spacing))]
    pub fn plan(&self, state: &mut BuildState) -> StridePlan {
        let checkpoint = state.checkpoint();
        let sequencer = BuildOrderSequencer::new(self.design);
        let mut candidates = self.candidates();
        let mut remaining: BTreeSet<BrickId> = self
            .design
            .bricks()
            .map(Brick::id)
            .filter(|&id| !state.is_built(id))
            .collect();
        let mut strides = Vec::new();

        while !remaining.is_empty() {
            let mut best: Option<(usize, usize)> = None;
            for (index, &candidate) in candidates.iter().enumerate() {
                let gain = sequencer
                    .simulate(state, candidate)
                    .iter()
                    .filter(|id| remaining.contains(id))
                    .count();
                if gain > best.map_or(0, |(_, most)| most) {
                    best = Some((index, gain));
                }
            }
            let Some((index, gain)) = best else {
                debug!(remaining = remaining.len(), "no candidate adds coverage");
                break;
            };

            let origin = candidates.remove(index);
            for id in sequencer.commit(state, origin) {
                remaining.remove(&id);
            }
            info!(
                stride = strides.len(),
                origin = %origin,
                bricks = gain,
                remaining = remaining.len(),
                "stride selected"
            );
            strides.push(PlannedStride {
                origin,
                bricks: gain,
            });
        }

        state.restore(checkpoint);
        if !remaining.is_empty() {
            warn!(
                uncovered = remaining.len(),
                "some bricks are not reachable from any stride"
            );
        }
        StridePlan {
            strides,
            uncovered: remaining.into_iter().collect(),
        }
    }
}
