//! Build-order sequencing inside one stride.
//!
//! A stride anchored at brick (r, c) spans rows `r..r + rows_per_stride`
//! (clamped to the wall) and the horizontal band `[x0, x0 + stride length]`
//! where x0 is the origin brick's left edge. Rows are visited bottom-up and
//! bricks left to right. A brick above row 0 is placed only when built bricks
//! in the row below cover both its left and its right edge.

use crate::design::{Brick, BrickId, WallDesign};
use crate::state::BuildState;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::Range;
use tracing::{debug, instrument};

/// Whether sequencing records placements in the build state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceMode {
    /// Predict the order without touching the state
    #[default]
    Simulate,
    /// Mark every sequenced brick built
    Commit,
}

/// Reach of a stride anchored at an origin brick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrideBounds {
    /// Anchor brick
    pub origin: BrickId,
    /// Rows inside the stride
    pub rows: Range<usize>,
    /// Left limit (mm)
    pub x_start: u32,
    /// Right limit (mm)
    pub x_end: u32,
}

impl StrideBounds {
    /// Bounds of the stride anchored at `origin`.
    ///
    /// An origin that is not in the design anchors at x = 0.
    #[must_use]
    pub fn new(design: &WallDesign, origin: BrickId) -> Self {
        let config = design.config();
        let end_row = design
            .row_count()
            .min(origin.row + config.rows_per_stride());
        let x_start = design.get(origin).map_or(0, |brick| brick.x0);
        Self {
            origin,
            rows: origin.row..end_row.max(origin.row),
            x_start,
            x_end: x_start + config.stride.length,
        }
    }

    /// Whether a brick lies fully inside the stride
    #[must_use]
    pub fn contains(&self, brick: &Brick) -> bool {
        self.rows.contains(&brick.row) && brick.x0 >= self.x_start && brick.x1 <= self.x_end
    }
}

/// Orders brick placement within strides of one design
#[derive(Debug, Clone, Copy)]
pub struct BuildOrderSequencer<'a> {
    design: &'a WallDesign,
}

impl<'a> BuildOrderSequencer<'a> {
    /// Create a sequencer for a design
    #[must_use]
    pub const fn new(design: &'a WallDesign) -> Self {
        Self { design }
    }

    /// Order that [`commit`](Self::commit) would produce, leaving `state`
    /// untouched. Repeated calls on the same state give the same order.
    #[must_use]
    pub fn simulate(&self, state: &BuildState, origin: BrickId) -> Vec<BrickId> {
        let bounds = StrideBounds::new(self.design, origin);
        let mut placed = HashSet::new();
        let mut order = Vec::new();

        for row in bounds.rows.clone() {
            for brick in self.design.row(row) {
                let id = brick.id();
                if !bounds.contains(brick) || state.is_built(id) {
                    continue;
                }
                if row == 0 || self.is_supported(brick, state, &placed) {
                    placed.insert(id);
                    order.push(id);
                }
            }
        }
        order
    }

    /// Sequence the stride and mark every sequenced brick built
    #[instrument(skip(self, state), fields(origin = %origin))]
    pub fn commit(&self, state: &mut BuildState, origin: BrickId) -> Vec<BrickId> {
        let order = self.simulate(state, origin);
        for &id in &order {
            state.mark_built(id);
        }
        debug!(placed = order.len(), built = state.built_count(), "stride committed");
        order
    }

    /// Dispatch on [`SequenceMode`]
    pub fn sequence(
        &self,
        state: &mut BuildState,
        origin: BrickId,
        mode: SequenceMode,
    ) -> Vec<BrickId> {
        match mode {
            SequenceMode::Simulate => self.simulate(state, origin),
            SequenceMode::Commit => self.commit(state, origin),
        }
    }

    /// Both bottom corners rest on built bricks of the row below
    fn is_supported(
        &self,
        brick: &Brick,
        state: &BuildState,
        placed: &HashSet<BrickId>,
    ) -> bool {
        let built_below = self
            .design
            .row(brick.row - 1)
            .iter()
            .filter(|below| state.is_built(below.id()) || placed.contains(&below.id()));
        let (mut left, mut right) = (false, false);
        for below in built_below {
            left |= below.covers(brick.x0);
            right |= below.covers(brick.x1);
            if left && right {
                return true;
            }
        }
        false
    }
}
