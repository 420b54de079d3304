//! Free-function entry points over the planning types.

use crate::bond::BondStrategy;
use crate::config::WallConfig;
use crate::design::{BrickId, WallDesign};
use crate::partitioner::{StridePartitioner, StridePlan};
use crate::result::WallResult;
use crate::sequencer::{BuildOrderSequencer, SequenceMode};
use crate::state::BuildState;

/// Lay out every course of the wall with the given bond.
///
/// # Errors
/// Fails on an invalid configuration or a course that cannot be filled.
pub fn generate_wall_design(config: &WallConfig, bond: BondStrategy) -> WallResult<WallDesign> {
    WallDesign::generate(config, bond)
}

/// Partition a freshly designed wall into strides.
///
/// Planning runs against a scratch state, so nothing is left built.
#[must_use]
pub fn plan_strides(design: &WallDesign) -> StridePlan {
    StridePartitioner::new(design).plan(&mut BuildState::new())
}

/// Build order of one stride; commit mode marks the bricks built in `state`.
pub fn build_order_for_stride(
    design: &WallDesign,
    state: &mut BuildState,
    origin: BrickId,
    mode: SequenceMode,
) -> Vec<BrickId> {
    BuildOrderSequencer::new(design).sequence(state, origin, mode)
}
