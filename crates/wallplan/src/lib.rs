//! Wallplan: masonry wall layout and robotic build planning
//!
//! Turns a wall configuration and a bond pattern into a grid of bricks, then
//! plans how a robot with a bounded work envelope (a *stride*) builds it:
//! which strides to run, in which order, and which bricks each places so that
//! every brick rests on supported material.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ WallConfig   │   │ WallDesign   │   │ Stride       │   │ BuildSession │
//! │ + Bond       │──►│ (brick grid) │──►│ Partitioner  │──►│ (execution)  │
//! │ Strategy     │   │              │   │ (greedy)     │   │              │
//! └──────────────┘   └──────────────┘   └──────┬───────┘   └──────┬───────┘
//!                                              │                  │
//!                                              ▼                  ▼
//!                                       ┌─────────────────────────────┐
//!                                       │ BuildOrderSequencer         │
//!                                       │ (support rule, BuildState)  │
//!                                       └─────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use wallplan::{generate_wall_design, plan_strides, BondStrategy, BuildSession, WallConfig};
//!
//! let design = generate_wall_design(&WallConfig::default(), BondStrategy::Stretcher)?;
//! let plan = plan_strides(&design);
//! let mut session = BuildSession::new(&design, &plan);
//! while let Some(stride) = session.next_stride() {
//!     assert!(!stride.order.is_empty());
//! }
//! assert!(session.is_complete());
//! # Ok::<(), wallplan::WallError>(())
//! ```

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

/// Bond pattern generators (stretcher, English cross, wild)
pub mod bond;
mod config;
mod design;
mod partitioner;
mod planner;
mod result;
mod sequencer;
mod session;
mod state;

pub use bond::{BondStrategy, Course, Seed, WildBond};
pub use config::{
    BrickKind, BrickTable, BrickType, Joint, StrideEnvelope, WallConfig, WallExtent,
    DEFAULT_CANDIDATE_ROW_SPACING,
};
pub use design::{Brick, BrickId, WallDesign};
pub use partitioner::{PlannedStride, StridePartitioner, StridePlan};
pub use planner::{build_order_for_stride, generate_wall_design, plan_strides};
pub use result::{WallError, WallResult};
pub use sequencer::{BuildOrderSequencer, SequenceMode, StrideBounds};
pub use session::{BuildSession, Progress, StrideBuild};
pub use state::{BuildCheckpoint, BuildState};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::bond::*;
    pub use super::config::*;
    pub use super::design::*;
    pub use super::partitioner::*;
    pub use super::planner::*;
    pub use super::result::*;
    pub use super::sequencer::*;
    pub use super::session::*;
    pub use super::state::*;
}
