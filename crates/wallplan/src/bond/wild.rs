//! Wild bond: randomized full/half runs with staggered joints.
//!
//! Rows are laid bottom-up and each row is checked against the joint
//! positions of the row below it. At each step a random cap (1–6) limits how
//! many full bricks may run before a half brick is preferred, and a brick
//! whose right corner would land on a joint of the row below is avoided.
//!
//! A greedy walk can paint itself into a corner (with a 2:1 full/half pitch an
//! interior half brick below leaves two joints one half-pitch apart that no
//! brick above can straddle). Candidates are therefore ranked by a lookahead
//! over cursor positions: the chosen brick always leads to an exact fill with
//! the fewest joints aligned with the row below. When an alignment is
//! unavoidable it is accepted and counted; the generator never spins.

use super::{unfillable, BondStrategy, Course, Seed};
use crate::config::{BrickKind, WallConfig};
use crate::result::{WallError, WallResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, warn};

/// Longest run of consecutive full bricks the random cap may allow
pub const MAX_FULL_RUN: u32 = 6;

/// Seeded wild-bond generator
#[derive(Debug, Clone)]
pub struct WildBond {
    seed: Seed,
    rng: StdRng,
    aligned_joints: usize,
}

impl WildBond {
    /// Create a generator; equal seeds produce equal walls
    #[must_use]
    pub fn new(seed: Seed) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed.value()),
            aligned_joints: 0,
        }
    }

    /// Seed this generator was created with
    #[must_use]
    pub const fn seed(&self) -> Seed {
        self.seed
    }

    /// Joints laid so far that coincide with a joint in the row below
    #[must_use]
    pub const fn aligned_joints(&self) -> usize {
        self.aligned_joints
    }

    /// Lay rows `0..rows`, each staggered against the one below
    pub fn courses(&mut self, config: &WallConfig, rows: usize) -> WallResult<Vec<Course>> {
        let mut courses = Vec::with_capacity(rows);
        let mut below = BTreeSet::new();
        for row in 0..rows {
            let (course, joints) = self.next_course(config, row, &below)?;
            courses.push(course);
            below = joints;
        }
        if self.aligned_joints > 0 {
            warn!(
                seed = self.seed.value(),
                aligned = self.aligned_joints,
                "wild bond: some joints could not be staggered"
            );
        }
        Ok(courses)
    }

    /// Lay one row given the joint positions of the row below.
    ///
    /// Returns the course and its own joint positions (right corners of every
    /// brick except the last).
    pub fn next_course(
        &mut self,
        config: &WallConfig,
        row: usize,
        below: &BTreeSet<u32>,
    ) -> WallResult<(Course, BTreeSet<u32>)> {
        let wall = config.wall.length;
        let head = config.joint.head;
        let lookahead = Lookahead::new(config, below);
        if lookahead.cost(0).is_none() {
            return Err(unfillable(row, BondStrategy::Wild(self.seed), wall));
        }

        let mut course = Course::new();
        let mut joints = BTreeSet::new();
        let mut x = 0;
        let mut run = 0;
        let mut cap = self.draw_cap();
        let mut preferred = if (row + 1) % 2 == 0 {
            BrickKind::Half
        } else {
            BrickKind::Full
        };

        loop {
            let other = match preferred {
                BrickKind::Full => BrickKind::Half,
                _ => BrickKind::Full,
            };
            let ranked = [preferred, other]
                .into_iter()
                .filter_map(|kind| lookahead.step(x, kind).map(|cost| (kind, cost)));
            // min_by_key keeps the first minimum, so ties go to the preferred brick
            let Some((kind, _)) = ranked.min_by_key(|&(_, cost)| cost) else {
                return Err(WallError::UnresolvableWildStep { row, position: x });
            };

            let brick = config.brick.get(kind);
            course.push(brick);
            let end = x + brick.length;
            if end == wall {
                break;
            }
            if below.contains(&end) {
                self.aligned_joints += 1;
                debug!(row, x = end, "joint aligned with the course below");
            }
            joints.insert(end);
            x = end + head;

            if kind == BrickKind::Full {
                run += 1;
            } else {
                run = 0;
                cap = self.draw_cap();
            }
            preferred = if run >= cap {
                BrickKind::Half
            } else {
                BrickKind::Full
            };
        }

        debug!(row, bricks = course.len(), "wild bond course laid");
        Ok((course, joints))
    }

    fn draw_cap(&mut self) -> u32 {
        self.rng.gen_range(1..=MAX_FULL_RUN)
    }
}

/// Table of "fewest aligned joints to finish the row from cursor x"
///
/// Filled right to left over the cursor positions reachable from 0, so every
/// lookup only needs positions further along the row.
struct Lookahead<'a> {
    config: &'a WallConfig,
    below: &'a BTreeSet<u32>,
    memo: HashMap<u32, Option<usize>>,
}

impl<'a> Lookahead<'a> {
    fn new(config: &'a WallConfig, below: &'a BTreeSet<u32>) -> Self {
        let mut lookahead = Self {
            config,
            below,
            memo: HashMap::new(),
        };
        for x in lookahead.reachable().into_iter().rev() {
            let best = [BrickKind::Full, BrickKind::Half]
                .into_iter()
                .filter_map(|kind| lookahead.step(x, kind))
                .min();
            lookahead.memo.insert(x, best);
        }
        lookahead
    }

    /// Cursor positions some sequence of bricks and joints can reach
    fn reachable(&self) -> BTreeSet<u32> {
        let wall = self.config.wall.length;
        let head = self.config.joint.head;
        let mut seen = BTreeSet::new();
        let mut frontier = vec![0];
        while let Some(x) = frontier.pop() {
            if !seen.insert(x) {
                continue;
            }
            for kind in [BrickKind::Full, BrickKind::Half] {
                let next = x + self.config.brick.get(kind).length + head;
                if next < wall {
                    frontier.push(next);
                }
            }
        }
        seen
    }

    /// Cost of laying `kind` at `x` and finishing the row, if the row can
    /// still be closed exactly
    fn step(&self, x: u32, kind: BrickKind) -> Option<usize> {
        let wall = self.config.wall.length;
        let head = self.config.joint.head;
        let end = x + self.config.brick.get(kind).length;
        if end == wall {
            return Some(0);
        }
        // The next brick needs a joint plus at least some length
        if end + head >= wall {
            return None;
        }
        let aligned = usize::from(self.below.contains(&end));
        self.cost(end + head).map(|rest| rest + aligned)
    }

    fn cost(&self, x: u32) -> Option<usize> {
        self.memo.get(&x).copied().flatten()
    }
}
