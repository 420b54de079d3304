//! Wall design: the addressable grid of placed bricks.
//!
//! The assembler drives a bond across every row, lays x left to right
//! (brick width plus a head joint after every brick that does not reach the
//! wall end) and puts row 0 at the bottom:
//!
//! ```text
//! y(row) = wall_height - (row + 1) * course_height
//! ```

use crate::bond::{BondStrategy, Course};
use crate::config::WallConfig;
use crate::result::WallResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, instrument};

/// Identity of a brick: (row, col), row 0 at the bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BrickId {
    /// Course index, 0 = bottom
    pub row: usize,
    /// Position within the course, left to right
    pub col: usize,
}

impl BrickId {
    /// Create a brick id
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for BrickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One placed brick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brick {
    /// Course index
    pub row: usize,
    /// Position within the course
    pub col: usize,
    /// Brick type symbol
    pub symbol: String,
    /// Left edge (mm)
    pub x0: u32,
    /// Right edge (mm)
    pub x1: u32,
    /// Vertical position (mm)
    pub y: u32,
    /// Brick height (mm)
    pub height: u32,
    /// Design-time stride label
    pub stride: u32,
}

impl Brick {
    /// Identity key
    #[must_use]
    pub const fn id(&self) -> BrickId {
        BrickId::new(self.row, self.col)
    }

    /// Horizontal length
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    /// Whether `x` lies on this brick's span, edges included
    #[must_use]
    pub const fn covers(&self, x: u32) -> bool {
        self.x0 <= x && x <= self.x1
    }
}

/// The full brick grid of a wall
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallDesign {
    config: WallConfig,
    bond: BondStrategy,
    rows: Vec<Vec<Brick>>,
}

impl WallDesign {
    /// Assemble a design from a validated configuration and a bond.
    ///
    /// # Errors
    /// Propagates configuration, fill and unknown-symbol errors.
    #[instrument(skip_all, fields(bond = %bond, rows = config.rows()))]
    pub fn generate(config: &WallConfig, bond: BondStrategy) -> WallResult<Self> {
        config.validate()?;
        let courses = bond.courses(config, config.rows())?;
        let rows = courses
            .iter()
            .enumerate()
            .map(|(row, course)| lay_course(config, row, course))
            .collect::<WallResult<Vec<_>>>()?;

        let design = Self {
            config: config.clone(),
            bond,
            rows,
        };
        debug!(bricks = design.len(), "wall design assembled");
        Ok(design)
    }

    /// Configuration the design was built from
    #[must_use]
    pub const fn config(&self) -> &WallConfig {
        &self.config
    }

    /// Bond the design was built with
    #[must_use]
    pub const fn bond(&self) -> BondStrategy {
        self.bond
    }

    /// Number of courses
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Bricks of one course, left to right
    #[must_use]
    pub fn row(&self, row: usize) -> &[Brick] {
        self.rows.get(row).map_or(&[], Vec::as_slice)
    }

    /// Indexed lookup by (row, col)
    #[must_use]
    pub fn get(&self, id: BrickId) -> Option<&Brick> {
        self.rows.get(id.row).and_then(|bricks| bricks.get(id.col))
    }

    /// All bricks, row by row
    pub fn bricks(&self) -> impl Iterator<Item = &Brick> {
        self.rows.iter().flatten()
    }

    /// Total brick count
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Whether the design holds no bricks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Design-time template order: row by row, left to right
    #[must_use]
    pub fn template_order(&self) -> Vec<BrickId> {
        self.bricks().map(Brick::id).collect()
    }

    /// The course (symbol sequence) of a row
    #[must_use]
    pub fn course(&self, row: usize) -> Course {
        let mut course = Course::new();
        for brick in self.row(row) {
            if let Some(brick_type) = self.config.brick_type(&brick.symbol) {
                course.push(brick_type);
            }
        }
        course
    }

    /// Brick count per symbol
    #[must_use]
    pub fn symbol_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for brick in self.bricks() {
            *counts.entry(brick.symbol.clone()).or_insert(0) += 1;
        }
        counts
    }
}

fn lay_course(config: &WallConfig, row: usize, course: &Course) -> WallResult<Vec<Brick>> {
    let course_height = config.course_height();
    // rows() guarantees (row + 1) * course_height <= wall height
    let y = config.wall.height - (row as u32 + 1) * course_height;
    let row_stride = row as u32 * course_height / config.stride.height;

    let mut x = 0;
    let mut bricks = Vec::with_capacity(course.len());
    for (col, symbol) in course.symbols().iter().enumerate() {
        let width = config.width_of(symbol)?;
        let x0 = x;
        let x1 = x0 + width;
        bricks.push(Brick {
            row,
            col,
            symbol: symbol.clone(),
            x0,
            x1,
            y,
            height: config.brick.full.height,
            stride: row_stride.max(x0 / config.stride.length),
        });
        x = x1;
        if x < config.wall.length {
            x += config.joint.head;
        }
    }
    debug!(row, bricks = bricks.len(), course = %course, "course laid");
    Ok(bricks)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::bond::Seed;
    use crate::result::WallError;

    fn stretcher_design() -> WallDesign {
        WallDesign::generate(&WallConfig::default(), BondStrategy::Stretcher).unwrap()
    }

    #[test]
    fn test_row_count_matches_config() {
        let design = stretcher_design();
        assert_eq!(design.row_count(), 32);
        assert_eq!(design.bond(), BondStrategy::Stretcher);
    }

    #[test]
    fn test_coordinates_of_first_row() {
        let design = stretcher_design();
        let row = design.row(0);
        assert_eq!(row[0].x0, 0);
        assert_eq!(row[0].x1, 210);
        assert_eq!(row[1].x0, 220);
        assert_eq!(row.last().unwrap().x1, 2190);
        // row 0 sits at the bottom
        assert_eq!(row[0].y, 2000 - 62);
        assert_eq!(design.row(1)[0].y, 2000 - 124);
    }

    #[test]
    fn test_no_overlap_within_rows() {
        for bond in [
            BondStrategy::Stretcher,
            BondStrategy::EnglishCross,
            BondStrategy::Wild(Seed::from_u64(8)),
        ] {
            let design = WallDesign::generate(&WallConfig::default(), bond).unwrap();
            for row in 0..design.row_count() {
                for pair in design.row(row).windows(2) {
                    assert!(pair[0].x1 < pair[1].x0, "overlap in {bond} row {row}");
                    assert_eq!(pair[1].x0 - pair[0].x1, 10);
                }
                assert_eq!(design.row(row).last().unwrap().x1, 2190);
            }
        }
    }

    #[test]
    fn test_indexed_lookup() {
        let design = stretcher_design();
        let brick = design.get(BrickId::new(3, 2)).unwrap();
        assert_eq!(brick.id(), BrickId::new(3, 2));
        assert!(design.get(BrickId::new(99, 0)).is_none());
        assert!(design.get(BrickId::new(0, 99)).is_none());
        assert!(design.row(99).is_empty());
    }

    #[test]
    fn test_template_order_is_row_major() {
        let design = stretcher_design();
        let order = design.template_order();
        assert_eq!(order.len(), design.len());
        assert_eq!(order[0], BrickId::new(0, 0));
        assert!(order.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_course_roundtrip() {
        let config = WallConfig::default();
        let design = WallDesign::generate(&config, BondStrategy::EnglishCross).unwrap();
        assert_eq!(
            design.course(1),
            BondStrategy::EnglishCross.row(&config, 1).unwrap()
        );
    }

    #[test]
    fn test_symbol_counts() {
        let design = stretcher_design();
        let counts = design.symbol_counts();
        assert_eq!(counts.values().sum::<usize>(), design.len());
        // odd rows open and close with a half brick
        assert_eq!(counts["H"], 32);
        assert_eq!(counts["F"], 16 * 10 + 16 * 9);
    }

    #[test]
    fn test_design_time_stride_labels() {
        let design = stretcher_design();
        let first = design.get(BrickId::new(0, 0)).unwrap();
        assert_eq!(first.stride, 0);
        // x0 = 880 lies in the second 800mm band
        let fifth = design.get(BrickId::new(0, 4)).unwrap();
        assert_eq!(fifth.x0, 880);
        assert_eq!(fifth.stride, 1);
        // row 21 starts at 21 * 62 = 1302mm, past one stride height
        assert_eq!(design.get(BrickId::new(21, 0)).unwrap().stride, 1);
    }

    #[test]
    fn test_brick_covers_edges_inclusive() {
        let design = stretcher_design();
        let brick = design.get(BrickId::new(0, 0)).unwrap();
        assert!(brick.covers(0));
        assert!(brick.covers(210));
        assert!(!brick.covers(211));
        assert_eq!(brick.width(), 210);
    }

    #[test]
    fn test_fill_error_propagates() {
        let config = WallConfig::default().with_wall_length(2300);
        let err = WallDesign::generate(&config, BondStrategy::EnglishCross).unwrap_err();
        assert!(matches!(err, WallError::UnfillableCourse { .. }));
    }

    #[test]
    fn test_invalid_config_rejected_before_layout() {
        let config = WallConfig::default().with_wall_height(10);
        let err = WallDesign::generate(&config, BondStrategy::Stretcher).unwrap_err();
        assert!(matches!(err, WallError::InvalidConfig { .. }));
    }
}
