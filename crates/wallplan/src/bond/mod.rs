//! Bond pattern generators.
//!
//! A bond turns `(config, row index)` into a [`Course`]: the ordered brick
//! symbols of one row. Every course produced here satisfies
//!
//! ```text
//! sum(width(symbol)) + head * (len - 1) == wall length
//! ```
//!
//! and a row that cannot be closed exactly is an error, never a short row.

pub mod english_cross;
pub mod stretcher;
pub mod wild;

use crate::config::{BrickType, WallConfig};
use crate::result::{WallError, WallResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use wild::WildBond;

/// Deterministic seed for the randomized bond
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(u64);

impl Seed {
    /// Create a seed from a u64 value
    #[must_use]
    pub const fn from_u64(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw seed value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Ordered brick symbols of one row, left to right
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Course(Vec<String>);

impl Course {
    /// Create an empty course
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append one brick
    pub fn push(&mut self, brick: &BrickType) {
        self.0.push(brick.symbol.clone());
    }

    /// Append `count` copies of a brick
    pub fn extend_with(&mut self, brick: &BrickType, count: usize) {
        self.0
            .extend(std::iter::repeat(brick.symbol.clone()).take(count));
    }

    /// Symbols in order
    #[must_use]
    pub fn symbols(&self) -> &[String] {
        &self.0
    }

    /// Number of bricks
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the course has no bricks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total laid span: brick widths plus interior head joints
    pub fn span(&self, config: &WallConfig) -> WallResult<u32> {
        let widths = self
            .0
            .iter()
            .map(|symbol| config.width_of(symbol))
            .sum::<WallResult<u32>>()?;
        let joints = config.joint.head * self.0.len().saturating_sub(1) as u32;
        Ok(widths + joints)
    }
}

impl From<Vec<&str>> for Course {
    fn from(symbols: Vec<&str>) -> Self {
        Self(symbols.into_iter().map(str::to_string).collect())
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

/// Bond pattern selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BondStrategy {
    /// Running bond with a half-brick offset on alternate rows
    #[default]
    Stretcher,
    /// Alternating stretcher and header courses with queen closers
    EnglishCross,
    /// Randomized runs that avoid aligning joints with the course below
    Wild(Seed),
}

impl BondStrategy {
    /// All selector names accepted by [`FromStr`]
    pub const NAMES: [&'static str; 3] = ["stretcher", "english_cross", "wild"];

    /// Selector name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Stretcher => "stretcher",
            Self::EnglishCross => "english_cross",
            Self::Wild(_) => "wild",
        }
    }

    /// Reseed the wild bond; other bonds are unaffected
    #[must_use]
    pub const fn with_seed(self, seed: Seed) -> Self {
        match self {
            Self::Wild(_) => Self::Wild(seed),
            other => other,
        }
    }

    /// Generate a single row.
    ///
    /// The wild bond depends on the rows below, so it replays rows
    /// `0..=row` from its seed.
    pub fn row(&self, config: &WallConfig, row: usize) -> WallResult<Course> {
        match self {
            Self::Stretcher => stretcher::row(config, row),
            Self::EnglishCross => english_cross::row(config, row),
            Self::Wild(seed) => {
                let mut courses = WildBond::new(*seed).courses(config, row + 1)?;
                courses
                    .pop()
                    .ok_or_else(|| WallError::invalid_config("wild bond produced no rows"))
            }
        }
    }

    /// Generate rows `0..rows`
    pub fn courses(&self, config: &WallConfig, rows: usize) -> WallResult<Vec<Course>> {
        match self {
            Self::Wild(seed) => WildBond::new(*seed).courses(config, rows),
            _ => (0..rows).map(|row| self.row(config, row)).collect(),
        }
    }
}

impl fmt::Display for BondStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BondStrategy {
    type Err = WallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stretcher" => Ok(Self::Stretcher),
            "english_cross" => Ok(Self::EnglishCross),
            "wild" => Ok(Self::Wild(Seed::default())),
            other => Err(WallError::unsupported_bond(other)),
        }
    }
}

pub(crate) fn unfillable(row: usize, bond: BondStrategy, remaining: u32) -> WallError {
    WallError::UnfillableCourse {
        row,
        bond: bond.name().to_string(),
        remaining,
    }
}
