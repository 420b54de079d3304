//! Wall configuration: brick table, joints, wall extent and stride envelope.
//!
//! All lengths are integer millimeters. The YAML layout accepts the short
//! `l`/`h` keys used by existing wall files as well as the long names:
//!
//! ```yaml
//! brick:
//!   full:  { symbol: "F", l: 210, h: 50 }
//!   half:  { symbol: "H", l: 100, h: 50 }
//!   queen: { symbol: "Q", l: 45,  h: 50 }
//! joint: { head: 10, bed: 12 }
//! wall: { l: 2190, h: 2000 }
//! stride: { l: 800, h: 1300 }
//! ```

use crate::result::{WallError, WallResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default spacing (in courses) between rows that may anchor a stride
pub const DEFAULT_CANDIDATE_ROW_SPACING: usize = 5;

/// One brick type from the brick table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickType {
    /// Unique symbol, e.g. "F"
    pub symbol: String,
    /// Length along the course (mm)
    #[serde(alias = "l")]
    pub length: u32,
    /// Height (mm)
    #[serde(alias = "h")]
    pub height: u32,
}

impl BrickType {
    /// Create a brick type
    #[must_use]
    pub fn new(symbol: impl Into<String>, length: u32, height: u32) -> Self {
        Self {
            symbol: symbol.into(),
            length,
            height,
        }
    }
}

/// The three standard brick kinds a bond can lay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrickKind {
    /// Full stretcher brick
    Full,
    /// Half brick (header face)
    Half,
    /// Queen closer used at bond transitions
    Queen,
}

/// Brick table keyed by kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickTable {
    /// Full brick
    pub full: BrickType,
    /// Half brick
    pub half: BrickType,
    /// Queen closer
    pub queen: BrickType,
}

impl BrickTable {
    /// Look up the brick type for a kind
    #[must_use]
    pub const fn get(&self, kind: BrickKind) -> &BrickType {
        match kind {
            BrickKind::Full => &self.full,
            BrickKind::Half => &self.half,
            BrickKind::Queen => &self.queen,
        }
    }

    /// Iterate the table in kind order
    pub fn iter(&self) -> impl Iterator<Item = (BrickKind, &BrickType)> {
        [
            (BrickKind::Full, &self.full),
            (BrickKind::Half, &self.half),
            (BrickKind::Queen, &self.queen),
        ]
        .into_iter()
    }
}

impl Default for BrickTable {
    fn default() -> Self {
        Self {
            full: BrickType::new("F", 210, 50),
            half: BrickType::new("H", 100, 50),
            queen: BrickType::new("Q", 45, 50),
        }
    }
}

/// Mortar joint thicknesses (mm)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joint {
    /// Gap between bricks in a course
    pub head: u32,
    /// Gap between courses
    pub bed: u32,
}

impl Default for Joint {
    fn default() -> Self {
        Self { head: 10, bed: 12 }
    }
}

/// Overall wall size (mm)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallExtent {
    /// Wall length
    #[serde(alias = "l")]
    pub length: u32,
    /// Wall height
    #[serde(alias = "h")]
    pub height: u32,
}

impl Default for WallExtent {
    fn default() -> Self {
        Self {
            length: 2190,
            height: 2000,
        }
    }
}

/// Reachable work envelope of one build session (mm)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrideEnvelope {
    /// Horizontal reach
    #[serde(alias = "l")]
    pub length: u32,
    /// Vertical reach
    #[serde(alias = "h")]
    pub height: u32,
}

impl Default for StrideEnvelope {
    fn default() -> Self {
        Self {
            length: 800,
            height: 1300,
        }
    }
}

const fn default_candidate_row_spacing() -> usize {
    DEFAULT_CANDIDATE_ROW_SPACING
}

/// Complete, immutable wall description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallConfig {
    /// Brick types
    pub brick: BrickTable,
    /// Joint sizes
    pub joint: Joint,
    /// Wall extent
    pub wall: WallExtent,
    /// Stride envelope
    #[serde(default)]
    pub stride: StrideEnvelope,
    /// Rows whose index is a multiple of this may anchor a stride
    #[serde(default = "default_candidate_row_spacing")]
    pub candidate_row_spacing: usize,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            brick: BrickTable::default(),
            joint: Joint::default(),
            wall: WallExtent::default(),
            stride: StrideEnvelope::default(),
            candidate_row_spacing: DEFAULT_CANDIDATE_ROW_SPACING,
        }
    }
}

impl WallConfig {
    /// Create the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from YAML and validate it.
    ///
    /// # Errors
    /// Returns [`WallError::ConfigParse`] for malformed YAML and
    /// [`WallError::InvalidConfig`] when validation fails.
    pub fn from_yaml(yaml: &str) -> WallResult<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| WallError::ConfigParse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration back to YAML
    pub fn to_yaml(&self) -> WallResult<String> {
        serde_yaml_ng::to_string(self).map_err(|e| WallError::ConfigParse {
            message: e.to_string(),
        })
    }

    /// Check sizes and symbols for consistency
    pub fn validate(&self) -> WallResult<()> {
        let mut symbols = HashSet::new();
        for (kind, brick) in self.brick.iter() {
            if brick.symbol.is_empty() {
                return Err(WallError::invalid_config(format!(
                    "{kind:?} brick has an empty symbol"
                )));
            }
            if brick.length == 0 || brick.height == 0 {
                return Err(WallError::invalid_config(format!(
                    "{kind:?} brick '{}' must have non-zero length and height",
                    brick.symbol
                )));
            }
            if !symbols.insert(brick.symbol.as_str()) {
                return Err(WallError::invalid_config(format!(
                    "duplicate brick symbol '{}'",
                    brick.symbol
                )));
            }
        }

        for (kind, brick) in [
            (BrickKind::Half, &self.brick.half),
            (BrickKind::Queen, &self.brick.queen),
        ] {
            if brick.length > self.brick.full.length {
                return Err(WallError::invalid_config(format!(
                    "{kind:?} brick '{}' ({}mm) is longer than the full brick ({}mm)",
                    brick.symbol, brick.length, self.brick.full.length
                )));
            }
        }

        if self.wall.length < self.brick.full.length {
            return Err(WallError::invalid_config(format!(
                "wall length {}mm is shorter than a full brick ({}mm)",
                self.wall.length, self.brick.full.length
            )));
        }
        if self.rows() == 0 {
            return Err(WallError::invalid_config(format!(
                "wall height {}mm is lower than one course ({}mm)",
                self.wall.height,
                self.course_height()
            )));
        }
        if self.stride.length == 0 {
            return Err(WallError::invalid_config("stride length must be non-zero"));
        }
        if self.rows_per_stride() == 0 {
            return Err(WallError::invalid_config(format!(
                "stride height {}mm is lower than one course ({}mm)",
                self.stride.height,
                self.course_height()
            )));
        }
        if self.candidate_row_spacing == 0 {
            return Err(WallError::invalid_config(
                "candidate_row_spacing must be at least 1",
            ));
        }
        Ok(())
    }

    /// Full-brick height plus bed joint
    #[must_use]
    pub const fn course_height(&self) -> u32 {
        self.brick.full.height + self.joint.bed
    }

    /// Number of whole courses that fit in the wall height
    #[must_use]
    pub const fn rows(&self) -> usize {
        (self.wall.height / self.course_height()) as usize
    }

    /// Number of whole courses inside one stride envelope
    #[must_use]
    pub const fn rows_per_stride(&self) -> usize {
        (self.stride.height / self.course_height()) as usize
    }

    /// Find the brick type carrying a symbol
    #[must_use]
    pub fn brick_type(&self, symbol: &str) -> Option<&BrickType> {
        self.brick
            .iter()
            .map(|(_, brick)| brick)
            .find(|brick| brick.symbol == symbol)
    }

    /// Width of the brick carrying a symbol
    pub fn width_of(&self, symbol: &str) -> WallResult<u32> {
        self.brick_type(symbol)
            .map(|brick| brick.length)
            .ok_or_else(|| WallError::unknown_symbol(symbol))
    }

    /// Set the wall length
    #[must_use]
    pub const fn with_wall_length(mut self, length: u32) -> Self {
        self.wall.length = length;
        self
    }

    /// Set the wall height
    #[must_use]
    pub const fn with_wall_height(mut self, height: u32) -> Self {
        self.wall.height = height;
        self
    }

    /// Set the joint sizes
    #[must_use]
    pub const fn with_joint(mut self, head: u32, bed: u32) -> Self {
        self.joint = Joint { head, bed };
        self
    }

    /// Set the stride envelope
    #[must_use]
    pub const fn with_stride(mut self, length: u32, height: u32) -> Self {
        self.stride = StrideEnvelope { length, height };
        self
    }

    /// Set the candidate row spacing
    #[must_use]
    pub const fn with_candidate_row_spacing(mut self, spacing: usize) -> Self {
        self.candidate_row_spacing = spacing;
        self
    }

    /// Replace the brick table
    #[must_use]
    pub fn with_bricks(mut self, brick: BrickTable) -> Self {
        self.brick = brick;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const WALL_YAML: &str = r#"
brick:
  full:  { symbol: "F", l: 210, h: 50 }
  half:  { symbol: "H", l: 100, h: 50 }
  queen: { symbol: "Q", l: 45, h: 50 }
joint: { head: 10, bed: 12 }
wall: { l: 2300, h: 2000 }
"#;

    mod derived_tests {
        use super::*;

        #[test]
        fn test_default_derived_values() {
            let config = WallConfig::default();
            assert_eq!(config.course_height(), 62);
            assert_eq!(config.rows(), 32);
            assert_eq!(config.rows_per_stride(), 20);
            assert_eq!(config.candidate_row_spacing, 5);
        }

        #[test]
        fn test_width_of_known_symbols() {
            let config = WallConfig::default();
            assert_eq!(config.width_of("F").unwrap(), 210);
            assert_eq!(config.width_of("H").unwrap(), 100);
            assert_eq!(config.width_of("Q").unwrap(), 45);
        }

        #[test]
        fn test_width_of_unknown_symbol() {
            let err = WallConfig::default().width_of("X").unwrap_err();
            assert_eq!(err, WallError::unknown_symbol("X"));
        }

        #[test]
        fn test_brick_table_get() {
            let table = BrickTable::default();
            assert_eq!(table.get(BrickKind::Queen).symbol, "Q");
            assert_eq!(table.iter().count(), 3);
        }

        #[test]
        fn test_builders() {
            let config = WallConfig::new()
                .with_wall_length(1000)
                .with_wall_height(124)
                .with_joint(5, 10)
                .with_stride(500, 200)
                .with_candidate_row_spacing(1);
            assert_eq!(config.wall.length, 1000);
            assert_eq!(config.course_height(), 60);
            assert_eq!(config.rows(), 2);
            assert_eq!(config.rows_per_stride(), 3);
            assert_eq!(config.joint.head, 5);
            assert_eq!(config.candidate_row_spacing, 1);
        }
    }

    mod yaml_tests {
        use super::*;

        #[test]
        fn test_from_yaml_short_keys() {
            let config = WallConfig::from_yaml(WALL_YAML).unwrap();
            assert_eq!(config.wall.length, 2300);
            assert_eq!(config.brick.full.length, 210);
            assert_eq!(config.joint.bed, 12);
            // Omitted sections fall back to defaults
            assert_eq!(config.stride, StrideEnvelope::default());
            assert_eq!(config.candidate_row_spacing, 5);
        }

        #[test]
        fn test_from_yaml_long_keys() {
            let yaml = r#"
brick:
  full:  { symbol: "A", length: 200, height: 40 }
  half:  { symbol: "B", length: 95, height: 40 }
  queen: { symbol: "C", length: 40, height: 40 }
joint: { head: 10, bed: 10 }
wall: { length: 2000, height: 1000 }
stride: { length: 600, height: 500 }
candidate_row_spacing: 2
"#;
            let config = WallConfig::from_yaml(yaml).unwrap();
            assert_eq!(config.brick.half.symbol, "B");
            assert_eq!(config.stride.length, 600);
            assert_eq!(config.rows_per_stride(), 10);
            assert_eq!(config.candidate_row_spacing, 2);
        }

        #[test]
        fn test_from_yaml_malformed() {
            let err = WallConfig::from_yaml("brick: [").unwrap_err();
            assert!(matches!(err, WallError::ConfigParse { .. }));
        }

        #[test]
        fn test_yaml_roundtrip_preserves_config() {
            let config = WallConfig::default();
            let yaml = config.to_yaml().unwrap();
            assert_eq!(WallConfig::from_yaml(&yaml).unwrap(), config);
        }
    }

    mod validation_tests {
        use super::*;

        fn invalid(config: &WallConfig) -> String {
            match config.validate() {
                Err(WallError::InvalidConfig { message }) => message,
                other => panic!("expected InvalidConfig, got {other:?}"),
            }
        }

        #[test]
        fn test_default_is_valid() {
            assert!(WallConfig::default().validate().is_ok());
        }

        #[test]
        fn test_duplicate_symbols_rejected() {
            let mut bricks = BrickTable::default();
            bricks.queen.symbol = "H".to_string();
            let msg = invalid(&WallConfig::default().with_bricks(bricks));
            assert!(msg.contains("duplicate"));
        }

        #[test]
        fn test_zero_length_brick_rejected() {
            let mut bricks = BrickTable::default();
            bricks.half.length = 0;
            let msg = invalid(&WallConfig::default().with_bricks(bricks));
            assert!(msg.contains("non-zero"));
        }

        #[test]
        fn test_wall_lower_than_course_rejected() {
            let msg = invalid(&WallConfig::default().with_wall_height(61));
            assert!(msg.contains("lower than one course"));
        }

        #[test]
        fn test_stride_lower_than_course_rejected() {
            let msg = invalid(&WallConfig::default().with_stride(800, 30));
            assert!(msg.contains("stride height"));
        }

        #[test]
        fn test_zero_spacing_rejected() {
            let msg = invalid(&WallConfig::default().with_candidate_row_spacing(0));
            assert!(msg.contains("candidate_row_spacing"));
        }

        #[test]
        fn test_half_longer_than_full_rejected() {
            let mut bricks = BrickTable::default();
            bricks.full.length = 100;
            bricks.half.length = 210;
            let config = WallConfig::default().with_bricks(bricks).with_wall_length(100);
            let msg = invalid(&config);
            assert!(msg.contains("Half brick 'H'"));
            assert!(msg.contains("longer than the full brick"));
        }

        #[test]
        fn test_queen_longer_than_full_rejected() {
            let mut bricks = BrickTable::default();
            bricks.queen.length = 250;
            let msg = invalid(&WallConfig::default().with_bricks(bricks));
            assert!(msg.contains("Queen brick 'Q'"));
        }

        #[test]
        fn test_equal_half_and_full_accepted() {
            let mut bricks = BrickTable::default();
            bricks.half.length = 210;
            assert!(WallConfig::default().with_bricks(bricks).validate().is_ok());
        }

        #[test]
        fn test_short_wall_rejected() {
            let msg = invalid(&WallConfig::default().with_wall_length(100));
            assert!(msg.contains("shorter than a full brick"));
        }
    }
}
