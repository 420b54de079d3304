//! English cross bond.
//!
//! Stretcher courses (even rows) open with a full brick, header courses (odd
//! rows) with a half brick followed by a queen closer. Every fourth stretcher
//! course swaps its second brick for a half to shift the joints of the
//! stretcher courses against each other. Each course closes with the mirror of
//! its two opening bricks and packs the interior with the opening type.

use super::{unfillable, BondStrategy, Course};
use crate::config::{BrickType, WallConfig};
use crate::result::WallResult;

/// Opening pair for a row: (first, second)
fn opening(config: &WallConfig, row: usize) -> (&BrickType, &BrickType) {
    let bricks = &config.brick;
    if row % 2 == 1 {
        (&bricks.half, &bricks.queen)
    } else if row % 4 == 0 {
        (&bricks.full, &bricks.half)
    } else {
        (&bricks.full, &bricks.full)
    }
}

/// Lay one English cross course
pub fn row(config: &WallConfig, row: usize) -> WallResult<Course> {
    let head = config.joint.head;
    let wall = config.wall.length;
    let (first, second) = opening(config, row);

    // first, second, [first; k], second, first: k + 4 bricks, k + 3 joints
    let ends = 2 * first.length + 2 * second.length + 3 * head;
    let Some(interior) = wall.checked_sub(ends) else {
        return Err(unfillable(row, BondStrategy::EnglishCross, wall));
    };
    let pitch = first.length + head;
    if interior % pitch != 0 {
        return Err(unfillable(
            row,
            BondStrategy::EnglishCross,
            interior % pitch,
        ));
    }

    let mut course = Course::new();
    course.push(first);
    course.push(second);
    course.extend_with(first, (interior / pitch) as usize);
    course.push(second);
    course.push(first);
    Ok(course)
}
