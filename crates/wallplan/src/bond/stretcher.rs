//! Stretcher (running) bond.

use super::{unfillable, BondStrategy, Course};
use crate::config::WallConfig;
use crate::result::WallResult;

/// Lay one stretcher course.
///
/// Even rows open with a full brick, odd rows with a half brick, giving the
/// half-brick running offset. The rest is full bricks, closed by whichever of
/// full or half matches the leftover span exactly.
pub fn row(config: &WallConfig, row: usize) -> WallResult<Course> {
    let bricks = &config.brick;
    let head = config.joint.head;
    let wall = config.wall.length;

    let first = if row % 2 == 0 { &bricks.full } else { &bricks.half };
    let mut course = Course::new();
    course.push(first);

    if wall == first.length {
        return Ok(course);
    }
    let Some(remaining) = wall.checked_sub(first.length + head) else {
        return Err(unfillable(
            row,
            BondStrategy::Stretcher,
            wall.saturating_sub(first.length),
        ));
    };

    let pitch = bricks.full.length + head;
    course.extend_with(&bricks.full, (remaining / pitch) as usize);

    // Gap between the last full brick's joint and the wall end
    let extra = remaining % pitch;
    if extra == bricks.full.length {
        course.push(&bricks.full);
    } else if extra == bricks.half.length {
        course.push(&bricks.half);
    } else {
        // With no closer the trailing head joint is also unfilled
        return Err(unfillable(row, BondStrategy::Stretcher, extra + head));
    }

    Ok(course)
}
