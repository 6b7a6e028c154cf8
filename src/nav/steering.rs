//! Reduce a planned path to this tick's single movement action
//!
//! Movement is facing-relative: the rover turns until it is aligned with
//! the next waypoint and only steps once alignment already holds.

use crate::core::types::{Action, Coords, Facing};
use crate::knowledge::TraversalGrid;
use crate::nav::pathfinding::find_path;

/// Reduce a required facing to exactly one action
///
/// Aligned means step; a quarter turn picks the matching side; a half
/// turn always starts clockwise, so a full reversal resolves as two
/// TurnRight actions over two ticks.
pub fn align_or_step(current: Facing, required: Facing) -> Action {
    if required == current {
        Action::StepForward
    } else if required == current.turned_right() {
        Action::TurnRight
    } else if required == current.turned_left() {
        Action::TurnLeft
    } else {
        Action::TurnRight
    }
}

/// Plan one action that makes progress toward `destination`
///
/// Runs A* over the knowledge grid and reduces the first step of the
/// path. Returns None when no usable path exists (unreachable
/// destination, or nothing beyond the start cell); the caller falls
/// back to exploration in that case.
pub fn plan_step(
    grid: &TraversalGrid,
    position: Coords,
    facing: Facing,
    destination: Coords,
) -> Option<Action> {
    let path = find_path(grid, position, destination)?;

    // path[0] is the current position; the step target comes after it
    let &next = path.get(1)?;
    let required = Facing::from_offset(next - position)?;

    Some(align_or_step(facing, required))
}
