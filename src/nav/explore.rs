//! Fallback wandering for when no path can be planned
//!
//! Used while the menhir is unknown, or known but unreachable with the
//! knowledge gathered so far.

use rand::Rng;

use crate::core::types::{Action, Coords, Facing};
use crate::knowledge::TraversalGrid;

/// One exploration action
///
/// With probability `turn_chance` the rover turns right on the spot;
/// otherwise it steps ahead when the next cell is known walkable and
/// turns right when it is unknown or blocked. The caller supplies the
/// RNG, so exploration stays reproducible under a fixed seed.
pub fn explore_step<R: Rng>(
    rng: &mut R,
    grid: &TraversalGrid,
    position: Coords,
    facing: Facing,
    turn_chance: f32,
) -> Action {
    if rng.gen::<f32>() < turn_chance {
        return Action::TurnRight;
    }

    let ahead = position + facing.offset();
    if grid.is_traversable(ahead) {
        Action::StepForward
    } else {
        Action::TurnRight
    }
}
