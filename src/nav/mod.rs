//! Navigation: pathfinding, step reduction, exploration fallback
//!
//! The planner only ever returns one action per tick; multi-tick
//! maneuvers (turning around, walking a path) emerge from re-planning
//! against the updated pose each tick.

pub mod explore;
pub mod pathfinding;
pub mod steering;

// Re-exports for convenient access
pub use explore::explore_step;
pub use pathfinding::find_path;
pub use steering::{align_or_step, plan_step};
