//! What the rover has learned about the arena this episode
//!
//! Knowledge only grows between resets: tiles are marked walkable when
//! seen and never un-marked, and the menhir position sticks once sighted.

pub mod grid;
pub mod model;

// Re-exports for convenient access
pub use grid::TraversalGrid;
pub use model::{Pose, WorldModel};
