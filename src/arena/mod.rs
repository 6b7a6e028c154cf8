//! Engine-facing data model: tiles, observations, episode descriptions
//!
//! The engine owns these values; the controller only reads them during
//! a tick.

pub mod observation;
pub mod tile;

// Re-exports for convenient access
pub use observation::{ArenaDescription, Observation};
pub use tile::{Occupant, Tile, TileKind};
