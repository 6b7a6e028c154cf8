//! Controller interface for arena agents
//!
//! Architecture: trait + state machine
//! - Controller trait defines the engine-facing seam for swappable agents
//! - RoverController implements the seek-then-hold behavior

pub mod rover;

// Re-exports for convenient access
pub use rover::{Phase, RoverController};

use serde::{Deserialize, Serialize};

use crate::arena::{ArenaDescription, Observation};
use crate::core::error::Result;
use crate::core::types::Action;

/// Cosmetic team marker declared by a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Emblem {
    #[default]
    White,
    Blue,
    Red,
    Grey,
}

/// Trait for arena agent controllers
///
/// Object-safe so an arena can hold a heterogeneous roster of boxed
/// controllers. A controller that cannot make progress must still emit
/// some action; only a broken observation contract surfaces as an error.
pub trait Controller {
    /// Decide this tick's single action from the current observation
    fn decide(&mut self, observation: &Observation) -> Result<Action>;

    /// Episode boundary: restore the controller to its initial state
    fn reset(&mut self, arena: &ArenaDescription);

    /// Scoring notification; controllers are free to ignore it
    fn praise(&mut self, _score: i32) {}

    /// Display name
    fn name(&self) -> &str;

    /// Cosmetic team marker
    fn emblem(&self) -> Emblem {
        Emblem::White
    }
}

/// Default lineup for arenas that do not configure their own
pub fn default_roster() -> Vec<Box<dyn Controller>> {
    vec![Box::new(RoverController::new("Rover"))]
}
