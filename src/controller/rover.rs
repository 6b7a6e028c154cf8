//! The rover controller: seek the menhir, then hold it
//!
//! Decision cascade per tick, in priority order:
//! 1. Fold the observation into the world model
//! 2. Attack anyone standing directly ahead
//! 3. Holding: keep rotating so the attack check sweeps all approaches
//! 4. Seeking without a known menhir: explore
//! 5. Seeking on top of the menhir: switch to holding this same tick
//! 6. Seeking otherwise: plan a step toward the menhir, explore if stuck

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::arena::{ArenaDescription, Observation};
use crate::controller::{Controller, Emblem};
use crate::core::config::ControllerConfig;
use crate::core::error::Result;
use crate::core::types::Action;
use crate::knowledge::{Pose, WorldModel};
use crate::nav::{explore_step, plan_step};

/// Where the rover is in its episode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Looking for the menhir (initial)
    Seeking,
    /// Standing on the menhir until the episode ends
    Holding,
}

/// Menhir-seeking arena controller
pub struct RoverController {
    name: String,
    config: ControllerConfig,
    world: WorldModel,
    seed: u64,
    rng: ChaCha8Rng,
    phase: Phase,
}

impl RoverController {
    /// Create a rover with the default config and seed
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, ControllerConfig::default(), 42) // Deterministic for testing
    }

    /// Create with a specific RNG seed for deterministic behavior
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self::with_config(name, ControllerConfig::default(), seed)
    }

    /// Create with explicit config and seed
    pub fn with_config(name: impl Into<String>, config: ControllerConfig, seed: u64) -> Self {
        Self {
            name: name.into(),
            world: WorldModel::new(config.arena_extent),
            config,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            phase: Phase::Seeking,
        }
    }

    /// Current phase (for tests and diagnostics)
    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn explore(&mut self, pose: Pose) -> Action {
        explore_step(
            &mut self.rng,
            self.world.grid(),
            pose.position,
            pose.facing,
            self.config.explore_turn_chance,
        )
    }
}

impl Controller for RoverController {
    fn decide(&mut self, observation: &Observation) -> Result<Action> {
        let pose = self.world.absorb(observation)?;

        // Combat outranks everything in both phases: swing at anyone
        // standing on the tile we are facing right now.
        let ahead = pose.position + pose.facing.offset();
        if observation.occupant_at(ahead).is_some() {
            return Ok(Action::Attack);
        }

        if self.phase == Phase::Seeking {
            let Some(menhir) = self.world.menhir() else {
                return Ok(self.explore(pose));
            };

            if pose.position == menhir {
                debug!(name = %self.name, "menhir reached, holding");
                self.phase = Phase::Holding;
                // Fall through to the holding scan this same tick
            } else {
                let step = plan_step(self.world.grid(), pose.position, pose.facing, menhir);
                let Some(action) = step else {
                    debug!(name = %self.name, "menhir unreachable, exploring");
                    return Ok(self.explore(pose));
                };
                return Ok(action);
            }
        }

        // Holding: rotate in place, scanning every approach for targets
        Ok(Action::TurnRight)
    }

    fn reset(&mut self, arena: &ArenaDescription) {
        debug!(name = %self.name, arena = %arena.name, "episode reset");
        self.world.reset();
        // Restart the RNG stream so every episode replays identically
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.phase = Phase::Seeking;
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn emblem(&self) -> Emblem {
        Emblem::White
    }
}
