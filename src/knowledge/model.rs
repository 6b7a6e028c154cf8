//! Persistent world model built from per-tick observations

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::arena::{Observation, TileKind};
use crate::core::error::Result;
use crate::core::types::{Coords, Facing};
use crate::knowledge::grid::TraversalGrid;

/// Position and facing reported by the engine for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Coords,
    pub facing: Facing,
}

/// Cross-tick memory: traversability grid, menhir position, last pose
#[derive(Debug, Clone)]
pub struct WorldModel {
    grid: TraversalGrid,
    menhir: Option<Coords>,
    position: Option<Coords>,
    facing: Option<Facing>,
}

impl WorldModel {
    pub fn new(arena_extent: u32) -> Self {
        Self {
            grid: TraversalGrid::new(arena_extent),
            menhir: None,
            position: None,
            facing: None,
        }
    }

    /// Fold one observation into the model
    ///
    /// Marks every visible walkable tile, remembers the menhir (the
    /// freshest sighting wins), and caches the reported pose. Fails only
    /// when the report omits the agent's own occupant descriptor, in
    /// which case the model is left untouched.
    pub fn absorb(&mut self, observation: &Observation) -> Result<Pose> {
        let facing = observation.own_facing().map_err(|err| {
            warn!(
                x = observation.position.x,
                y = observation.position.y,
                "observation omitted the agent's own occupant descriptor"
            );
            err
        })?;
        let position = observation.position;

        // The agent stands here, so this tile is walkable whatever the
        // report says about it.
        self.grid.mark(position);

        for (&coords, tile) in &observation.visible_tiles {
            if tile.kind.is_traversable() {
                self.grid.mark(coords);
            }
            if tile.kind == TileKind::Menhir && self.menhir != Some(coords) {
                debug!(x = coords.x, y = coords.y, "menhir sighted");
                self.menhir = Some(coords);
            }
        }

        self.position = Some(position);
        self.facing = Some(facing);
        Ok(Pose { position, facing })
    }

    /// The traversability grid accumulated so far
    pub fn grid(&self) -> &TraversalGrid {
        &self.grid
    }

    /// Remembered menhir position, if one has been sighted this episode
    pub fn menhir(&self) -> Option<Coords> {
        self.menhir
    }

    /// Position from the most recent observation
    pub fn position(&self) -> Option<Coords> {
        self.position
    }

    /// Facing from the most recent observation
    pub fn facing(&self) -> Option<Facing> {
        self.facing
    }

    /// Forget everything (episode boundary)
    pub fn reset(&mut self) {
        self.grid.clear();
        self.menhir = None;
        self.position = None;
        self.facing = None;
    }
}
