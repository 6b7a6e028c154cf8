//! Per-tick observation handed to the controller by the engine

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::arena::tile::{Occupant, Tile};
use crate::core::error::{Result, RoverError};
use crate::core::types::{Coords, Facing};

/// Fog-of-war-limited world report for one tick
///
/// The engine owns this data; the controller reads it during the tick's
/// decision and must not keep it across ticks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    /// Agent's own position
    pub position: Coords,
    /// Every tile currently visible, own tile included
    pub visible_tiles: HashMap<Coords, Tile>,
}

impl Observation {
    pub fn new(position: Coords, visible_tiles: HashMap<Coords, Tile>) -> Self {
        Self { position, visible_tiles }
    }

    /// Look up a visible tile
    pub fn tile(&self, coords: Coords) -> Option<&Tile> {
        self.visible_tiles.get(&coords)
    }

    /// Occupant of a visible tile, if any
    pub fn occupant_at(&self, coords: Coords) -> Option<&Occupant> {
        self.tile(coords).and_then(|tile| tile.occupant.as_ref())
    }

    /// Facing the engine reports for the agent itself
    ///
    /// The engine always includes the agent in its own report; a missing
    /// descriptor breaks that contract and is the one fatal error.
    pub fn own_facing(&self) -> Result<Facing> {
        self.occupant_at(self.position)
            .map(|occupant| occupant.facing)
            .ok_or(RoverError::MissingOwnOccupant(self.position))
    }
}

/// Episode header passed to the reset hook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaDescription {
    pub name: String,
}

impl ArenaDescription {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
