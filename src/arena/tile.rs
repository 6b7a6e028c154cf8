//! Arena tile vocabulary as reported by the game engine

use serde::{Deserialize, Serialize};

use crate::core::types::Facing;

/// Terrain type of an arena tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TileKind {
    #[default]
    Land,   // Open ground
    Menhir, // The goal marker, standable
    Sea,    // Impassable
    Wall,   // Impassable
}

impl TileKind {
    /// Can an agent stand on this tile?
    pub fn is_traversable(&self) -> bool {
        matches!(self, TileKind::Land | TileKind::Menhir)
    }
}

/// Agent standing on a tile, as reported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    pub facing: Facing,
}

impl Occupant {
    pub fn new(facing: Facing) -> Self {
        Self { facing }
    }
}

/// One entry of the engine's visible-tile report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    pub occupant: Option<Occupant>,
}

impl Tile {
    pub fn new(kind: TileKind) -> Self {
        Self { kind, occupant: None }
    }

    pub fn with_occupant(kind: TileKind, facing: Facing) -> Self {
        Self {
            kind,
            occupant: Some(Occupant::new(facing)),
        }
    }
}
