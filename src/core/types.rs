//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Game tick counter (one decision per tick)
pub type Tick = u64;

/// Tile coordinate on the arena grid
///
/// Screen-oriented: x grows rightward, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Coords {
    pub x: i32,
    pub y: i32,
}

impl Coords {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance (orthogonal steps, no diagonals)
    pub fn manhattan_distance(&self, other: &Self) -> u32 {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        (dx + dy) as u32
    }
}

impl std::ops::Add for Coords {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::AddAssign for Coords {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Coords {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

/// Cardinal facing on the arena grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Facing {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Facing {
    /// Unit offset for one step in this facing
    pub fn offset(&self) -> Coords {
        match self {
            Facing::Up => Coords::new(0, -1),
            Facing::Down => Coords::new(0, 1),
            Facing::Left => Coords::new(-1, 0),
            Facing::Right => Coords::new(1, 0),
        }
    }

    /// Facing after a quarter turn clockwise
    pub fn turned_right(&self) -> Self {
        match self {
            Facing::Up => Facing::Right,
            Facing::Right => Facing::Down,
            Facing::Down => Facing::Left,
            Facing::Left => Facing::Up,
        }
    }

    /// Facing after a quarter turn counter-clockwise
    pub fn turned_left(&self) -> Self {
        match self {
            Facing::Up => Facing::Left,
            Facing::Left => Facing::Down,
            Facing::Down => Facing::Right,
            Facing::Right => Facing::Up,
        }
    }

    /// Get opposite facing
    pub fn opposite(&self) -> Self {
        match self {
            Facing::Up => Facing::Down,
            Facing::Down => Facing::Up,
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }

    /// Recover a facing from a unit offset
    ///
    /// Returns None for anything other than the four unit deltas.
    pub fn from_offset(delta: Coords) -> Option<Self> {
        match (delta.x, delta.y) {
            (0, -1) => Some(Facing::Up),
            (0, 1) => Some(Facing::Down),
            (-1, 0) => Some(Facing::Left),
            (1, 0) => Some(Facing::Right),
            _ => None,
        }
    }

    /// All facings in a fixed order
    pub fn all() -> [Facing; 4] {
        [Facing::Up, Facing::Down, Facing::Left, Facing::Right]
    }
}

/// The complete action vocabulary; exactly one is returned per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    TurnLeft,
    TurnRight,
    StepForward,
    Attack,
}
