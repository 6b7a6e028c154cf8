//! Dense traversability grid accumulated from observations
//!
//! Marks are monotonic within an episode: a cell only ever goes from
//! unknown to traversable, and only `clear` resets it.

use serde::{Deserialize, Serialize};

use crate::core::types::Coords;

/// Owned dense map of which tiles are known walkable
///
/// Sized to the maximum arena extent so every reported coordinate has a
/// cell. Unknown and out-of-bounds coordinates read as not traversable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraversalGrid {
    extent: u32,
    cells: Vec<bool>,
}

impl TraversalGrid {
    /// Create a grid with every cell unknown
    pub fn new(extent: u32) -> Self {
        Self {
            extent,
            cells: vec![false; (extent as usize) * (extent as usize)],
        }
    }

    /// Side length in tiles
    pub fn extent(&self) -> u32 {
        self.extent
    }

    /// Check if coordinate is within grid bounds
    pub fn in_bounds(&self, coords: Coords) -> bool {
        coords.x >= 0
            && coords.y >= 0
            && coords.x < self.extent as i32
            && coords.y < self.extent as i32
    }

    fn index(&self, coords: Coords) -> Option<usize> {
        if !self.in_bounds(coords) {
            return None;
        }
        Some(coords.y as usize * self.extent as usize + coords.x as usize)
    }

    /// Record a cell as known traversable
    ///
    /// Out-of-bounds marks are dropped.
    pub fn mark(&mut self, coords: Coords) {
        if let Some(idx) = self.index(coords) {
            self.cells[idx] = true;
        }
    }

    /// Is this cell known traversable?
    ///
    /// Querying a never-observed coordinate is normal and reads false.
    pub fn is_traversable(&self, coords: Coords) -> bool {
        self.index(coords).map(|idx| self.cells[idx]).unwrap_or(false)
    }

    /// Forget everything (episode boundary)
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of cells currently known traversable
    pub fn known_count(&self) -> usize {
        self.cells.iter().filter(|&&known| known).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_all_unknown() {
        let grid = TraversalGrid::new(8);
        assert_eq!(grid.known_count(), 0);
        assert!(!grid.is_traversable(Coords::new(0, 0)));
        assert!(!grid.is_traversable(Coords::new(7, 7)));
    }

    #[test]
    fn test_mark_and_query() {
        let mut grid = TraversalGrid::new(8);
        grid.mark(Coords::new(2, 5));

        assert!(grid.is_traversable(Coords::new(2, 5)));
        assert!(!grid.is_traversable(Coords::new(5, 2)));
        assert_eq!(grid.known_count(), 1);
    }

    #[test]
    fn test_marks_are_idempotent() {
        let mut grid = TraversalGrid::new(8);
        grid.mark(Coords::new(1, 1));
        grid.mark(Coords::new(1, 1));

        assert_eq!(grid.known_count(), 1);
        assert!(grid.is_traversable(Coords::new(1, 1)));
    }

    #[test]
    fn test_out_of_bounds_reads_not_traversable() {
        let grid = TraversalGrid::new(8);
        assert!(!grid.is_traversable(Coords::new(-1, 0)));
        assert!(!grid.is_traversable(Coords::new(0, -1)));
        assert!(!grid.is_traversable(Coords::new(8, 0)));
        assert!(!grid.is_traversable(Coords::new(0, 8)));
    }

    #[test]
    fn test_out_of_bounds_mark_dropped() {
        let mut grid = TraversalGrid::new(8);
        grid.mark(Coords::new(-3, 4));
        grid.mark(Coords::new(4, 100));

        assert_eq!(grid.known_count(), 0);
    }

    #[test]
    fn test_clear_forgets_all() {
        let mut grid = TraversalGrid::new(8);
        grid.mark(Coords::new(3, 3));
        grid.mark(Coords::new(4, 4));
        grid.clear();

        assert_eq!(grid.known_count(), 0);
        assert!(!grid.is_traversable(Coords::new(3, 3)));
    }

    #[test]
    fn test_in_bounds() {
        let grid = TraversalGrid::new(8);
        assert!(grid.in_bounds(Coords::new(0, 0)));
        assert!(grid.in_bounds(Coords::new(7, 7)));
        assert!(!grid.in_bounds(Coords::new(8, 7)));
        assert!(!grid.in_bounds(Coords::new(-1, 3)));
    }
}
