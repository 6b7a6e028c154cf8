//! A* pathfinding over the traversability grid
//!
//! Unit-cost 4-connected search with a Manhattan heuristic.

use ahash::AHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::core::types::{Coords, Facing};
use crate::knowledge::TraversalGrid;

/// Node in the A* open set
#[derive(Debug, Clone)]
struct PathNode {
    coords: Coords,
    f_cost: u32, // g_cost + heuristic
}

impl PartialEq for PathNode {
    fn eq(&self, other: &Self) -> bool {
        self.coords == other.coords
    }
}

impl Eq for PathNode {}

impl Ord for PathNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap
        other.f_cost.cmp(&self.f_cost)
    }
}

impl PartialOrd for PathNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find a path using the A* algorithm
///
/// Intermediate nodes must be known traversable; the goal itself is
/// admitted as a terminal node even when unknown or blocked, so the
/// search can target a destination that has not been scouted yet.
/// Returns the full path including the start cell, or None if no path
/// exists.
pub fn find_path(grid: &TraversalGrid, start: Coords, goal: Coords) -> Option<Vec<Coords>> {
    if start == goal {
        return Some(vec![start]);
    }

    let mut open_set = BinaryHeap::new();
    let mut came_from: AHashMap<Coords, Coords> = AHashMap::new();
    let mut g_scores: AHashMap<Coords, u32> = AHashMap::new();

    g_scores.insert(start, 0);
    open_set.push(PathNode {
        coords: start,
        f_cost: start.manhattan_distance(&goal),
    });

    while let Some(current) = open_set.pop() {
        if current.coords == goal {
            return Some(reconstruct_path(&came_from, current.coords));
        }

        let Some(&current_g) = g_scores.get(&current.coords) else {
            continue;
        };

        // Fixed neighbor order keeps tie-breaking deterministic
        for facing in Facing::all() {
            let neighbor = current.coords + facing.offset();

            if neighbor != goal && !grid.is_traversable(neighbor) {
                continue;
            }

            let tentative_g = current_g + 1;
            let neighbor_g = *g_scores.get(&neighbor).unwrap_or(&u32::MAX);

            if tentative_g < neighbor_g {
                came_from.insert(neighbor, current.coords);
                g_scores.insert(neighbor, tentative_g);

                open_set.push(PathNode {
                    coords: neighbor,
                    f_cost: tentative_g + neighbor.manhattan_distance(&goal),
                });
            }
        }
    }

    None // No path found
}

/// Reconstruct path from came_from map
fn reconstruct_path(came_from: &AHashMap<Coords, Coords>, mut current: Coords) -> Vec<Coords> {
    let mut path = vec![current];
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid(extent: u32) -> TraversalGrid {
        let mut grid = TraversalGrid::new(extent);
        for y in 0..extent as i32 {
            for x in 0..extent as i32 {
                grid.mark(Coords::new(x, y));
            }
        }
        grid
    }

    #[test]
    fn test_pathfind_straight_line() {
        let grid = open_grid(10);
        let start = Coords::new(0, 0);
        let goal = Coords::new(5, 0);

        let path = find_path(&grid, start, goal).unwrap();

        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        // Unit cost grid: optimal length is manhattan distance + 1 nodes
        assert_eq!(path.len() as u32, start.manhattan_distance(&goal) + 1);
    }

    #[test]
    fn test_pathfind_around_obstacle() {
        // Unknown column at x=4, passable only through y=9
        let mut grid = TraversalGrid::new(10);
        for y in 0..10 {
            for x in 0..10 {
                if x == 4 && y < 9 {
                    continue;
                }
                grid.mark(Coords::new(x, y));
            }
        }

        let start = Coords::new(0, 0);
        let goal = Coords::new(9, 0);
        let path = find_path(&grid, start, goal).unwrap();

        // Must detour through the bottom row gap
        assert!(path.contains(&Coords::new(4, 9)));
        assert!(!path.iter().any(|c| c.x == 4 && c.y < 9));
    }

    #[test]
    fn test_pathfind_no_path() {
        let mut grid = TraversalGrid::new(10);
        // Two islands with nothing between them
        grid.mark(Coords::new(0, 0));
        grid.mark(Coords::new(1, 0));
        grid.mark(Coords::new(8, 8));

        assert!(find_path(&grid, Coords::new(0, 0), Coords::new(8, 8)).is_none());
    }

    #[test]
    fn test_pathfind_same_start_goal() {
        let grid = open_grid(10);
        let start = Coords::new(5, 5);

        let path = find_path(&grid, start, start).unwrap();

        assert_eq!(path.len(), 1);
        assert_eq!(path[0], start);
    }

    #[test]
    fn test_goal_admitted_when_unknown() {
        let mut grid = TraversalGrid::new(10);
        grid.mark(Coords::new(0, 0));
        grid.mark(Coords::new(1, 0));
        // (2,0) never observed, but it is the destination

        let path = find_path(&grid, Coords::new(0, 0), Coords::new(2, 0)).unwrap();

        assert_eq!(path.last(), Some(&Coords::new(2, 0)));
    }

    #[test]
    fn test_unknown_cells_not_used_as_intermediates() {
        let mut grid = TraversalGrid::new(10);
        // Only a dogleg corridor is known
        for x in 0..=3 {
            grid.mark(Coords::new(x, 1));
        }
        grid.mark(Coords::new(3, 0));

        let path = find_path(&grid, Coords::new(0, 1), Coords::new(3, 0)).unwrap();

        // Every non-goal node must be a known cell
        for coords in &path[..path.len() - 1] {
            assert!(grid.is_traversable(*coords));
        }
        // The short way through unknown (0,0)..(2,0) must not be taken
        assert!(!path.contains(&Coords::new(0, 0)));
    }

    #[test]
    fn test_path_is_4_connected() {
        let grid = open_grid(10);
        let path = find_path(&grid, Coords::new(1, 1), Coords::new(7, 6)).unwrap();

        for pair in path.windows(2) {
            assert_eq!(pair[0].manhattan_distance(&pair[1]), 1);
        }
    }
}
