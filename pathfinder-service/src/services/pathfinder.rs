//! Depth-first route search over an open square grid.
//!
//! The search returns the first route found when neighbours are tried in the
//! fixed order up, right, down, left. It is exhaustive and deterministic but
//! makes no attempt to find a short route: on an open grid the result is
//! usually a long sweep across the board.

use super::grid::Grid;
use crate::models::{Path, Point};

/// Neighbour offsets in visiting order: up, right, down, left.
pub const DIRECTIONS: [Point; 4] = [
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
];

/// One level of the explicit DFS stack.
struct Frame {
    cell: Point,
    /// Index into [`DIRECTIONS`] of the next neighbour to try.
    next: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathFinder {
    grid: Grid,
}

impl PathFinder {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Find a 4-connected route from `start` to `end`, both inclusive.
    ///
    /// Returns `None` when either endpoint lies outside the grid or when the
    /// search is exhausted. Each cell is visited at most once, so the search
    /// runs in O(N²) time and memory for an N×N grid.
    pub fn find_path(&self, start: Point, end: Point) -> Option<Path> {
        let start_index = self.grid.index(start)?;
        if !self.grid.contains(end) {
            return None;
        }

        let mut visited = vec![false; self.grid.cell_count()];
        visited[start_index] = true;

        if start == end {
            return Some(vec![start]);
        }

        // The stack doubles as the path buffer: frames below the top are the
        // route taken so far.
        let mut stack = vec![Frame {
            cell: start,
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(&offset) = DIRECTIONS.get(frame.next) else {
                // Every neighbour failed; backtrack. Visited marks are kept.
                stack.pop();
                continue;
            };
            frame.next += 1;

            let Some(neighbor) = frame.cell.checked_offset(offset) else {
                continue;
            };
            let Some(index) = self.grid.index(neighbor) else {
                continue;
            };
            if visited[index] {
                continue;
            }
            visited[index] = true;

            if neighbor == end {
                let mut path: Path = stack.iter().map(|f| f.cell).collect();
                path.push(neighbor);
                return Some(path);
            }

            stack.push(Frame {
                cell: neighbor,
                next: 0,
            });
        }

        None
    }
}
