use crate::models::Point;

/// Largest side length accepted from configuration. A search allocates one
/// visited flag per cell and a route can cover every cell, so this also
/// bounds the response size.
pub const MAX_GRID_SIZE: usize = 1024;

pub const DEFAULT_GRID_SIZE: usize = 20;

/// Implicit open square grid. Every in-bounds cell is traversable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: usize,
}

impl Grid {
    pub const fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    pub fn contains(&self, point: Point) -> bool {
        self.index(point).is_some()
    }

    /// Row-major index of `point`, or `None` when it lies outside the grid.
    pub fn index(&self, point: Point) -> Option<usize> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(y * self.size + x)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }
}
