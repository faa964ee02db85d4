use super::MazeError;
use super::cell::{Cell, Direction};

/// Row-major grid of maze cells.
///
/// The grid owns the wall state. Walls are only ever cleared through
/// [`Grid::remove_walls`], which clears the two facing flags of a passage in
/// one operation, so adjacent cells always agree on the wall between them.
pub struct Grid {
    cells: Box<[Cell]>,
    rows: u16,
    cols: u16,
}

impl Grid {
    /// Creates a grid with every wall present and every cell unvisited.
    pub fn new(rows: u16, cols: u16) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        let cells = vec![Cell::default(); rows as usize * cols as usize].into_boxed_slice();
        Ok(Grid { cells, rows, cols })
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    fn ravel_index(&self, r: u16, c: u16) -> usize {
        debug_assert!(self.index_valid(r, c));
        // Overflow-safe since rows and cols are u16 (assuming usize is at least 32 bits)
        r as usize * self.cols as usize + c as usize
    }

    /// Checks if the given coordinate is within the bounds of the grid.
    pub fn index_valid(&self, r: u16, c: u16) -> bool {
        r < self.rows && c < self.cols
    }

    /// In-bounds neighbors of `(r, c)` that have not been visited yet,
    /// together with the direction leading to each, in canonical order.
    pub fn unvisited_neighbors(&self, r: u16, c: u16) -> Vec<(u16, u16, Direction)> {
        Direction::ALL
            .into_iter()
            .map(|dir| {
                let (nr, nc) = dir.step((r, c));
                (nr, nc, dir)
            })
            .filter(|&(nr, nc, _)| self.index_valid(nr, nc) && !self[(nr, nc)].visited)
            .collect()
    }

    /// In-bounds neighbors of `(r, c)` reachable through an open wall, in
    /// canonical order. Ignores visited flags; used for traversal once the
    /// maze is generated.
    pub fn accessible_neighbors(&self, r: u16, c: u16) -> Vec<(u16, u16)> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| !self[(r, c)].has_wall(dir))
            .map(|dir| dir.step((r, c)))
            .filter(|&(nr, nc)| self.index_valid(nr, nc))
            .collect()
    }

    /// Opens the passage between two adjacent cells by clearing the wall flag
    /// on each side.
    ///
    /// # Panics
    /// If the cells are not grid-adjacent. That is a bug in the carving
    /// algorithm, not bad input, so it is not a recoverable error.
    pub fn remove_walls(&mut self, a: (u16, u16), b: (u16, u16)) {
        let dir = Direction::between(a, b)
            .unwrap_or_else(|| panic!("cells {a:?} and {b:?} are not adjacent"));
        self[a].clear_wall(dir);
        self[b].clear_wall(dir.opposite());
    }
}

impl std::ops::Index<(u16, u16)> for Grid {
    type Output = Cell;

    fn index(&self, (r, c): (u16, u16)) -> &Self::Output {
        &self.cells[self.ravel_index(r, c)]
    }
}

impl std::ops::IndexMut<(u16, u16)> for Grid {
    fn index_mut(&mut self, (r, c): (u16, u16)) -> &mut Self::Output {
        let idx = self.ravel_index(r, c);
        &mut self.cells[idx]
    }
}
