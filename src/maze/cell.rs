/// One of the four cardinal wall slots of a cell.
/// The discriminants index into the cell's wall array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

impl Direction {
    /// Canonical scan order. Neighbor queries yield candidates in this order,
    /// so a seeded random source reproduces the same maze every run.
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }

    /// The coordinate one step in this direction from `(r, c)`.
    ///
    /// NOTE: This way of handling underflow/overflow is overflow-safe.
    /// Stepping above row 0 (or left of column 0) wraps to u16::MAX, and
    /// stepping past u16::MAX saturates to it; both get filtered out by a
    /// bounds check, as the largest index numerically possible in any grid
    /// is u16::MAX - 1.
    pub fn step(self, (r, c): (u16, u16)) -> (u16, u16) {
        match self {
            Direction::Top => (r.wrapping_sub(1), c),
            Direction::Right => (r, c.saturating_add(1)),
            Direction::Bottom => (r.saturating_add(1), c),
            Direction::Left => (r, c.wrapping_sub(1)),
        }
    }

    /// Direction leading from `a` to `b`, if the two cells are grid-adjacent.
    pub fn between(a: (u16, u16), b: (u16, u16)) -> Option<Direction> {
        Direction::ALL.into_iter().find(|&dir| dir.step(a) == b)
    }
}

/// A single maze cell. All four walls are present until the generator carves
/// passages; `visited` only has meaning while generation is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    walls: [bool; 4],
    pub visited: bool,
}

impl Cell {
    pub fn has_wall(&self, dir: Direction) -> bool {
        self.walls[dir as usize]
    }

    /// Wall flags in `Direction` order (top, right, bottom, left).
    pub fn walls(&self) -> [bool; 4] {
        self.walls
    }

    pub(crate) fn clear_wall(&mut self, dir: Direction) {
        self.walls[dir as usize] = false;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            walls: [true; 4],
            visited: false,
        }
    }
}
