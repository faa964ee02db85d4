use rand::Rng;

use crate::generators::get_rng;
use crate::maze::Grid;

/// Carves a perfect maze into `grid` with randomized backtracking, optionally
/// seeded for reproducible output.
pub fn recursive_backtrack(grid: &mut Grid, seed: Option<u64>) {
    carve(grid, &mut get_rng(seed));
}

/// Randomized backtracking with an injected random source.
///
/// A wall is only removed when stepping into an unvisited cell, so the open
/// passages form a spanning tree of the grid: every cell reachable, exactly
/// one route between any two cells.
///
/// The stack is explicit to keep recursion depth off the call stack on large
/// grids. Every cell is pushed at most once, so the loop runs O(rows * cols)
/// stack operations and cannot fail for any valid grid.
pub fn carve<R: Rng>(grid: &mut Grid, rng: &mut R) {
    grid[(0, 0)].visited = true;

    // The stack holds the route carved so far; the top is the cell being
    // extended.
    let mut stack = vec![(0u16, 0u16)];
    let mut carved = 0usize;

    while let Some(&(r, c)) = stack.last() {
        let neighbors = grid.unvisited_neighbors(r, c);
        if neighbors.is_empty() {
            // Dead end, backtrack
            stack.pop();
            continue;
        }
        let (nr, nc, _) = neighbors[rng.random_range(0..neighbors.len())];
        grid.remove_walls((r, c), (nr, nc));
        grid[(nr, nc)].visited = true;
        stack.push((nr, nc));
        carved += 1;
    }

    tracing::debug!(
        "[generate] carved {} passages in a {}x{} grid",
        carved,
        grid.rows(),
        grid.cols()
    );
}
