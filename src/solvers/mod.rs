mod dfs;

pub use dfs::solve_dfs;

use crate::maze::Grid;

/// Finds the route from the top-left corner to the bottom-right corner of a
/// generated maze.
///
/// In a perfect maze exactly one simple path connects the two corners, so
/// depth-first search finds *the* path, and neighbor tie-breaking only
/// affects how much of the maze gets explored along the way.
pub fn solve(grid: &Grid) -> Option<Vec<(u16, u16)>> {
    let start = (0, 0);
    let goal = (grid.rows() - 1, grid.cols() - 1);
    let path = solve_dfs(grid, start, goal);
    match &path {
        Some(path) => {
            tracing::debug!("[solve] found a path of {} cells to {:?}", path.len(), goal)
        }
        None => tracing::warn!("[solve] no path from {:?} to {:?}", start, goal),
    }
    path
}
