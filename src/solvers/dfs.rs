use std::collections::HashSet;

use crate::maze::Grid;

/// Depth-first search over open passages from `start` to `goal`.
///
/// Uses an explicit frame stack rather than native recursion, so a large grid
/// cannot overflow the call stack. The cells on the stack are exactly the
/// route currently being explored, so reaching the goal yields the path
/// directly, in start-to-goal order.
///
/// The grid is read-only here; the solver keeps its own visited set instead
/// of reusing the generation-time flags. That set also guarantees termination
/// on any wall state, even one that is not a tree.
pub fn solve_dfs(grid: &Grid, start: (u16, u16), goal: (u16, u16)) -> Option<Vec<(u16, u16)>> {
    let mut visited = HashSet::from([start]);
    let mut path = vec![start];
    if start == goal {
        return Some(path);
    }

    // One frame per cell on the route: the candidates not yet tried from it
    let mut frames = vec![grid.accessible_neighbors(start.0, start.1).into_iter()];

    while let Some(frame) = frames.last_mut() {
        let Some(next) = frame.next() else {
            // Every passage out of this cell leads nowhere; backtrack
            frames.pop();
            path.pop();
            continue;
        };
        if !visited.insert(next) {
            continue;
        }
        path.push(next);
        if next == goal {
            return Some(path);
        }
        frames.push(grid.accessible_neighbors(next.0, next.1).into_iter());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_equals_goal() {
        let grid = Grid::new(1, 1).unwrap();
        assert_eq!(solve_dfs(&grid, (0, 0), (0, 0)), Some(vec![(0, 0)]));
    }

    #[test]
    fn test_no_path_through_sealed_grid() {
        // All walls intact, so nothing beyond the start is reachable
        let grid = Grid::new(3, 3).unwrap();
        assert_eq!(solve_dfs(&grid, (0, 0), (2, 2)), None);
    }

    #[test]
    fn test_straight_corridor() {
        let mut grid = Grid::new(1, 4).unwrap();
        for c in 0..3 {
            grid.remove_walls((0, c), (0, c + 1));
        }
        assert_eq!(
            solve_dfs(&grid, (0, 0), (0, 3)),
            Some(vec![(0, 0), (0, 1), (0, 2), (0, 3)])
        );
    }

    #[test]
    fn test_terminates_with_cycles_present() {
        // Open every wall in a 3x3 block; the graph is full of cycles, but
        // the visited set still forces termination with some valid path
        let mut grid = Grid::new(3, 3).unwrap();
        for r in 0..3 {
            for c in 0..3 {
                if c + 1 < 3 {
                    grid.remove_walls((r, c), (r, c + 1));
                }
                if r + 1 < 3 {
                    grid.remove_walls((r, c), (r + 1, c));
                }
            }
        }
        let path = solve_dfs(&grid, (0, 0), (2, 2)).unwrap();
        assert_eq!(path.first(), Some(&(0, 0)));
        assert_eq!(path.last(), Some(&(2, 2)));
    }
}
