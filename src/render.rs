//! Text rendering of a finished maze.
//!
//! The algorithmic core only exposes per-cell wall flags and the solution
//! path as data; turning them into glyphs happens here.

use std::collections::HashSet;

use crate::maze::{Direction, Grid};

/// Renders the maze as lines of text: a top border of underscores, then one
/// line per row where each cell contributes its bottom wall (`_` or space)
/// and its right wall (`|` or space). Cells on `path` are marked `*`.
pub fn render_lines(grid: &Grid, path: &[(u16, u16)]) -> Vec<String> {
    let on_path: HashSet<(u16, u16)> = path.iter().copied().collect();
    let mut lines = Vec::with_capacity(grid.rows() as usize + 1);

    let mut border = String::from(" ");
    border.push_str(&"_".repeat(grid.cols() as usize * 2 - 1));
    lines.push(border);

    for r in 0..grid.rows() {
        let mut line = String::from("|");
        for c in 0..grid.cols() {
            let cell = &grid[(r, c)];
            let floor = if on_path.contains(&(r, c)) {
                '*'
            } else if cell.has_wall(Direction::Bottom) {
                '_'
            } else {
                ' '
            };
            let side = if cell.has_wall(Direction::Right) {
                '|'
            } else {
                ' '
            };
            line.push(floor);
            line.push(side);
        }
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_sealed_cell() {
        let grid = Grid::new(1, 1).unwrap();
        assert_eq!(render_lines(&grid, &[]), vec![" _", "|_|"]);
    }

    #[test]
    fn test_render_uncarved_grid() {
        let grid = Grid::new(2, 2).unwrap();
        assert_eq!(render_lines(&grid, &[]), vec![" ___", "|_|_|", "|_|_|"]);
    }

    #[test]
    fn test_render_marks_path_and_open_walls() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.remove_walls((0, 0), (0, 1));
        grid.remove_walls((0, 1), (1, 1));
        let lines = render_lines(&grid, &[(0, 0), (0, 1), (1, 1)]);
        // (0,0) and (0,1) are on the path; (0,1)'s bottom wall is open but
        // the marker takes the slot either way. (1,0) keeps its walls.
        assert_eq!(lines, vec![" ___", "|* *|", "|_|*|"]);
    }
}
