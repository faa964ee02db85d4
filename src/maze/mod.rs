pub mod cell;
mod grid;

pub use cell::{Cell, Direction};
pub use grid::Grid;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("maze dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: u16, cols: u16 },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
