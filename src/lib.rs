//! Perfect maze generation and solving.
//!
//! A [`maze::Grid`] owns the wall state of every cell. [`generators`] carves
//! a perfect maze into it with randomized backtracking, [`solvers`] recovers
//! the unique corner-to-corner route with depth-first search, and [`render`]
//! turns the finished grid and path into text.

pub mod generators;
pub mod maze;
pub mod render;
pub mod solvers;
