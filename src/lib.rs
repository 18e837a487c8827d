// vim: set ai et ts=4 sw=4 sts=4:
pub mod util;
pub mod clue;
pub mod grid;
pub mod row;
pub mod puzzle;
pub mod ui;

pub use clue::Clue;
pub use grid::{Grid, SquareStatus, Error};
pub use puzzle::{Puzzle, PuzzleError, Solver, SolverOptions};
