// vim: set ai et ts=4 sw=4 sts=4:
mod format;
pub mod solver;
pub mod validity;

use std::convert::TryFrom;
use std::fmt;
use std::io;

use super::clue::{Clue, ClueError};
use super::grid::Grid;
use super::row::Row;
use super::util::{Direction, Direction::*};

pub use self::solver::{Solver, SolverOptions, Step};

#[derive(Debug)]
pub enum PuzzleError {
    Io(io::Error),
    Yaml(yaml_rust::ScanError),
    Json(serde_json::Error),
    Format(String),
    Clue(Direction, usize, ClueError),
    ClueTooLong { direction: Direction, index: usize, min_span: usize, length: usize },
    LineCount { direction: Direction, expected: usize, found: usize },
    GridSize { expected: usize, found: usize },
    Empty,
}
impl From<io::Error> for PuzzleError {
    fn from(other: io::Error) -> Self {
        PuzzleError::Io(other)
    }
}
impl From<yaml_rust::ScanError> for PuzzleError {
    fn from(other: yaml_rust::ScanError) -> Self {
        PuzzleError::Yaml(other)
    }
}
impl From<serde_json::Error> for PuzzleError {
    fn from(other: serde_json::Error) -> Self {
        PuzzleError::Json(other)
    }
}
impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PuzzleError::Io(x)     => write!(f, "Could not read puzzle: {}", x),
            PuzzleError::Yaml(x)   => write!(f, "Invalid YAML: {}", x),
            PuzzleError::Json(x)   => write!(f, "Invalid JSON: {}", x),
            PuzzleError::Format(s) => write!(f, "Invalid puzzle definition: {}", s),
            PuzzleError::Clue(direction, index, x) =>
                write!(f, "In {} {}: {}", direction.line_name(), index, x),
            PuzzleError::ClueTooLong { direction, index, min_span, length } =>
                write!(f, "Runs of {} {} need at least {} squares but the line only has {}",
                       direction.line_name(), index, min_span, length),
            PuzzleError::LineCount { direction, expected, found } =>
                write!(f, "Expected {} {} clues, found {}", expected, direction.line_name(), found),
            PuzzleError::GridSize { expected, found } =>
                write!(f, "Initial grid is {}x{}, expected {}x{}", found, found, expected, expected),
            PuzzleError::Empty => write!(f, "Puzzle has no rows"),
        }
    }
}
impl std::error::Error for PuzzleError {}

#[derive(Debug, Clone)]
pub struct Puzzle {
    pub rows: Vec<Row>,
    pub cols: Vec<Row>,
    pub initial_grid: Option<Grid>,
}

impl Puzzle {
    pub fn new(size: usize,
               row_run_lengths: Vec<Vec<usize>>,
               col_run_lengths: Vec<Vec<usize>>,
               initial_grid: Option<Grid>) -> Result<Self, PuzzleError>
    {
        if size == 0 {
            return Err(PuzzleError::Empty);
        }
        let rows = Self::_make_rows(Horizontal, size, row_run_lengths)?;
        let cols = Self::_make_rows(Vertical, size, col_run_lengths)?;
        if let Some(grid) = &initial_grid {
            if grid.size() != size {
                return Err(PuzzleError::GridSize { expected: size, found: grid.size() });
            }
        }
        Ok(Puzzle {
            rows,
            cols,
            initial_grid,
        })
    }

    fn _make_rows(direction: Direction, size: usize, run_lengths: Vec<Vec<usize>>)
        -> Result<Vec<Row>, PuzzleError>
    {
        if run_lengths.len() != size {
            return Err(PuzzleError::LineCount { direction, expected: size, found: run_lengths.len() });
        }
        run_lengths.into_iter()
                   .enumerate()
                   .map(|(index, runs)| {
                       let clue = Clue::try_from(runs).map_err(|e| PuzzleError::Clue(direction, index, e))?;
                       if !clue.fits(size) {
                           return Err(PuzzleError::ClueTooLong {
                               direction,
                               index,
                               min_span: clue.min_span(),
                               length: size,
                           });
                       }
                       Ok(Row::new(direction, index, size, clue))
                   })
                   .collect()
    }

    pub fn size(&self) -> usize { self.rows.len() }

    pub fn lines(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().chain(self.cols.iter())
    }

    pub fn starting_grid(&self) -> Grid {
        match &self.initial_grid {
            Some(grid) => grid.clone(),
            None       => Grid::new(self.size()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::grid::SquareStatus::*;

    #[test]
    fn test_new_builds_rows_and_cols() {
        let puzzle = Puzzle::new(3, vec![vec![3], vec![0], vec![1, 1]],
                                    vec![vec![1, 1], vec![1], vec![2]], None).unwrap();
        assert_eq!(puzzle.size(), 3);
        assert_eq!(puzzle.rows[1].clue.runs(), &[] as &[usize]);
        assert_eq!(puzzle.cols[2].direction, Vertical);
        assert_eq!(puzzle.lines().count(), 6);
        assert!(!puzzle.starting_grid().is_full());
    }

    #[test]
    fn test_rejects_clue_that_does_not_fit() {
        let err = Puzzle::new(3, vec![vec![2, 1], vec![0], vec![1]],
                                 vec![vec![1], vec![1], vec![1]], None).unwrap_err();
        match err {
            PuzzleError::ClueTooLong { direction, index, min_span, length } => {
                assert_eq!((direction, index, min_span, length), (Horizontal, 0, 4, 3));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_rejects_wrong_counts() {
        assert!(matches!(Puzzle::new(2, vec![vec![1]], vec![vec![1], vec![1]], None),
                         Err(PuzzleError::LineCount { direction: Horizontal, expected: 2, found: 1 })));
        assert!(matches!(Puzzle::new(0, vec![], vec![], None), Err(PuzzleError::Empty)));
        assert!(matches!(Puzzle::new(2, vec![vec![1], vec![1, 0]], vec![vec![1], vec![1]], None),
                         Err(PuzzleError::Clue(Horizontal, 1, _))));
    }

    #[test]
    fn test_initial_grid_must_match_size() {
        let grid = Grid::from_statuses(&[vec![FilledIn]]).unwrap();
        assert!(matches!(Puzzle::new(2, vec![vec![1], vec![1]], vec![vec![1], vec![1]], Some(grid)),
                         Err(PuzzleError::GridSize { expected: 2, found: 1 })));
    }
}
