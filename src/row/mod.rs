// vim: set ai et ts=4 sw=4 sts=4:
mod candidates;
pub mod solver;

use std::fmt;
use log::trace;

use super::clue::Clue;
use super::util::{Direction, Direction::*, Orientation};
use super::grid::{Grid, SquareStatus, Changes, Error};

pub use self::candidates::{generate, CandidateCache};

pub type Line = Vec<SquareStatus>;

#[derive(Debug, Clone)]
pub struct Row {
    pub direction:  Direction,
    pub index:      usize,
    pub length:     usize,
    pub clue:       Clue,
}

impl Row {
    pub fn new(direction: Direction,
               index: usize,
               length: usize,
               clue: Clue) -> Self
    {
        Row {
            direction,
            index,
            length,
            clue,
        }
    }

    pub fn square_index(&self, at: usize, orientation: Orientation) -> (usize, usize) {
        let at = orientation.map_index(at, self.length);
        match self.direction {
            Horizontal => (at, self.index),
            Vertical   => (self.index, at),
        }
    }

    pub fn clue_for(&self, orientation: Orientation) -> Clue {
        match orientation {
            Orientation::Forward  => self.clue.clone(),
            Orientation::Reversed => self.clue.reversed(),
        }
    }

    pub fn read(&self, grid: &Grid, orientation: Orientation) -> Line {
        (0..self.length).map(|at| {
                            let (x, y) = self.square_index(at, orientation);
                            grid.get_status(x, y)
                        })
                        .collect()
    }

    pub fn apply(&self, grid: &mut Grid, line: &[SquareStatus], orientation: Orientation)
        -> Result<Changes, Error>
    {
        assert!(line.len() == self.length);
        let mut changes = Changes::new();
        for (at, &status) in line.iter().enumerate() {
            if !status.is_known() {
                continue;
            }
            let (x, y) = self.square_index(at, orientation);
            if let Some(change) = grid.get_square_mut(x, y).set_status(status)? {
                trace!(target: "row", "{}: {}", self, change);
                changes.push(change);
            }
        }
        Ok(changes)
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} [{}]", self.direction.line_name(), self.index, self.clue)
    }
}
