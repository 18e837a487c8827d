// vim: set ai et ts=4 sts=4:
use std::fmt;
use std::convert::TryFrom;
use super::util::Direction;

pub trait HasGridLocation {
    fn get_row(&self) -> usize;
    fn get_col(&self) -> usize;
    fn fmt_location(&self) -> String {
        format!("(col={:-2}, row={:-2})", self.get_col(), self.get_row())
    }
}

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum SquareStatus {
    FilledIn,
    CrossedOut,
    Unknown,
}
impl SquareStatus {
    pub fn is_known(&self) -> bool {
        *self != SquareStatus::Unknown
    }
}
impl fmt::Display for SquareStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            SquareStatus::FilledIn   => "FilledIn",
            SquareStatus::CrossedOut => "CrossedOut",
            SquareStatus::Unknown    => "Unknown",
        })
    }
}
impl TryFrom<char> for SquareStatus {
    type Error = &'static str;
    // symbols accepted in puzzle files for pre-filled grids
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '\u{25A0}' | '#' | '1'  => Ok(SquareStatus::FilledIn),
            'X' | 'x' | '0'         => Ok(SquareStatus::CrossedOut),
            '.' | '?' | ' '         => Ok(SquareStatus::Unknown),
            _                       => Err("Not a valid square symbol")
        }
    }
}

// ------------------------------------------------

#[derive(PartialEq, Debug, Clone)]
pub struct StatusChange {
    pub row: usize,
    pub col: usize,
    pub old: SquareStatus,
    pub new: SquareStatus,
}
impl StatusChange {
    pub fn new(row: usize, col: usize, old: SquareStatus, new: SquareStatus) -> Self {
        Self { row, col, old, new }
    }
}
impl HasGridLocation for StatusChange {
    fn get_row(&self) -> usize { self.row }
    fn get_col(&self) -> usize { self.col }
}
impl fmt::Display for StatusChange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Change: in square {}, status was changed from {} to {}",
            self.fmt_location(),
            self.old,
            self.new)
    }
}
pub type Changes = Vec<StatusChange>;

// ------------------------------------------------

#[derive(PartialEq, Debug)]
pub enum StatusError {
    ChangeRejected(StatusChange, String),  // new status conflicts with existing (non-unknown) status
}
impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "StatusError: {}", match self {
            StatusError::ChangeRejected(change, msg) =>
                format!("In {}, attempt to change status from {} to {} was rejected: {}",
                    change.fmt_location(), change.old, change.new, msg),
        })
    }
}
impl std::error::Error for StatusError {}

pub type StatusResult = Result<Option<StatusChange>, StatusError>; // if it worked: the change, if any; if it didn't, the change that was rejected

#[derive(PartialEq, Debug)]
pub enum Error {
    Status(StatusError),
    Contradiction { direction: Direction, index: usize },
    Stalled { iterations: usize },
    IterationLimit(usize),
    InvalidSolution { lines: Vec<(Direction, usize)> },
}
impl From<StatusError> for Error {
    fn from(other: StatusError) -> Self {
        Error::Status(other)
    }
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Status(x) => write!(f, "{}", x),
            Error::Contradiction { direction, index } =>
                write!(f, "Unsatisfiable: no placement of the runs in {} {} agrees with the known squares",
                       direction.line_name(), index),
            Error::Stalled { iterations } =>
                write!(f, "Stalled after {} iterations: the puzzle requires search beyond pure line inference",
                       iterations),
            Error::IterationLimit(limit) =>
                write!(f, "Gave up after reaching the limit of {} iterations", limit),
            Error::InvalidSolution { lines } =>
                write!(f, "Grid is full but does not match the clues of {}",
                       lines.iter()
                            .map(|(direction, index)| format!("{} {}", direction.line_name(), index))
                            .collect::<Vec<_>>()
                            .join(", ")),
        }
    }
}
impl std::error::Error for Error {}

// ------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    row: usize,
    col: usize,
    status: SquareStatus,
}
impl Square {
    pub fn new(x: usize, y: usize) -> Square {
        Square {
            row: y,
            col: x,
            status: SquareStatus::Unknown,
        }
    }

    pub fn get_status(&self) -> SquareStatus { self.status }

    pub fn set_status(&mut self, new_status: SquareStatus) -> StatusResult {
        let cand_change = StatusChange::new(self.row, self.col, self.status, new_status);
        self.apply_status_change(cand_change)
    }

    pub fn apply_status_change(&mut self, cand_change: StatusChange)
        -> StatusResult
    {
        assert!(cand_change.row == self.row);
        assert!(cand_change.col == self.col);

        // nothing was learned about this square
        if cand_change.new == SquareStatus::Unknown {
            return Ok(None);
        }
        // if this square's status is already known, it can't be changed anymore,
        // that would be a conflict
        if self.status != SquareStatus::Unknown {
            if self.status != cand_change.new {
                return Err(StatusError::ChangeRejected(cand_change, "conflicting information".to_string()));
            }
            return Ok(None);
        }
        self.status = cand_change.new;
        Ok(Some(cand_change))
    }

    pub fn fmt_visual(&self, show_crosses: bool) -> &str {
        match self.status {
            SquareStatus::CrossedOut if show_crosses => "x",
            SquareStatus::CrossedOut => " ",
            SquareStatus::FilledIn   => "\u{25A0}",
            SquareStatus::Unknown    => ".",
        }
    }
}
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.fmt_visual(true))
    }
}
impl HasGridLocation for Square {
    fn get_row(&self) -> usize { self.row }
    fn get_col(&self) -> usize { self.col }
}

// ------------------------------------------------

// rows and columns are both projections onto these squares, stored row-major
#[derive(Clone, PartialEq)]
pub struct Grid {
    size: usize,
    squares: Vec<Square>,
}
impl Grid {
    pub fn new(size: usize) -> Self {
        Grid {
            size,
            squares: (0..size).flat_map(|y| (0..size).map(move |x| Square::new(x, y)))
                              .collect(),
        }
    }

    pub fn from_statuses(rows: &[Vec<SquareStatus>]) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }
        let mut grid = Grid::new(size);
        for (y, row) in rows.iter().enumerate() {
            for (x, &status) in row.iter().enumerate() {
                grid.get_square_mut(x, y).status = status;
            }
        }
        Some(grid)
    }

    pub fn size(&self) -> usize { self.size }

    pub fn get_square(&self, x: usize, y: usize) -> &Square {
        &self.squares[y * self.size + x]
    }
    pub fn get_square_mut(&mut self, x: usize, y: usize) -> &mut Square {
        &mut self.squares[y * self.size + x]
    }
    pub fn get_status(&self, x: usize, y: usize) -> SquareStatus {
        self.get_square(x, y).get_status()
    }

    pub fn row(&self, y: usize) -> Vec<SquareStatus> {
        (0..self.size).map(|x| self.get_status(x, y)).collect()
    }
    pub fn column(&self, x: usize) -> Vec<SquareStatus> {
        (0..self.size).map(|y| self.get_status(x, y)).collect()
    }

    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| s.get_status().is_known())
    }
    pub fn count_known(&self) -> usize {
        self.squares.iter().filter(|s| s.get_status().is_known()).count()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid(size={}, known={})", self.size, self.count_known())
    }
}
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                write!(f, "{}", self.get_square(x, y))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
