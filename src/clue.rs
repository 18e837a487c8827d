// vim: set ai et ts=4 sw=4 sts=4:
use std::fmt;
use std::convert::TryFrom;

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum ClueError {
    ZeroLengthRun(Vec<usize>), // a 0 is only allowed on its own, meaning "no runs"
}
impl fmt::Display for ClueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClueError::ZeroLengthRun(runs) =>
                write!(f, "ClueError: run lengths {:?} contain a zero-length run", runs),
        }
    }
}
impl std::error::Error for ClueError {}

#[derive(PartialEq, Eq, Hash, Clone, Debug, Default)]
pub struct Clue {
    runs: Vec<usize>,
}

impl Clue {
    pub fn new(runs: Vec<usize>) -> Result<Self, ClueError> {
        if runs.len() == 1 && runs[0] == 0 {
            return Ok(Clue::default());
        }
        if runs.iter().any(|&len| len == 0) {
            return Err(ClueError::ZeroLengthRun(runs));
        }
        Ok(Clue { runs })
    }

    pub fn runs(&self) -> &[usize] { &self.runs }
    pub fn len(&self) -> usize { self.runs.len() }
    pub fn is_empty(&self) -> bool { self.runs.is_empty() }
    pub fn first(&self) -> Option<usize> { self.runs.first().copied() }
    pub fn total(&self) -> usize { self.runs.iter().sum() }

    pub fn min_span(&self) -> usize {
        if self.runs.is_empty() {
            return 0;
        }
        self.total() + self.runs.len() - 1
    }
    pub fn fits(&self, length: usize) -> bool {
        self.min_span() <= length
    }

    pub fn reversed(&self) -> Clue {
        Clue { runs: self.runs.iter().rev().copied().collect() }
    }
}

impl TryFrom<Vec<usize>> for Clue {
    type Error = ClueError;
    fn try_from(runs: Vec<usize>) -> Result<Self, Self::Error> {
        Clue::new(runs)
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.runs.is_empty() {
            return write!(f, "0");
        }
        write!(f, "{}", self.runs.iter()
                                 .map(|len| len.to_string())
                                 .collect::<Vec<_>>()
                                 .join(" "))
    }
}
