// vim: set ai et ts=4 sw=4 sts=4:
use super::Puzzle;
use super::super::clue::Clue;
use super::super::grid::{Grid, SquareStatus};
use super::super::row::solver::run_lengths;
use super::super::util::{Direction, Orientation};

pub fn line_matches(line: &[SquareStatus], clue: &Clue) -> bool {
    run_lengths(line) == clue.runs()
}

pub fn unsatisfied_lines(grid: &Grid, puzzle: &Puzzle) -> Vec<(Direction, usize)> {
    puzzle.lines()
          .filter(|row| !line_matches(&row.read(grid, Orientation::Forward), &row.clue))
          .map(|row| (row.direction, row.index))
          .collect()
}

pub fn is_solved(grid: &Grid, puzzle: &Puzzle) -> bool {
    grid.is_full()
        && puzzle.lines().all(|row| line_matches(&row.read(grid, Orientation::Forward), &row.clue))
}
