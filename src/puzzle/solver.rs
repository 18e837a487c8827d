// vim: set ai et ts=4 sts=4 sw=4:
use std::fmt;
use log::{debug, info, trace, warn};

use super::Puzzle;
use super::validity::{is_solved, unsatisfied_lines};
use super::super::grid::{Grid, Changes, Error};
use super::super::row::CandidateCache;
use super::super::row::solver::{filter_and_combine_with, fill_leading_block, close_line};
use super::super::util::Orientation::{self, Forward, Reversed};

#[derive(Debug, Clone)]
pub struct SolverOptions {
    pub max_iterations: usize,
    pub cache_candidates: bool,
}
impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            max_iterations: 1000,
            cache_candidates: true,
        }
    }
}

// run in this order, each over all rows and then all columns
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Deduction {
    Filter,
    LeadingBlock,
    Close,
}
impl Deduction {
    fn orientations(&self) -> &'static [Orientation] {
        match self {
            // the leading block rule only looks at the start of a line, so it runs on both ends
            Deduction::LeadingBlock => &[Forward, Reversed],
            _                       => &[Forward],
        }
    }
}
impl fmt::Display for Deduction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            Deduction::Filter       => "filter",
            Deduction::LeadingBlock => "leading block",
            Deduction::Close        => "close",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub iteration: usize,
    pub changes: Changes,
}

pub struct Solver {
    pub puzzle: Puzzle,
    pub grid: Grid,
    pub iterations: usize,
    options: SolverOptions,
    cache: CandidateCache,
    finished: bool,
}

impl Solver {
    pub fn new(puzzle: Puzzle) -> Self {
        Self::with_options(puzzle, SolverOptions::default())
    }

    pub fn with_options(puzzle: Puzzle, options: SolverOptions) -> Self {
        let grid = puzzle.starting_grid();
        let cache = CandidateCache::new(options.cache_candidates);
        Solver {
            puzzle,
            grid,
            iterations: 0,
            options,
            cache,
            finished: false,
        }
    }

    pub fn is_solved(&self) -> bool {
        is_solved(&self.grid, &self.puzzle)
    }

    pub fn solve(&mut self) -> Result<&Grid, Error> {
        while let Some(result) = self.next() {
            match result {
                Ok(step) => trace!("grid after iteration {}:\n{}", step.iteration, self.grid),
                Err(e) => {
                    warn!("solving failed after {} iterations: {}", self.iterations, e);
                    return Err(e);
                }
            }
        }
        Ok(&self.grid)
    }

    pub fn step(&mut self) -> Result<Changes, Error> {
        let mut changes = Changes::new();
        for &deduction in &[Deduction::Filter, Deduction::LeadingBlock, Deduction::Close] {
            let found = self.sweep(deduction)?;
            trace!("{} pass: {} squares", deduction, found.len());
            changes.extend(found);
        }
        Ok(changes)
    }

    fn sweep(&mut self, deduction: Deduction) -> Result<Changes, Error> {
        let mut changes = Changes::new();
        for row in self.puzzle.lines() {
            for &orientation in deduction.orientations() {
                let line = row.read(&self.grid, orientation);
                let clue = row.clue_for(orientation);
                let deduced = match deduction {
                    Deduction::Filter => {
                        let candidates = self.cache.candidates(row.length, &clue);
                        filter_and_combine_with(&line, &candidates)
                            .ok_or(Error::Contradiction { direction: row.direction, index: row.index })?
                    }
                    Deduction::LeadingBlock => fill_leading_block(&line, &clue),
                    Deduction::Close        => close_line(&line, &clue),
                };
                changes.extend(row.apply(&mut self.grid, &deduced, orientation)?);
            }
        }
        Ok(changes)
    }

    fn _next_step(&mut self) -> Result<Step, Error> {
        if self.grid.is_full() {
            return Err(Error::InvalidSolution { lines: unsatisfied_lines(&self.grid, &self.puzzle) });
        }
        if self.iterations >= self.options.max_iterations {
            return Err(Error::IterationLimit(self.options.max_iterations));
        }

        let changes = self.step()?;
        self.iterations += 1;
        debug!("iteration {}: {} squares deduced, {}/{} known (candidate cache: {} hits, {} misses)",
               self.iterations,
               changes.len(),
               self.grid.count_known(),
               self.grid.size() * self.grid.size(),
               self.cache.hits,
               self.cache.misses);

        if changes.is_empty() {
            return Err(Error::Stalled { iterations: self.iterations });
        }
        Ok(Step { iteration: self.iterations, changes })
    }
}

impl Iterator for Solver {
    type Item = Result<Step, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if self.is_solved() {
            info!("solved after {} iterations", self.iterations);
            self.finished = true;
            return None;
        }
        let result = self._next_step();
        if result.is_err() {
            self.finished = true;
        }
        Some(result)
    }
}
