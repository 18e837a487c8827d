// vim: set ai et ts=4 sw=4 sts=4:
use std::collections::HashMap;
use std::rc::Rc;

use super::Line;
use super::super::clue::Clue;
use super::super::grid::SquareStatus::{CrossedOut, FilledIn};

pub fn generate(length: usize, clue: &Clue) -> Vec<Line> {
    let mut results = Vec::<Line>::new();
    if !clue.fits(length) {
        return results;
    }
    place_runs(length, clue.runs(), vec![CrossedOut; length], 0, &mut results);
    results
}

fn place_runs(length: usize,
              runs: &[usize],
              line: Line,
              floor: usize,
              results: &mut Vec<Line>)
{
    let (&run, rest) = match runs.split_first() {
        Some(split) => split,
        None => {
            results.push(line);
            return;
        }
    };

    // space still needed by this run and everything after it
    let min_span = runs.iter().sum::<usize>() + runs.len() - 1;
    for offset in floor..=(length - min_span) {
        let mut placed = line.clone();
        for square in &mut placed[offset..offset+run] {
            *square = FilledIn;
        }
        // the +1 leaves the mandatory gap after this run
        place_runs(length, rest, placed, offset + run + 1, results);
    }
}

#[derive(Debug)]
pub struct CandidateCache {
    enabled: bool,
    entries: HashMap<(usize, Clue), Rc<Vec<Line>>>,
    pub hits: usize,
    pub misses: usize,
}

impl CandidateCache {
    pub fn new(enabled: bool) -> Self {
        CandidateCache {
            enabled,
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn candidates(&mut self, length: usize, clue: &Clue) -> Rc<Vec<Line>> {
        if !self.enabled {
            self.misses += 1;
            return Rc::new(generate(length, clue));
        }
        let key = (length, clue.clone());
        if let Some(cached) = self.entries.get(&key) {
            self.hits += 1;
            return Rc::clone(cached);
        }
        self.misses += 1;
        let generated = Rc::new(generate(length, clue));
        self.entries.insert(key, Rc::clone(&generated));
        generated
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CandidateCache {
    fn default() -> Self {
        CandidateCache::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::solver::run_lengths;
    use super::super::super::grid::SquareStatus::*;

    fn clue(runs: &[usize]) -> Clue {
        Clue::new(runs.to_vec()).unwrap()
    }

    #[test]
    fn test_single_run_offsets_in_order() {
        let cands = generate(5, &clue(&[3]));
        assert_eq!(cands, vec![
            vec![FilledIn, FilledIn, FilledIn, CrossedOut, CrossedOut],
            vec![CrossedOut, FilledIn, FilledIn, FilledIn, CrossedOut],
            vec![CrossedOut, CrossedOut, FilledIn, FilledIn, FilledIn],
        ]);
    }

    #[test]
    fn test_two_runs_need_a_gap() {
        // 1 2 in 6 squares: the classic six placements
        let cands = generate(6, &clue(&[1, 2]));
        assert_eq!(cands.len(), 6);
        assert_eq!(cands[0], vec![FilledIn, CrossedOut, FilledIn, FilledIn, CrossedOut, CrossedOut]);
        assert_eq!(cands[5], vec![CrossedOut, CrossedOut, FilledIn, CrossedOut, FilledIn, FilledIn]);
    }

    #[test]
    fn test_every_candidate_reproduces_its_clue() {
        for runs in &[vec![1], vec![2, 1], vec![1, 1, 1], vec![3, 2], vec![1, 2, 1, 1]] {
            let c = clue(runs);
            for length in c.min_span()..c.min_span() + 3 {
                let cands = generate(length, &c);
                assert!(!cands.is_empty());
                for cand in cands {
                    assert_eq!(cand.len(), length);
                    assert!(cand.iter().all(|s| s.is_known()));
                    assert_eq!(run_lengths(&cand), *runs);
                }
            }
        }
    }

    #[test]
    fn test_no_runs_gives_single_crossed_line() {
        assert_eq!(generate(4, &Clue::default()), vec![vec![CrossedOut; 4]]);
        assert_eq!(generate(4, &clue(&[0])), vec![vec![CrossedOut; 4]]);
    }

    #[test]
    fn test_clue_too_long_gives_nothing() {
        assert!(generate(4, &clue(&[2, 2])).is_empty());
    }

    #[test]
    fn test_cache_hits() {
        let mut cache = CandidateCache::default();
        let first = cache.candidates(5, &clue(&[2, 1]));
        let second = cache.candidates(5, &clue(&[2, 1]));
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!((cache.hits, cache.misses, cache.len()), (1, 1, 1));

        cache.candidates(6, &clue(&[2, 1]));
        assert_eq!((cache.hits, cache.misses, cache.len()), (1, 2, 2));
    }

    #[test]
    fn test_disabled_cache_regenerates() {
        let mut cache = CandidateCache::new(false);
        let first = cache.candidates(5, &clue(&[2, 1]));
        let second = cache.candidates(5, &clue(&[2, 1]));
        assert_eq!(first, second);
        assert!(!Rc::ptr_eq(&first, &second));
        assert_eq!((cache.hits, cache.misses, cache.len()), (0, 2, 0));
    }
}
