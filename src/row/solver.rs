// vim: set ai et ts=4 sts=4 sw=4:
use std::ops::Range;

use super::{Line, generate};
use super::super::clue::Clue;
use super::super::grid::SquareStatus::{self, CrossedOut, FilledIn, Unknown};

pub fn ranges_of<P>(line: &[SquareStatus], pred: P) -> Vec<Range<usize>>
    where P: Fn(SquareStatus) -> bool
{
    // given a predicate on a square, returns a set of mutually exclusive ranges within this line
    // for which the predicate holds for all squares in that range.
    let mut result = Vec::<Range<usize>>::new();
    let mut x: usize = 0;
    while x < line.len() {
        // skip past squares for which the predicate does not hold
        while x < line.len() && !pred(line[x]) {
            x += 1;
        }
        if x >= line.len() { break; }

        // skip past squares for which the predicate does hold
        let range_start = x;
        x += 1; // we already tested the predicate on x at the end of the previous loop
        while x < line.len() && pred(line[x]) {
            x += 1;
        }
        result.push(range_start..x);

        x += 1;
    }
    result
}

pub fn run_lengths(line: &[SquareStatus]) -> Vec<usize> {
    ranges_of(line, |s| s == FilledIn).iter()
                                      .map(|range| range.len())
                                      .collect()
}

pub fn combine<L: AsRef<[SquareStatus]>>(length: usize, candidates: &[L]) -> Line {
    (0..length).map(|i| {
                   if candidates.is_empty() {
                       Unknown
                   } else if candidates.iter().all(|cand| cand.as_ref()[i] == FilledIn) {
                       FilledIn
                   } else if candidates.iter().all(|cand| cand.as_ref()[i] != FilledIn) {
                       CrossedOut
                   } else {
                       Unknown
                   }
               })
               .collect()
}

pub fn is_compatible(current: &[SquareStatus], candidate: &[SquareStatus]) -> bool {
    current.iter()
           .zip(candidate)
           .all(|(&cur, &cand)| match cur {
               CrossedOut => cand != FilledIn,
               FilledIn   => cand == FilledIn,
               Unknown    => true,
           })
}

// None when no candidate agrees with the current line
pub fn filter_and_combine_with(current: &[SquareStatus], candidates: &[Line]) -> Option<Line> {
    let surviving = candidates.iter()
                              .filter(|cand| is_compatible(current, cand))
                              .collect::<Vec<&Line>>();
    if surviving.is_empty() {
        return None;
    }
    Some(combine(current.len(), &surviving))
}

pub fn filter_and_combine(current: &[SquareStatus], clue: &Clue) -> Option<Line> {
    filter_and_combine_with(current, &generate(current.len(), clue))
}

pub fn fill_leading_block(line: &[SquareStatus], clue: &Clue) -> Line {
    // a filled first square anchors the first run at the start of the line
    let mut result = line.to_vec();
    if let Some(first_run) = clue.first() {
        if line.first() == Some(&FilledIn) {
            for square in result.iter_mut().take(first_run) {
                *square = FilledIn;
            }
            if first_run < result.len() {
                result[first_run] = CrossedOut;
            }
        }
    }
    result
}

pub fn all_groups_formed(line: &[SquareStatus], clue: &Clue) -> bool {
    // every run of filled squares seen so far must match the next clue run, in order;
    // a run still open at the end of the line must match the last one
    let mut remaining = clue.runs();
    let mut group_len: usize = 0;

    for &status in line {
        if status == FilledIn {
            group_len += 1;
            continue;
        }
        if group_len > 0 {
            match remaining.split_first() {
                Some((&run, rest)) if run == group_len => remaining = rest,
                _ => return false,
            }
            group_len = 0;
        }
    }

    match remaining {
        []      => group_len == 0,
        [last]  => *last == group_len,
        _       => false,
    }
}

fn cross_unfilled(line: &[SquareStatus]) -> Line {
    line.iter()
        .map(|&s| if s == FilledIn { FilledIn } else { CrossedOut })
        .collect()
}

pub fn close_line(line: &[SquareStatus], clue: &Clue) -> Line {
    let length = line.len();

    if clue.is_empty() {
        return vec![CrossedOut; length];
    }
    if clue.len() == 1 && clue.first() == Some(length) {
        return vec![FilledIn; length];
    }
    if clue.min_span() == length {
        return cross_unfilled(&combine(length, &generate(length, clue)));
    }
    if all_groups_formed(line, clue) {
        return cross_unfilled(line);
    }
    line.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clue(runs: &[usize]) -> Clue {
        Clue::new(runs.to_vec()).unwrap()
    }

    // '#' filled, 'x' crossed, '.' unknown
    fn line(s: &str) -> Line {
        s.chars()
         .map(|c| match c {
             '#' => FilledIn,
             'x' => CrossedOut,
             _   => Unknown,
         })
         .collect()
    }

    #[test]
    fn test_run_lengths() {
        assert_eq!(run_lengths(&line("##x.#x###")), vec![2, 1, 3]);
        assert_eq!(run_lengths(&line("x..x")), Vec::<usize>::new());
        assert_eq!(ranges_of(&line("#.##"), |s| s == FilledIn), vec![0..1, 2..4]);
    }

    #[test]
    fn test_combine_full_run() {
        assert_eq!(combine(5, &generate(5, &clue(&[5]))), line("#####"));
    }

    #[test]
    fn test_combine_no_runs() {
        assert_eq!(combine(5, &generate(5, &clue(&[0]))), line("xxxxx"));
    }

    #[test]
    fn test_combine_exact_fit() {
        assert_eq!(combine(5, &generate(5, &clue(&[2, 2]))), line("##x##"));
    }

    #[test]
    fn test_combine_overlap() {
        // 4 in 6 squares always covers the middle two
        assert_eq!(combine(6, &generate(6, &clue(&[4]))), line("..##.."));
    }

    #[test]
    fn test_combine_empty_set_is_unknown() {
        assert_eq!(combine::<Line>(3, &[]), line("..."));
    }

    #[test]
    fn test_filter_keeps_known_square_only() {
        // offsets 0, 1 and 2 all cover index 2 and disagree everywhere else
        assert_eq!(filter_and_combine(&line("..#.."), &clue(&[3])), Some(line("..#..")));
    }

    #[test]
    fn test_filter_uses_crossed_squares() {
        assert_eq!(filter_and_combine(&line(".x..."), &clue(&[3])), Some(line("xx###")));
        assert_eq!(filter_and_combine(&line("#...."), &clue(&[2, 1])), Some(line("##x..")));
    }

    #[test]
    fn test_filter_detects_contradiction() {
        assert_eq!(filter_and_combine(&line("#x#.."), &clue(&[3])), None);
        assert_eq!(filter_and_combine(&line("..#.."), &Clue::default()), None);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let cases = [("..#.......", vec![3, 2]), ("#...x.....", vec![2, 1, 1]), ("..........", vec![7])];
        for (current, runs) in cases.iter() {
            let once = filter_and_combine(&line(current), &clue(runs)).unwrap();
            // filtering only adds information, so the combined line keeps what we knew
            let merged = line(current).iter()
                                      .zip(&once)
                                      .map(|(&cur, &new)| if new.is_known() { new } else { cur })
                                      .collect::<Line>();
            let twice = filter_and_combine(&merged, &clue(runs)).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_filter_leaves_shared_candidates_untouched() {
        let mut cache = super::super::CandidateCache::new(true);
        let cands = cache.candidates(5, &clue(&[2, 1]));
        let before = (*cands).clone();
        assert_eq!(filter_and_combine_with(&line("#...."), &cands), Some(line("##x..")));
        assert_eq!(filter_and_combine_with(&line("x#..."), &cands), Some(line("x##x#")));
        assert_eq!(*cands, before);
        assert_eq!(cands.len(), 3);
    }

    #[test]
    fn test_fill_leading_block() {
        assert_eq!(fill_leading_block(&line("#...."), &clue(&[3, 1])), line("###x."));
        assert_eq!(fill_leading_block(&line(".#..."), &clue(&[3, 1])), line(".#..."));
        // no room for the gap after a run filling the whole line
        assert_eq!(fill_leading_block(&line("#.."), &clue(&[3])), line("###"));
        assert_eq!(fill_leading_block(&line("#.."), &Clue::default()), line("#.."));
    }

    #[test]
    fn test_fill_leading_block_reversed() {
        let clue = clue(&[1, 2]);
        let reversed = line("....#").into_iter().rev().collect::<Line>();
        let filled = fill_leading_block(&reversed, &clue.reversed());
        assert_eq!(filled.into_iter().rev().collect::<Line>(), line("..x##"));
    }

    #[test]
    fn test_all_groups_formed() {
        assert!(all_groups_formed(&line("#.#.."), &clue(&[1, 1])));
        assert!(all_groups_formed(&line("..#.##"), &clue(&[1, 2])));
        assert!(all_groups_formed(&line("....."), &Clue::default()));
        assert!(!all_groups_formed(&line("#...."), &clue(&[2])));
        assert!(!all_groups_formed(&line("#.#.."), &clue(&[1])));
        assert!(!all_groups_formed(&line("#...#"), &clue(&[1])));
        assert!(!all_groups_formed(&line("#...."), &clue(&[1, 1])));
    }

    #[test]
    fn test_close_line_degenerate() {
        assert_eq!(close_line(&line("....."), &clue(&[0])), line("xxxxx"));
        assert_eq!(close_line(&line("....."), &clue(&[5])), line("#####"));
    }

    #[test]
    fn test_close_line_exact_fit() {
        assert_eq!(close_line(&line("....."), &clue(&[2, 2])), line("##x##"));
        assert_eq!(close_line(&line("......."), &clue(&[1, 1, 3])), line("#x#x###"));
    }

    #[test]
    fn test_close_line_groups_formed() {
        assert_eq!(close_line(&line(".#..#."), &clue(&[1, 1])), line("x#xx#x"));
        assert_eq!(close_line(&line(".#...."), &clue(&[2])), line(".#...."));
    }
}
