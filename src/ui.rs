// vim: set ai et ts=4 sts=4 sw=4:
use ansi_term::{ANSIString, Colour, Style};

use super::grid::Grid;
use super::puzzle::Puzzle;
use super::puzzle::validity::line_matches;
use super::row::Row;
use super::util::{ralign, lalign_colored, ralign_joined_coloreds, Orientation};

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub subdivision: Option<usize>, // draw separator lines every N squares
    pub show_crosses: bool,
    pub emit_color: bool,
}
impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            subdivision: Some(5),
            show_crosses: true,
            emit_color: false,
        }
    }
}

fn run_strings(row: &Row, grid: &Grid) -> Vec<ANSIString<'static>> {
    // dim the clue of a line that is fully known and correct
    let line = row.read(grid, Orientation::Forward);
    let completed = line.iter().all(|s| s.is_known()) && line_matches(&line, &row.clue);
    let style = match completed {
        true  => Style::new().fg(Colour::Fixed(241)),
        false => Style::default(),
    };
    if row.clue.is_empty() {
        return vec![style.paint("0")];
    }
    row.clue.runs()
            .iter()
            .map(|len| style.paint(len.to_string()))
            .collect()
}

fn _fmt_line(prefix: &str,
             left_delim: &str,
             right_delim: &str,
             columnwise_separator: &str,
             subdivision: Option<usize>,
             content_parts: &[String])
    -> String
{
    let mut result = format!("{} {}", prefix, left_delim);
    for (idx, s) in content_parts.iter().enumerate() {
        result.push_str(s);
        if let Some(subdiv) = subdivision {
            if ((idx+1) % subdiv == 0) && (idx < content_parts.len()-1) {
                result.push_str(columnwise_separator);
            }
        }
    }
    result.push_str(&format!("{}\n", right_delim));
    result
}

fn _fmt_header(col_runs: &[Vec<ANSIString<'static>>],
               line_idx: usize,
               prefix_len: usize,
               options: &RenderOptions)
    -> String
{
    let content_parts = col_runs.iter()
                                .map(|runs| {
                                    if line_idx < runs.len() {
                                        format!(" {}", lalign_colored(&runs[runs.len()-1-line_idx], 2, options.emit_color))
                                    } else {
                                        format!(" {:-2}", " ")
                                    }
                                })
                                .collect::<Vec<_>>();
    _fmt_line(&ralign("", prefix_len), " ", " ", " ", options.subdivision, &content_parts)
}

pub fn render(puzzle: &Puzzle, grid: &Grid, options: &RenderOptions) -> String {
    // subdividing every 0 squares means not subdividing at all
    let subdivision = options.subdivision.filter(|&n| n > 0);
    let options = &RenderOptions { subdivision, ..options.clone() };
    let size = puzzle.size();

    let row_prefixes = puzzle.rows.iter()
                                  .map(|row| run_strings(row, grid))
                                  .collect::<Vec<_>>();
    let col_runs = puzzle.cols.iter()
                              .map(|col| run_strings(col, grid))
                              .collect::<Vec<_>>();

    let prefix_len = row_prefixes.iter()
                                 .map(|parts| parts.iter()
                                                   .fold(0, |sum, ansi_str| sum + ansi_str.len() + 1) // note: .len() returns length WITHOUT ansi color escape sequences
                                              -1) // minus one at the end to match the length of a join(" ")
                                 .max()
                                 .unwrap_or(0);
    let max_col_runs = col_runs.iter()
                               .map(|runs| runs.len())
                               .max()
                               .unwrap_or(0);
    let horizontal_edge = |piece: &str| (0..size).map(|_| piece.repeat(3)).collect::<Vec<_>>();

    let mut result = String::new();
    for i in (0..max_col_runs).rev() {
        result.push_str(&_fmt_header(&col_runs, i, prefix_len, options));
    }

    // top board line
    result.push_str(&_fmt_line(&ralign("", prefix_len),
                               "\u{2554}", "\u{2557}", "\u{2564}",
                               subdivision,
                               &horizontal_edge("\u{2550}")));

    for y in 0..size {
        // board content line
        let cells = (0..size).map(|x| format!(" {} ", grid.get_square(x, y).fmt_visual(options.show_crosses)))
                             .collect::<Vec<_>>();
        result.push_str(&_fmt_line(&ralign_joined_coloreds(&row_prefixes[y], prefix_len, options.emit_color),
                                   "\u{2551}", "\u{2551}", "\u{2502}",
                                   subdivision,
                                   &cells));

        // horizontal subdivisor line
        if let Some(subdiv) = subdivision {
            if ((y+1) % subdiv == 0) && (y != size-1) {
                result.push_str(&_fmt_line(&ralign("", prefix_len),
                                           "\u{255F}", "\u{2562}", "\u{253C}",
                                           subdivision,
                                           &horizontal_edge("\u{2500}")));
            }
        }
    }
    // bottom board line
    result.push_str(&_fmt_line(&ralign("", prefix_len),
                               "\u{255A}", "\u{255D}", "\u{2567}",
                               subdivision,
                               &horizontal_edge("\u{2550}")));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::grid::SquareStatus::*;

    fn small() -> (Puzzle, Grid) {
        let puzzle = Puzzle::new(2, vec![vec![1], vec![2]], vec![vec![2], vec![1]], None).unwrap();
        let grid = Grid::from_statuses(&[vec![FilledIn, CrossedOut], vec![FilledIn, FilledIn]]).unwrap();
        (puzzle, grid)
    }

    #[test]
    fn test_render_plain() {
        let (puzzle, grid) = small();
        let options = RenderOptions { subdivision: None, ..RenderOptions::default() };
        let out = render(&puzzle, &grid, &options);
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].trim_end(), "    2  1");
        assert_eq!(lines[1], "  \u{2554}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2557}");
        assert_eq!(lines[2], "1 \u{2551} \u{25A0}  x \u{2551}");
        assert_eq!(lines[3], "2 \u{2551} \u{25A0}  \u{25A0} \u{2551}");
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn test_render_subdivided_without_crosses() {
        let (puzzle, grid) = small();
        let options = RenderOptions { subdivision: Some(1), show_crosses: false, emit_color: false };
        let out = render(&puzzle, &grid, &options);
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[2], "1 \u{2551} \u{25A0} \u{2502}   \u{2551}");
        assert_eq!(lines[3], "  \u{255F}\u{2500}\u{2500}\u{2500}\u{253C}\u{2500}\u{2500}\u{2500}\u{2562}");
    }

    #[test]
    fn test_render_dims_completed_clues_in_color() {
        let (puzzle, grid) = small();
        let options = RenderOptions { emit_color: true, ..RenderOptions::default() };
        assert!(render(&puzzle, &grid, &options).contains('\u{1b}'));

        let unknown = Grid::new(2);
        assert!(!render(&puzzle, &unknown, &options).contains('\u{1b}'));
    }
}
