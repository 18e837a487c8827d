// vim: set ai et ts=4 sw=4 sts=4:
use std::convert::TryFrom;
use std::fs;
use std::path::Path;
use log::debug;
use serde::Deserialize;
use yaml_rust::{Yaml, YamlLoader};

use super::{Puzzle, PuzzleError};
use super::super::grid::{Grid, SquareStatus};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonPuzzle {
    size: usize,
    lines_numbers: Vec<Vec<usize>>,
    columns_numbers: Vec<Vec<usize>>,
    #[serde(default)]
    initial_grid: Option<Vec<Vec<String>>>,
}

impl Puzzle {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Puzzle, PuzzleError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let extension = path.extension()
                            .and_then(|ext| ext.to_str())
                            .map(|ext| ext.to_ascii_lowercase());
        debug!("loading puzzle from {}", path.display());
        match extension.as_deref() {
            Some("json")          => Self::from_json_str(&contents),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&contents),
            _ if contents.trim_start().starts_with('{') => Self::from_json_str(&contents),
            _                     => Self::from_yaml_str(&contents),
        }
    }

    pub fn from_json_str(s: &str) -> Result<Puzzle, PuzzleError> {
        let parsed: JsonPuzzle = serde_json::from_str(s)?;
        let initial_grid = match parsed.initial_grid {
            Some(rows) => {
                let statuses = rows.iter()
                                   .map(|row| row.iter()
                                                 .map(|cell| Self::_parse_json_cell(cell))
                                                 .collect::<Result<Vec<_>, _>>())
                                   .collect::<Result<Vec<_>, _>>()?;
                Some(Self::_grid_from_statuses(&statuses)?)
            }
            None => None,
        };
        Puzzle::new(parsed.size, parsed.lines_numbers, parsed.columns_numbers, initial_grid)
    }

    fn _parse_json_cell(cell: &str) -> Result<SquareStatus, PuzzleError> {
        let mut chars = cell.chars();
        match (chars.next(), chars.next()) {
            (None, _)          => Ok(SquareStatus::Unknown),
            (Some(c), None)    => SquareStatus::try_from(c)
                                      .map_err(|e| PuzzleError::Format(format!("{}: {:?}", e, cell))),
            _                  => Err(PuzzleError::Format(format!("grid cell {:?} is not a single symbol", cell))),
        }
    }

    pub fn from_yaml_str(s: &str) -> Result<Puzzle, PuzzleError> {
        let docs: Vec<Yaml> = YamlLoader::load_from_str(s)?;
        let doc = docs.first()
                      .ok_or_else(|| PuzzleError::Format("empty YAML document".to_string()))?;
        Self::from_yaml(doc)
    }

    pub fn from_yaml(doc: &Yaml) -> Result<Puzzle, PuzzleError> {
        let row_run_lengths = Self::_parse_rows(&doc["rows"], "rows")?;
        let col_run_lengths = Self::_parse_rows(&doc["cols"], "cols")?;
        let initial_grid = match &doc["grid"] {
            Yaml::BadValue | Yaml::Null => None,
            grid                        => Some(Self::_parse_grid(grid)?),
        };
        Puzzle::new(row_run_lengths.len(), row_run_lengths, col_run_lengths, initial_grid)
    }

    fn _parse_rows(input: &Yaml, key: &str) -> Result<Vec<Vec<usize>>, PuzzleError> {
        let list: &Vec<Yaml> = input.as_vec()
                                    .ok_or_else(|| PuzzleError::Format(format!("'{}' must be a list", key)))?;
        list.iter()
            .map(|yaml_val| Self::_parse_row_runs(yaml_val))
            .collect()
    }

    fn _parse_row_runs(input: &Yaml) -> Result<Vec<usize>, PuzzleError> {
        match input {
            Yaml::String(s)  => s.split_whitespace()
                                 .map(|int| int.trim()
                                               .parse::<usize>()
                                               .map_err(|e| PuzzleError::Format(format!("bad run length {:?}: {}", int, e))))
                                 .collect(),
            Yaml::Integer(i) => usize::try_from(*i)
                                    .map(|len| vec![len])
                                    .map_err(|_| PuzzleError::Format(format!("negative run length {}", i))),
            Yaml::Null       => Ok(vec![]),
            _ => Err(PuzzleError::Format(format!("Unexpected data type: {:?}", input))),
        }
    }

    fn _parse_grid(input: &Yaml) -> Result<Grid, PuzzleError> {
        let list = input.as_vec()
                        .ok_or_else(|| PuzzleError::Format("'grid' must be a list of strings".to_string()))?;
        let statuses = list.iter()
                           .map(|line| {
                               let line = line.as_str()
                                              .ok_or_else(|| PuzzleError::Format(format!("grid line {:?} is not a string", line)))?;
                               line.chars()
                                   .map(|c| SquareStatus::try_from(c)
                                                .map_err(|e| PuzzleError::Format(format!("{}: {:?}", e, c))))
                                   .collect::<Result<Vec<_>, _>>()
                           })
                           .collect::<Result<Vec<_>, _>>()?;
        Self::_grid_from_statuses(&statuses)
    }

    fn _grid_from_statuses(statuses: &[Vec<SquareStatus>]) -> Result<Grid, PuzzleError> {
        Grid::from_statuses(statuses)
            .ok_or_else(|| PuzzleError::Format("initial grid is not square".to_string()))
    }
}
