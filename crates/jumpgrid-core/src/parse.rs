//! Textual map loading.
//!
//! A map is a comma-separated table, one row per line. Each token is either
//! `G` (the goal) or a non-negative integer jump distance. Surrounding
//! whitespace is ignored, as are blank lines.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{LoadError, MalformedGridError};
use crate::geom::Cell;
use crate::grid::{Grid, Tile};

fn parse_tile(token: &str, cell: Cell) -> Result<Tile, MalformedGridError> {
    if token == "G" {
        return Ok(Tile::Goal);
    }
    token
        .parse::<u32>()
        .map(Tile::Jump)
        .map_err(|_| MalformedGridError::InvalidValue {
            cell,
            token: token.to_string(),
        })
}

impl FromStr for Grid {
    type Err = MalformedGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(y, line)| {
                line.split(',')
                    .enumerate()
                    .map(|(x, tok)| parse_tile(tok.trim(), Cell::new(y as i32, x as i32)))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Grid::from_rows(rows)
    }
}

impl Grid {
    /// Read and parse a map file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let text = fs::read_to_string(path)?;
        Ok(text.parse()?)
    }
}

/// Parse a list of cells, one `row,col` pair per line.
///
/// Used for expected-solution files. Blank lines are skipped.
pub fn parse_cells(s: &str) -> Result<Vec<Cell>, MalformedGridError> {
    s.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(i, line)| {
            let invalid = || MalformedGridError::InvalidValue {
                cell: Cell::new(i as i32, 0),
                token: line.to_string(),
            };
            let (row, col) = line.split_once(',').ok_or_else(invalid)?;
            let row = row.trim().parse().map_err(|_| invalid())?;
            let col = col.trim().parse().map_err(|_| invalid())?;
            Ok(Cell::new(row, col))
        })
        .collect()
}
