//! Error types for grid construction and map loading.

use std::fmt;
use std::io;

use crate::geom::Cell;

/// Errors that can occur when building a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedGridError {
    /// The map has no rows, or its first row has no cells.
    Empty,
    /// A row's length differs from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A token is neither `G` nor a non-negative integer.
    InvalidValue { cell: Cell, token: String },
    /// A cell has jump distance zero, which would loop on itself.
    ZeroJump { cell: Cell },
    /// No goal cell was found.
    MissingGoal,
    /// More than one goal cell was found.
    MultipleGoals { first: Cell, second: Cell },
}

impl fmt::Display for MalformedGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidValue { cell, token } => {
                write!(f, "grid: invalid value \u{201c}{token}\u{201d} at {cell}")
            }
            Self::ZeroJump { cell } => write!(f, "grid: zero jump distance at {cell}"),
            Self::MissingGoal => write!(f, "grid: no goal cell"),
            Self::MultipleGoals { first, second } => {
                write!(f, "grid: more than one goal cell ({first} and {second})")
            }
        }
    }
}

impl std::error::Error for MalformedGridError {}

/// Errors from [`Grid::load`](crate::Grid::load).
#[derive(Debug)]
pub enum LoadError {
    /// The map file could not be read.
    Io(io::Error),
    /// The file contents are not a valid grid.
    Malformed(MalformedGridError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read map: {e}"),
            Self::Malformed(e) => write!(f, "malformed map: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Malformed(e) => Some(e),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<MalformedGridError> for LoadError {
    fn from(e: MalformedGridError) -> Self {
        Self::Malformed(e)
    }
}
