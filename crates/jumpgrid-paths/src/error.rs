//! Error types for search operations.

use std::fmt;

use jumpgrid_core::Cell;

/// Errors arising from a search call.
///
/// "No path exists" is not an error; it is reported as an empty
/// [`Path`](crate::Path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The method name is not a known search method.
    InvalidMethod(String),
    /// The start cell lies outside the grid.
    StartOutOfBounds(Cell),
    /// Path reconstruction found no predecessor chain for this cell.
    ///
    /// Indicates a broken engine invariant, not an unreachable goal.
    UnreachableGoal(Cell),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMethod(name) => {
                write!(f, "invalid search method \u{201c}{name}\u{201d}")
            }
            Self::StartOutOfBounds(c) => write!(f, "start cell {c} is outside the grid"),
            Self::UnreachableGoal(c) => {
                write!(f, "no predecessor chain leads to {c}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
