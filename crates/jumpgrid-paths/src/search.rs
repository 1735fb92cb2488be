//! Search entry point and options.

use std::fmt;
use std::str::FromStr;

use jumpgrid_core::{Cell, Grid};

use crate::astar::best_first;
use crate::dfs::depth_first;
use crate::error::SearchError;
use crate::path::Path;

/// Search strategy.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Method {
    /// Exhaustive backtracking; returns the first path found.
    DepthFirst,
    /// A*-style search; returns a minimum-cost path.
    #[default]
    BestFirst,
}

impl Method {
    pub const ALL: [Method; 2] = [Method::DepthFirst, Method::BestFirst];

    /// Canonical short name.
    pub const fn name(self) -> &'static str {
        match self {
            Method::DepthFirst => "dfs",
            Method::BestFirst => "astar",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = SearchError;

    /// Accepts `dfs`, `depth-first`, `astar`, `a*` and `best-first`,
    /// ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" | "depth_first" => Ok(Method::DepthFirst),
            "astar" | "a*" | "best-first" | "best_first" => Ok(Method::BestFirst),
            _ => Err(SearchError::InvalidMethod(s.to_string())),
        }
    }
}

/// Find a path from `start` to the grid's goal.
///
/// Returns an empty path if the goal is unreachable, and a one-cell path if
/// `start` is the goal.
pub fn search(grid: &Grid, start: Cell, method: Method) -> Result<Path, SearchError> {
    if !grid.contains(start) {
        return Err(SearchError::StartOutOfBounds(start));
    }
    log::debug!("search: {method} from {start} to {}", grid.goal());
    match method {
        Method::DepthFirst => Ok(depth_first(grid, start, grid.goal())),
        Method::BestFirst => best_first(grid, start, grid.goal()),
    }
}

/// [`search`] with the method given by name. An unknown name fails before
/// any search work is done.
pub fn search_str(grid: &Grid, start: Cell, method: &str) -> Result<Path, SearchError> {
    search(grid, start, method.parse()?)
}

/// Search configuration: which method, and where to start.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    pub method: Method,
    pub start: Cell,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            method: Method::default(),
            start: Cell::ORIGIN,
        }
    }
}

impl SearchOptions {
    /// Run the configured search on `grid`.
    pub fn run(&self, grid: &Grid) -> Result<Path, SearchError> {
        search(grid, self.start, self.method)
    }
}
