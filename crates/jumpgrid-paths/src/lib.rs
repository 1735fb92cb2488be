//! Path search over jump-distance grids.
//!
//! Every cell of a [`Grid`](jumpgrid_core::Grid) holds a jump distance: a
//! move from that cell travels exactly that many squares west, north, east
//! or south, and costs as much. This crate finds a path from a start cell to
//! the grid's goal:
//!
//! - **Depth-first** exhaustive backtracking ([`depth_first`]), returning the
//!   first path found in fixed move order
//! - **Best-first** (A\*) search with a Manhattan heuristic ([`best_first`]),
//!   returning a minimum-cost path
//!
//! [`search`] dispatches on a [`Method`]. An empty [`Path`] means the goal is
//! unreachable; it is not an error.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | depth-first |
//! | [`WeightedPather`] : [`Pather`] | path cost |
//! | [`AstarPather`] : [`WeightedPather`] | best-first |
//!
//! [`Grid`](jumpgrid_core::Grid) implements all three.

mod astar;
mod dfs;
mod error;
mod moves;
mod path;
mod retrace;
mod search;
mod traits;

pub use astar::{SearchStats, best_first, best_first_with_stats};
pub use dfs::depth_first;
pub use error::SearchError;
pub use moves::{Direction, Moves, adjacent};
pub use path::Path;
pub use retrace::retrace;
pub use search::{Method, SearchOptions, search, search_str};
pub use traits::{AstarPather, Pather, WeightedPather};
