//! **jumpgrid-core** — jump-distance grid model (core types).
//!
//! This crate provides the foundational types shared by the *jumpgrid*
//! search engines: the [`Cell`] coordinate, the [`Tile`] square content,
//! and the immutable, validated [`Grid`]. It also owns map loading
//! ([`Grid::load`], `str::parse`) and textual rendering (`Display`).

pub mod error;
pub mod geom;
pub mod grid;
pub mod parse;

pub use error::{LoadError, MalformedGridError};
pub use geom::Cell;
pub use grid::{Grid, Tile};
pub use parse::parse_cells;
