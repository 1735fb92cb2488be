//! The [`Grid`] type, an immutable 2D grid of [`Tile`]s with one goal.
//!
//! A `Grid` is validated once at construction and never mutated afterwards,
//! so a single grid can be shared by reference between concurrent searches.

use std::fmt;

use crate::error::MalformedGridError;
use crate::geom::Cell;

// ---------------------------------------------------------------------------
// Tile
// ---------------------------------------------------------------------------

/// The content of one grid square.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// A square whose moves travel exactly this many squares.
    Jump(u32),
    /// The goal square. It has no outgoing moves.
    Goal,
}

impl Tile {
    /// Jump distance of this tile; the goal reports 0.
    #[inline]
    pub const fn jump(self) -> u32 {
        match self {
            Tile::Jump(j) => j,
            Tile::Goal => 0,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Jump(j) => write!(f, "{j}"),
            Tile::Goal => f.write_str("G"),
        }
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular grid of jump distances with exactly one goal cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<Tile>,
    width: i32,
    height: i32,
    goal: Cell,
}

impl Grid {
    /// Build a grid from rows of tiles.
    ///
    /// Fails if there are no cells, if rows have unequal length, if any
    /// jump distance is zero, or if there is not exactly one goal.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, MalformedGridError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(MalformedGridError::Empty);
        }
        let height = rows.len();

        let mut tiles = Vec::with_capacity(width * height);
        let mut goal: Option<Cell> = None;
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(MalformedGridError::RaggedRow {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, tile) in row.into_iter().enumerate() {
                let cell = Cell::new(y as i32, x as i32);
                match tile {
                    Tile::Jump(0) => return Err(MalformedGridError::ZeroJump { cell }),
                    Tile::Jump(_) => {}
                    Tile::Goal => {
                        if let Some(first) = goal {
                            return Err(MalformedGridError::MultipleGoals {
                                first,
                                second: cell,
                            });
                        }
                        goal = Some(cell);
                    }
                }
                tiles.push(tile);
            }
        }

        let goal = goal.ok_or(MalformedGridError::MissingGoal)?;
        Ok(Self {
            tiles,
            width: width as i32,
            height: height as i32,
            goal,
        })
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always `false`: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        c.row >= 0 && c.col >= 0 && c.row < self.height && c.col < self.width
    }

    #[inline]
    fn index(&self, c: Cell) -> Option<usize> {
        if self.contains(c) {
            Some((c.row * self.width + c.col) as usize)
        } else {
            None
        }
    }

    /// The tile at `c`, or `None` outside the grid.
    #[inline]
    pub fn tile(&self, c: Cell) -> Option<Tile> {
        self.index(c).map(|i| self.tiles[i])
    }

    /// Jump distance at `c` (0 for the goal), or `None` outside the grid.
    #[inline]
    pub fn value_at(&self, c: Cell) -> Option<u32> {
        self.tile(c).map(Tile::jump)
    }

    /// Whether `c` is the goal cell.
    #[inline]
    pub fn is_goal(&self, c: Cell) -> bool {
        c == self.goal
    }

    /// The goal cell.
    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Iterate over `(cell, tile)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Tile)> + '_ {
        let w = self.width;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, &t)| (Cell::new(i as i32 / w, i as i32 % w), t))
    }

    /// Iterate over the rows as tile slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.width as usize)
    }
}

impl fmt::Display for Grid {
    /// One line per row, e.g. `  | 1 | 2 | G |  `.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            f.write_str(" ")?;
            for t in row {
                write!(f, " | {t}")?;
            }
            f.write_str(" |  ")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn j(v: u32) -> Tile {
        Tile::Jump(v)
    }

    fn small() -> Grid {
        Grid::from_rows(vec![vec![j(1), j(2)], vec![j(3), Tile::Goal]]).unwrap()
    }

    #[test]
    fn dimensions_and_lookup() {
        let g = small();
        assert_eq!(g.width(), 2);
        assert_eq!(g.height(), 2);
        assert_eq!(g.len(), 4);
        assert_eq!(g.value_at(Cell::new(0, 1)), Some(2));
        assert_eq!(g.value_at(Cell::new(1, 0)), Some(3));
        assert_eq!(g.value_at(Cell::new(1, 1)), Some(0));
        assert_eq!(g.value_at(Cell::new(2, 0)), None);
        assert_eq!(g.value_at(Cell::new(0, -1)), None);
        assert_eq!(g.goal(), Cell::new(1, 1));
        assert!(g.is_goal(Cell::new(1, 1)));
        assert!(!g.is_goal(Cell::ORIGIN));
    }

    #[test]
    fn cells_are_row_major() {
        let g = small();
        let cells: Vec<_> = g.cells().map(|(c, _)| c).collect();
        assert_eq!(
            cells,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 0),
                Cell::new(1, 1)
            ]
        );
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(Grid::from_rows(vec![]), Err(MalformedGridError::Empty));
        assert_eq!(Grid::from_rows(vec![vec![]]), Err(MalformedGridError::Empty));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = Grid::from_rows(vec![vec![j(1), j(1)], vec![Tile::Goal]]).unwrap_err();
        assert_eq!(
            err,
            MalformedGridError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn rejects_zero_jump() {
        let err = Grid::from_rows(vec![vec![j(1), j(0), Tile::Goal]]).unwrap_err();
        assert_eq!(
            err,
            MalformedGridError::ZeroJump {
                cell: Cell::new(0, 1)
            }
        );
    }

    #[test]
    fn requires_exactly_one_goal() {
        assert_eq!(
            Grid::from_rows(vec![vec![j(1), j(1)]]),
            Err(MalformedGridError::MissingGoal)
        );
        assert_eq!(
            Grid::from_rows(vec![vec![Tile::Goal, j(1)], vec![j(1), Tile::Goal]]),
            Err(MalformedGridError::MultipleGoals {
                first: Cell::new(0, 0),
                second: Cell::new(1, 1)
            })
        );
    }

    #[test]
    fn display_renders_rows() {
        assert_eq!(small().to_string(), "  | 1 | 2 |  \n  | 3 | G |  ");
    }

    #[test]
    fn grid_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Grid>();
    }
}
