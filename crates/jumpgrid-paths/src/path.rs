use std::fmt;

use jumpgrid_core::{Cell, Grid};

use crate::moves::adjacent;

/// An ordered sequence of cells from start to goal, inclusive.
///
/// An empty path means no path exists; a one-cell path means the start is
/// already the goal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path(Vec<Cell>);

impl Path {
    /// The "no path" sentinel.
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<Cell> {
        self.0.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<Cell> {
        self.0.last().copied()
    }

    /// Number of moves (one fewer than the number of cells).
    #[inline]
    pub fn moves(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Total jump cost: the sum of jump distances of every cell but the
    /// last.
    pub fn cost(&self, grid: &Grid) -> u64 {
        let Some((_, init)) = self.0.split_last() else {
            return 0;
        };
        init.iter()
            .map(|&c| u64::from(grid.value_at(c).unwrap_or(0)))
            .sum()
    }

    /// Whether each step is a legal jump on `grid` and the path ends on the
    /// goal. The empty path is not valid.
    pub fn is_valid(&self, grid: &Grid) -> bool {
        let Some(last) = self.last() else {
            return false;
        };
        grid.contains(self.0[0])
            && grid.is_goal(last)
            && self
                .0
                .windows(2)
                .all(|w| adjacent(grid, w[0]).contains(&w[1]))
    }

    pub fn into_inner(self) -> Vec<Cell> {
        self.0
    }
}

impl From<Vec<Cell>> for Path {
    fn from(cells: Vec<Cell>) -> Self {
        Self(cells)
    }
}

impl FromIterator<Cell> for Path {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Path {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Path {
    /// Cells joined by `->`, e.g. `(0, 0)->(0, 1)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("->")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
