use jumpgrid_core::{Cell, Grid};

use crate::moves::Moves;

/// Minimal search interface — provides move enumeration.
pub trait Pather {
    /// Append cells reachable in one move from `c` into `buf`, in a fixed
    /// order. The caller clears `buf` before calling.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>);
}

/// Pather with weighted (positive-cost) moves.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to the reachable cell `to`. Must be > 0.
    fn cost(&self, from: Cell, to: Cell) -> u32;
}

/// Full best-first pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Cell, to: Cell) -> u32;
}

impl Pather for Grid {
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        Moves::extend(self, c, buf);
    }
}

impl WeightedPather for Grid {
    /// A move costs the number of squares traversed, i.e. the jump
    /// distance of the source cell.
    fn cost(&self, from: Cell, _to: Cell) -> u32 {
        self.value_at(from).unwrap_or(0)
    }
}

impl AstarPather for Grid {
    /// Manhattan distance. A move of jump `j` changes it by at most `j`,
    /// so it never overestimates.
    fn estimate(&self, from: Cell, to: Cell) -> u32 {
        from.manhattan(to)
    }
}
