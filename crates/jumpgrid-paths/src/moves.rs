use jumpgrid_core::{Cell, Grid};

/// A cardinal jump direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    West,
    North,
    East,
    South,
}

impl Direction {
    /// Expansion order used by every search. Fixed so results are
    /// reproducible.
    pub const ORDER: [Direction; 4] = [
        Direction::West,
        Direction::North,
        Direction::East,
        Direction::South,
    ];

    /// Unit `(drow, dcol)` step.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::West => (0, -1),
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
        }
    }
}

/// Cached move computation helper.
///
/// Reuses one buffer across calls, the way search loops expand many cells.
pub struct Moves {
    buf: Vec<Cell>,
}

impl Default for Moves {
    fn default() -> Self {
        Self::new()
    }
}

impl Moves {
    /// Create a new `Moves` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Cells reachable from `c` by one jump, in west, north, east, south
    /// order.
    pub fn targets(&mut self, grid: &Grid, c: Cell) -> &[Cell] {
        self.buf.clear();
        Self::extend(grid, c, &mut self.buf);
        &self.buf
    }

    /// Append the in-bounds jump targets of `c` to `buf`.
    ///
    /// Cells outside the grid and the goal (jump 0) produce nothing.
    pub(crate) fn extend(grid: &Grid, c: Cell, buf: &mut Vec<Cell>) {
        let jump = match grid.value_at(c) {
            Some(j) if j > 0 => j,
            _ => return,
        };
        // Jumps longer than both grid dimensions always leave it.
        if jump > grid.width().max(grid.height()) as u32 {
            return;
        }
        let jump = jump as i32;
        for dir in Direction::ORDER {
            let (dr, dc) = dir.delta();
            let n = c.shift(dr * jump, dc * jump);
            if grid.contains(n) {
                buf.push(n);
            }
        }
    }
}

/// Cells reachable from `c` by one jump, in west, north, east, south order.
pub fn adjacent(grid: &Grid, c: Cell) -> Vec<Cell> {
    let mut buf = Vec::with_capacity(4);
    Moves::extend(grid, c, &mut buf);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "\
1,1,1,1
1,2,1,1
1,1,1,1
1,1,1,G
";

    #[test]
    fn interior_has_four_moves_in_fixed_order() {
        let g: Grid = MAZE.parse().unwrap();
        assert_eq!(
            adjacent(&g, Cell::new(2, 2)),
            vec![
                Cell::new(2, 1),
                Cell::new(1, 2),
                Cell::new(2, 3),
                Cell::new(3, 2)
            ]
        );
    }

    #[test]
    fn corner_discards_out_of_bounds() {
        let g: Grid = MAZE.parse().unwrap();
        assert_eq!(
            adjacent(&g, Cell::ORIGIN),
            vec![Cell::new(0, 1), Cell::new(1, 0)]
        );
    }

    #[test]
    fn jump_travels_its_distance() {
        let g: Grid = MAZE.parse().unwrap();
        assert_eq!(
            adjacent(&g, Cell::new(1, 1)),
            vec![Cell::new(1, 3), Cell::new(3, 1)]
        );
    }

    #[test]
    fn overshooting_jumps_yield_nothing() {
        let g: Grid = "9,G".parse().unwrap();
        assert!(adjacent(&g, Cell::ORIGIN).is_empty());
    }

    #[test]
    fn goal_and_outside_yield_nothing() {
        let g: Grid = MAZE.parse().unwrap();
        assert!(adjacent(&g, g.goal()).is_empty());
        assert!(adjacent(&g, Cell::new(-1, 0)).is_empty());
        assert!(adjacent(&g, Cell::new(0, 4)).is_empty());
    }

    #[test]
    fn helper_reuses_buffer() {
        let g: Grid = MAZE.parse().unwrap();
        let mut moves = Moves::new();
        assert_eq!(moves.targets(&g, Cell::ORIGIN).len(), 2);
        assert_eq!(moves.targets(&g, Cell::new(2, 2)).len(), 4);
    }

    #[test]
    fn huge_jump_does_not_overflow() {
        let g = Grid::from_rows(vec![vec![
            jumpgrid_core::Tile::Jump(u32::MAX),
            jumpgrid_core::Tile::Goal,
        ]])
        .unwrap();
        assert!(adjacent(&g, Cell::ORIGIN).is_empty());
    }
}
