//! Property tests against brute-force references on small random grids.

use std::collections::{HashSet, VecDeque};

use jumpgrid_core::{Cell, Grid, Tile};
use jumpgrid_paths::{Method, adjacent, search};
use proptest::prelude::*;

/// A random grid of up to 4×4 with jumps 1..=3, plus a start cell.
fn arb_case() -> impl Strategy<Value = (Grid, Cell)> {
    (1usize..=4, 1usize..=4).prop_flat_map(|(h, w)| {
        (
            prop::collection::vec(1u32..=3, h * w),
            0..h * w,
            0..h * w,
        )
            .prop_map(move |(jumps, goal, start)| {
                let rows = (0..h)
                    .map(|y| {
                        (0..w)
                            .map(|x| {
                                let i = y * w + x;
                                if i == goal {
                                    Tile::Goal
                                } else {
                                    Tile::Jump(jumps[i])
                                }
                            })
                            .collect::<Vec<Tile>>()
                    })
                    .collect();
                let grid = Grid::from_rows(rows).unwrap();
                let start = Cell::new((start / w) as i32, (start % w) as i32);
                (grid, start)
            })
    })
}

fn reachable(grid: &Grid, start: Cell) -> bool {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(c) = queue.pop_front() {
        if grid.is_goal(c) {
            return true;
        }
        for n in adjacent(grid, c) {
            if seen.insert(n) {
                queue.push_back(n);
            }
        }
    }
    false
}

/// Minimum jump cost to the goal by relaxing every move until nothing
/// changes.
fn min_cost(grid: &Grid, start: Cell) -> Option<u64> {
    let index = |c: Cell| (c.row * grid.width() + c.col) as usize;
    let mut dist: Vec<Option<u64>> = vec![None; grid.len()];
    dist[index(start)] = Some(0);
    loop {
        let mut changed = false;
        for (c, tile) in grid.cells() {
            let Some(d) = dist[index(c)] else {
                continue;
            };
            for n in adjacent(grid, c) {
                let nd = d + u64::from(tile.jump());
                if dist[index(n)].is_none_or(|old| nd < old) {
                    dist[index(n)] = Some(nd);
                    changed = true;
                }
            }
        }
        if !changed {
            return dist[index(grid.goal())];
        }
    }
}

proptest! {
    #[test]
    fn depth_first_finds_a_valid_path_iff_reachable((grid, start) in arb_case()) {
        let p = search(&grid, start, Method::DepthFirst).unwrap();
        if reachable(&grid, start) {
            prop_assert!(p.is_valid(&grid));
            prop_assert_eq!(p.first(), Some(start));
        } else {
            prop_assert!(p.is_empty());
        }
    }

    #[test]
    fn best_first_has_minimum_cost((grid, start) in arb_case()) {
        let p = search(&grid, start, Method::BestFirst).unwrap();
        match min_cost(&grid, start) {
            Some(cost) => {
                prop_assert!(p.is_valid(&grid));
                prop_assert_eq!(p.first(), Some(start));
                prop_assert_eq!(p.cost(&grid), cost);
            }
            None => prop_assert!(p.is_empty()),
        }
    }

    #[test]
    fn best_first_never_costs_more_than_depth_first((grid, start) in arb_case()) {
        let best = search(&grid, start, Method::BestFirst).unwrap();
        let dfs = search(&grid, start, Method::DepthFirst).unwrap();
        prop_assert_eq!(best.is_empty(), dfs.is_empty());
        prop_assert!(best.cost(&grid) <= dfs.cost(&grid));
    }

    #[test]
    fn repeated_searches_are_identical((grid, start) in arb_case()) {
        for m in Method::ALL {
            let a = search(&grid, start, m).unwrap();
            let b = search(&grid, start, m).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
