use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use jumpgrid_core::Cell;
use log::{debug, trace};

use crate::error::SearchError;
use crate::path::Path;
use crate::retrace::retrace;
use crate::traits::AstarPather;

/// Frontier entry, ordered for use in `BinaryHeap`.
///
/// Lowest `f` pops first; among equal `f`, the entry pushed first pops
/// first (`seq` is a monotonically increasing insertion counter).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Entry {
    f: u64,
    seq: u64,
    g: u64,
    cell: Cell,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f, then oldest.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Counters from one best-first search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells popped from the frontier and expanded.
    pub expanded: usize,
    /// Entries pushed onto the frontier, the start included.
    pub pushed: usize,
    /// Cost of the returned path, if one was found.
    pub cost: Option<u64>,
}

/// Compute a minimum-cost path from `start` to `goal`.
///
/// Moves are ordered by `f = g + h`, where `g` is the accumulated move
/// cost and `h` the pather's estimate. Returns an empty path if the goal
/// cannot be reached.
pub fn best_first<P: AstarPather>(
    pather: &P,
    start: Cell,
    goal: Cell,
) -> Result<Path, SearchError> {
    best_first_with_stats(pather, start, goal).map(|(path, _)| path)
}

/// Like [`best_first`], also returning search counters.
pub fn best_first_with_stats<P: AstarPather>(
    pather: &P,
    start: Cell,
    goal: Cell,
) -> Result<(Path, SearchStats), SearchError> {
    let mut best: HashMap<Cell, u64> = HashMap::from([(start, 0)]);
    let mut parents: HashMap<Cell, Option<Cell>> = HashMap::from([(start, None)]);
    let mut stats = SearchStats::default();

    let mut seq = 0u64;
    let mut open: BinaryHeap<Entry> = BinaryHeap::new();
    open.push(Entry {
        f: 0,
        seq,
        g: 0,
        cell: start,
    });
    stats.pushed += 1;

    let mut nbuf: Vec<Cell> = Vec::with_capacity(4);

    while let Some(current) = open.pop() {
        let cp = current.cell;

        // Skip entries superseded by a cheaper route.
        if best.get(&cp).is_some_and(|&g| current.g > g) {
            continue;
        }

        if cp == goal {
            let path = retrace(&parents, goal)?;
            stats.cost = Some(current.g);
            debug!(
                "best-first: reached {goal} from {start} at cost {} ({} expanded, {} pushed)",
                current.g, stats.expanded, stats.pushed
            );
            return Ok((path, stats));
        }

        stats.expanded += 1;

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            let tentative_g = current.g + u64::from(pather.cost(cp, np));
            if best.get(&np).is_some_and(|&g| tentative_g >= g) {
                continue;
            }

            trace!("best-first: node expanded: {np} cost: {tentative_g}");
            best.insert(np, tentative_g);
            parents.insert(np, Some(cp));

            seq += 1;
            open.push(Entry {
                f: tentative_g + u64::from(pather.estimate(np, goal)),
                seq,
                g: tentative_g,
                cell: np,
            });
            stats.pushed += 1;
        }
    }

    debug!(
        "best-first: no path from {start} to {goal} ({} expanded)",
        stats.expanded
    );
    Ok((Path::empty(), stats))
}
