use std::collections::HashSet;

use jumpgrid_core::Cell;
use log::{debug, trace};

use crate::path::Path;
use crate::traits::Pather;

/// One cell on the current exploration path, with its untried moves.
///
/// Moves live in a shared buffer; `next..end` is the untried slice.
struct Frame {
    start: usize,
    next: usize,
    end: usize,
}

/// Find a path from `start` to `goal` by exhaustive backtracking.
///
/// Moves are tried in the pather's fixed order and the first path that
/// reaches `goal` is returned; it is not necessarily the cheapest. The only
/// revisit guard is "already on the current path", so cells abandoned by
/// one branch are explored again from sibling branches. Returns an empty
/// path if the goal cannot be reached.
///
/// Runs as an explicit stack machine, so depth is bounded by the number of
/// reachable cells rather than the call stack.
pub fn depth_first<P: Pather>(pather: &P, start: Cell, goal: Cell) -> Path {
    if start == goal {
        return Path::from(vec![start]);
    }

    let mut path = vec![start];
    let mut on_path: HashSet<Cell> = HashSet::from([start]);
    let mut moves: Vec<Cell> = Vec::new();
    let mut frames: Vec<Frame> = Vec::new();
    let mut extensions = 0usize;

    pather.neighbors(start, &mut moves);
    frames.push(Frame {
        start: 0,
        next: 0,
        end: moves.len(),
    });

    while let Some(frame) = frames.last_mut() {
        if frame.next == frame.end {
            // Every move from this cell failed: backtrack.
            moves.truncate(frame.start);
            frames.pop();
            if let Some(c) = path.pop() {
                on_path.remove(&c);
            }
            continue;
        }

        let n = moves[frame.next];
        frame.next += 1;
        if on_path.contains(&n) {
            continue;
        }

        path.push(n);
        on_path.insert(n);
        extensions += 1;
        trace!("dfs: extend to {n} (depth {})", path.len() - 1);

        if n == goal {
            debug!(
                "dfs: reached {goal} from {start} in {} moves after {extensions} extensions",
                path.len() - 1
            );
            return Path::from(path);
        }

        let lo = moves.len();
        pather.neighbors(n, &mut moves);
        frames.push(Frame {
            start: lo,
            next: lo,
            end: moves.len(),
        });
    }

    debug!("dfs: no path from {start} to {goal} after {extensions} extensions");
    Path::empty()
}
