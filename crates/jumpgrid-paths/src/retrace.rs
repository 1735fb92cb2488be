use std::collections::HashMap;

use jumpgrid_core::Cell;

use crate::error::SearchError;
use crate::path::Path;

/// Rebuild the start→goal path from predecessor links.
///
/// `predecessors` maps each discovered cell to the cell it was reached
/// from, with `None` marking the start. Fails with
/// [`SearchError::UnreachableGoal`] if `goal` (or any link of its chain) is
/// missing, or if the links form a cycle.
pub fn retrace(
    predecessors: &HashMap<Cell, Option<Cell>>,
    goal: Cell,
) -> Result<Path, SearchError> {
    let mut cells = vec![goal];
    let mut current = goal;
    loop {
        match predecessors.get(&current) {
            None => return Err(SearchError::UnreachableGoal(goal)),
            Some(None) => break,
            Some(Some(prev)) => {
                // A valid chain visits each entry at most once.
                if cells.len() > predecessors.len() {
                    return Err(SearchError::UnreachableGoal(goal));
                }
                cells.push(*prev);
                current = *prev;
            }
        }
    }
    cells.reverse();
    Ok(Path::from(cells))
}
