//! Budgeted A* returning only the first step of the best path
//!
//! 8-connected, unit step cost, Manhattan heuristic. Equal-f nodes pop in
//! the order they were pushed.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ahash::{AHashMap, AHashSet};

use crate::core::types::{ActorId, GridPos};
use crate::grid::GridOracle;
use crate::navigation::occupancy::Occupancy;

/// Node in the A* open set
#[derive(Debug, Clone)]
struct PathNode {
    pos: GridPos,
    g_cost: i32,
    f_cost: i32, // g_cost + heuristic
    seq: u64,
}

impl PartialEq for PathNode {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost && self.seq == other.seq
    }
}

impl Eq for PathNode {}

impl Ord for PathNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap, earliest push wins ties
        other
            .f_cost
            .cmp(&self.f_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for PathNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Can the search step onto `pos`?
///
/// The goal is exempt from occupancy so a chase can end on its quarry.
fn passable(
    grid: &dyn GridOracle,
    occupancy: &Occupancy,
    mover: ActorId,
    pos: GridPos,
    goal: GridPos,
) -> bool {
    grid.in_bounds(pos) && grid.is_walkable(pos) && (pos == goal || !occupancy.blocks(pos, mover))
}

/// First step of a shortest path from `start` to `goal`
///
/// Returns None when already at the goal, when the goal is unreachable, or
/// when `max_nodes` expansions pass without reaching it.
pub fn best_step(
    grid: &dyn GridOracle,
    occupancy: &Occupancy,
    mover: ActorId,
    start: GridPos,
    goal: GridPos,
    max_nodes: usize,
) -> Option<GridPos> {
    if start == goal {
        return None;
    }

    let heuristic = |pos: GridPos| pos.manhattan(&goal);

    let mut open_set = BinaryHeap::new();
    let mut came_from: AHashMap<GridPos, GridPos> = AHashMap::new();
    let mut g_scores: AHashMap<GridPos, i32> = AHashMap::new();
    let mut closed: AHashSet<GridPos> = AHashSet::new();
    let mut seq = 0u64;

    g_scores.insert(start, 0);
    open_set.push(PathNode {
        pos: start,
        g_cost: 0,
        f_cost: heuristic(start),
        seq,
    });

    let mut expanded = 0;
    let mut found = false;

    while expanded < max_nodes {
        let Some(current) = open_set.pop() else {
            break;
        };

        // Superseded entry for a node already expanded or improved since
        if closed.contains(&current.pos)
            || current.g_cost > *g_scores.get(&current.pos).unwrap_or(&i32::MAX)
        {
            continue;
        }

        expanded += 1;

        if current.pos == goal {
            found = true;
            break;
        }

        closed.insert(current.pos);

        for neighbor in current.pos.neighbors() {
            if closed.contains(&neighbor) {
                continue;
            }
            if !passable(grid, occupancy, mover, neighbor, goal) {
                continue;
            }

            let tentative_g = current.g_cost + 1;
            let neighbor_g = *g_scores.get(&neighbor).unwrap_or(&i32::MAX);

            if tentative_g < neighbor_g {
                came_from.insert(neighbor, current.pos);
                g_scores.insert(neighbor, tentative_g);

                seq += 1;
                open_set.push(PathNode {
                    pos: neighbor,
                    g_cost: tentative_g,
                    f_cost: tentative_g + heuristic(neighbor),
                    seq,
                });
            }
        }
    }

    if !found {
        tracing::trace!(
            "A* from {} to {} gave up after {} expansions",
            start,
            goal,
            expanded
        );
        return None;
    }

    let path = reconstruct_path(&came_from, start, goal)?;
    path.get(1).copied()
}

/// Walk predecessor links back to `start`
///
/// None if the chain breaks or loops before reaching `start`.
fn reconstruct_path(
    came_from: &AHashMap<GridPos, GridPos>,
    start: GridPos,
    goal: GridPos,
) -> Option<Vec<GridPos>> {
    let mut path = vec![goal];
    let mut current = goal;

    while current != start {
        let prev = *came_from.get(&current)?;
        path.push(prev);
        current = prev;
        if path.len() > came_from.len() + 1 {
            return None;
        }
    }

    path.reverse();
    if path.len() < 2 {
        return None;
    }
    Some(path)
}
