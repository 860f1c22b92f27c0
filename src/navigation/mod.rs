//! Monster movement planning
//!
//! Callers always try the budgeted A* first and fall back to the greedy
//! step; if both come back empty the actor stays put this turn. Nothing is
//! cached between calls.

pub mod astar;
pub mod greedy;
pub mod occupancy;

pub use astar::best_step;
pub use greedy::greedy_step;
pub use occupancy::{is_walkable_for, Occupancy};

use crate::core::types::{ActorId, GridPos, SimRng};
use crate::grid::GridOracle;

/// Best-effort next cell from `start` toward `target`
pub fn next_step(
    grid: &dyn GridOracle,
    occupancy: &Occupancy,
    mover: ActorId,
    start: GridPos,
    target: GridPos,
    max_nodes: usize,
    rng: &mut SimRng,
) -> Option<GridPos> {
    best_step(grid, occupancy, mover, start, target, max_nodes).or_else(|| {
        let fallback = greedy_step(grid, occupancy, mover, start, target, rng);
        tracing::trace!("{} falling back to greedy step: {:?}", mover, fallback);
        fallback
    })
}
