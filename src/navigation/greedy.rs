//! Constant-time fallback step toward a target

use rand::Rng;

use crate::core::types::{ActorId, GridPos, SimRng};
use crate::grid::GridOracle;
use crate::navigation::occupancy::{is_walkable_for, Occupancy};

/// One axis-aligned step that closes the gap to `target`
///
/// Tries the horizontal and vertical candidates in a per-call random order
/// so converging monsters don't file in predictably. A candidate qualifies
/// if an actor could stand there or it is the target itself.
pub fn greedy_step(
    grid: &dyn GridOracle,
    occupancy: &Occupancy,
    mover: ActorId,
    start: GridPos,
    target: GridPos,
    rng: &mut SimRng,
) -> Option<GridPos> {
    if start == target {
        return None;
    }

    let dx = (target.x - start.x).signum();
    let dy = (target.y - start.y).signum();
    let horizontal = start.offset(dx, 0);
    let vertical = start.offset(0, dy);

    let candidates = if rng.gen_bool(0.5) {
        [horizontal, vertical]
    } else {
        [vertical, horizontal]
    };

    candidates.into_iter().find(|&pos| {
        pos != start && (pos == target || is_walkable_for(grid, occupancy, mover, pos))
    })
}
