//! Which cells currently hold a live monster
//!
//! Rebuilt from the roster before every actor's turn; never cached on tiles.

use ahash::AHashMap;

use crate::actor::Roster;
use crate::core::types::{ActorId, GridPos};
use crate::grid::GridOracle;

#[derive(Debug, Clone, Default)]
pub struct Occupancy {
    cells: AHashMap<GridPos, ActorId>,
}

impl Occupancy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of living actors' positions
    pub fn from_roster(roster: &Roster) -> Self {
        let mut occupancy = Self::new();
        for actor in roster.living() {
            occupancy.insert(actor.position, actor.id);
        }
        occupancy
    }

    pub fn insert(&mut self, pos: GridPos, id: ActorId) {
        self.cells.insert(pos, id);
    }

    pub fn occupant(&self, pos: GridPos) -> Option<ActorId> {
        self.cells.get(&pos).copied()
    }

    pub fn is_occupied(&self, pos: GridPos) -> bool {
        self.cells.contains_key(&pos)
    }

    /// Occupied by someone other than `mover`
    pub fn blocks(&self, pos: GridPos, mover: ActorId) -> bool {
        self.occupant(pos).is_some_and(|id| id != mover)
    }

    /// Record a move so later queries in the same turn see it
    pub fn relocate(&mut self, id: ActorId, from: GridPos, to: GridPos) {
        if self.occupant(from) == Some(id) {
            self.cells.remove(&from);
        }
        self.cells.insert(to, id);
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Terrain allows standing here and no other live actor does
pub fn is_walkable_for(
    grid: &dyn GridOracle,
    occupancy: &Occupancy,
    mover: ActorId,
    pos: GridPos,
) -> bool {
    grid.is_walkable(pos) && !occupancy.blocks(pos, mover)
}
