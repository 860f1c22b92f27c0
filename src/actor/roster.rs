//! Live roster of monsters on the current level
//!
//! Order is stable: actors act in the order they were added. Removals
//! requested while a tick is being resolved are queued and applied in one
//! pass afterwards so iteration never skips or repeats an entry.

use serde::{Deserialize, Serialize};

use crate::actor::Actor;
use crate::core::types::{ActorId, GridPos};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    actors: Vec<Actor>,
    #[serde(skip)]
    pending_removal: Vec<ActorId>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, actor: Actor) {
        self.actors.push(actor);
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn iter(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Actor> {
        self.actors.iter_mut()
    }

    /// Actors with health above zero
    pub fn living(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter().filter(|a| a.is_alive())
    }

    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id == id)
    }

    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|a| a.id == id)
    }

    /// Live actor standing on `pos`, if any
    pub fn occupant_at(&self, pos: GridPos) -> Option<ActorId> {
        self.living().find(|a| a.position == pos).map(|a| a.id)
    }

    /// Queue an actor for removal at the next flush
    pub fn mark_for_removal(&mut self, id: ActorId) {
        if !self.pending_removal.contains(&id) {
            self.pending_removal.push(id);
        }
    }

    pub fn has_pending_removals(&self) -> bool {
        !self.pending_removal.is_empty()
    }

    /// Drop queued and dead actors, returning them in roster order
    pub fn flush_removals(&mut self) -> Vec<Actor> {
        let pending = std::mem::take(&mut self.pending_removal);
        let (removed, kept): (Vec<Actor>, Vec<Actor>) = std::mem::take(&mut self.actors)
            .into_iter()
            .partition(|a| !a.is_alive() || pending.contains(&a.id));
        self.actors = kept;
        removed
    }
}
