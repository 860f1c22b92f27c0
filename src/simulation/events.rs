//! Encounter event queue
//!
//! The logical step pushes events here; a renderer or message log drains
//! them at its own pace. Nothing in the core waits on presentation.

use serde::{Deserialize, Serialize};

use crate::core::types::{ActorId, GridPos, Tick};

/// What happened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterEventKind {
    Moved {
        actor: ActorId,
        from: GridPos,
        to: GridPos,
    },
    PlayerHit {
        actor: ActorId,
        damage: i32,
    },
    PlayerEvaded {
        actor: ActorId,
    },
    SpellCast {
        actor: ActorId,
        damage: i32,
    },
    Regenerated {
        actor: ActorId,
        amount: i32,
    },
    ChargeStarted {
        actor: ActorId,
    },
    ChargeEnded {
        actor: ActorId,
    },
    MonsterHit {
        actor: ActorId,
        damage: i32,
    },
    MonsterMissed {
        actor: ActorId,
    },
    MonsterDied {
        actor: ActorId,
        experience: u32,
    },
    PlayerDied,
}

/// A timestamped event with its player-facing message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterEvent {
    pub tick: Tick,
    pub kind: EncounterEventKind,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncounterLog {
    pub events: Vec<EncounterEvent>,
}

impl EncounterLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: EncounterEventKind, description: String, tick: Tick) {
        self.events.push(EncounterEvent {
            tick,
            kind,
            description,
        });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Hand every queued event to the caller, oldest first
    pub fn drain(&mut self) -> Vec<EncounterEvent> {
        std::mem::take(&mut self.events)
    }

    /// Messages only, for a scrolling text log
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(|e| e.description.as_str())
    }

    pub fn count_where(&self, pred: impl Fn(&EncounterEventKind) -> bool) -> usize {
        self.events.iter().filter(|e| pred(&e.kind)).count()
    }
}
