//! Per-actor action cadence
//!
//! Each actor carries its own `next_action_time`. An actor is eligible
//! once the global tick reaches it; acting pushes it forward by the
//! actor's move speed, or by its attack speed after a swing. This layer
//! only filters and books; it never fails.

use serde::{Deserialize, Serialize};

use crate::actor::{Actor, Roster};
use crate::core::types::{ActorId, Tick};

/// What an actor did with its turn, which decides its cooldown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    /// Moved, wandered or stood still
    Move,
    /// Melee swing or spell
    Attack,
}

/// Cooldown the actor earns for an action
pub fn delay_for(actor: &Actor, kind: ActionKind) -> Tick {
    match kind {
        ActionKind::Move => actor.speed,
        ActionKind::Attack => actor.attack_speed,
    }
}

/// Living actors whose scheduled time has arrived, in roster order
pub fn eligible_actors(roster: &Roster, current_tick: Tick) -> Vec<ActorId> {
    let eligible: Vec<ActorId> = roster
        .living()
        .filter(|a| a.can_act(current_tick))
        .map(|a| a.id)
        .collect();
    tracing::trace!("tick {}: {} eligible actors", current_tick, eligible.len());
    eligible
}

/// Book the actor's next turn `delay` ticks after `current_tick`
pub fn schedule_next(actor: &mut Actor, current_tick: Tick, delay: Tick) {
    debug_assert!(actor.is_alive(), "scheduling dead actor {}", actor.id);
    actor.next_action_time = current_tick.saturating_add(delay);
}

/// Book the cooldown appropriate for `kind`
pub fn schedule_after(actor: &mut Actor, current_tick: Tick, kind: ActionKind) {
    let delay = delay_for(actor, kind);
    schedule_next(actor, current_tick, delay);
}
