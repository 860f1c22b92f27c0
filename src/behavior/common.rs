//! Approach-and-melee skeleton shared by every strategy
//!
//! 1. Adjacent to the player: strike.
//! 2. Player in sight and in aggro radius: path toward them, remember where they stood.
//! 3. Trail still warm: path toward the remembered cell.
//! 4. Otherwise: maybe take one random step.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::actor::Actor;
use crate::behavior::{BehaviorContext, MonsterBehavior};
use crate::combat::{monster_attacks_player, MeleeOutcome};
use crate::core::types::{GridPos, KING_OFFSETS};
use crate::navigation::{is_walkable_for, next_step};
use crate::simulation::events::EncounterEventKind;
use crate::simulation::scheduler::ActionKind;

/// Goblins, orcs, skeletons: the plain skeleton with no overrides
pub struct MeleeBehavior;

impl MonsterBehavior for MeleeBehavior {
    fn act(&self, actor: &mut Actor, ctx: &mut BehaviorContext<'_>) -> ActionKind {
        default_turn(actor, ctx)
    }
}

pub fn player_distance(actor: &Actor, ctx: &BehaviorContext<'_>) -> f32 {
    actor.distance_to(ctx.player.position())
}

pub fn in_melee_range(actor: &Actor, ctx: &BehaviorContext<'_>) -> bool {
    player_distance(actor, ctx) < ctx.config.melee_range
}

/// Is the actor standing somewhere the player can see?
pub fn in_players_view(actor: &Actor, ctx: &BehaviorContext<'_>) -> bool {
    ctx.visibility.is_visible(actor.position)
}

pub fn aggro_radius(actor: &Actor, ctx: &BehaviorContext<'_>) -> f32 {
    actor
        .species
        .profile()
        .aggro_radius
        .unwrap_or(ctx.config.aggro_radius)
}

pub fn wander_chance(actor: &Actor, ctx: &BehaviorContext<'_>) -> f64 {
    actor
        .species
        .profile()
        .wander_chance
        .unwrap_or(ctx.config.wander_chance)
}

/// Mutual sight within the actor's aggro radius
pub fn sees_player(actor: &Actor, ctx: &BehaviorContext<'_>) -> bool {
    in_players_view(actor, ctx) && player_distance(actor, ctx) <= aggro_radius(actor, ctx)
}

/// Swing at the player
pub fn strike(actor: &Actor, ctx: &mut BehaviorContext<'_>) -> ActionKind {
    let outcome = monster_attacks_player(
        actor,
        &mut *ctx.player,
        ctx.config,
        &mut *ctx.rng,
        &mut *ctx.log,
        ctx.tick,
    );
    if let MeleeOutcome::Hit {
        player_died: true, ..
    } = outcome
    {
        tracing::info!("{} {} killed the player", actor.name(), actor.id);
    }
    ActionKind::Attack
}

/// Can the actor step onto `pos`? Terrain, other monsters and the player all block.
pub fn can_enter(actor: &Actor, pos: GridPos, ctx: &BehaviorContext<'_>) -> bool {
    pos != ctx.player.position() && is_walkable_for(ctx.grid, ctx.occupancy, actor.id, pos)
}

pub fn move_actor(actor: &mut Actor, to: GridPos, ctx: &mut BehaviorContext<'_>) {
    let from = actor.position;
    actor.position = to;
    ctx.log.push(
        EncounterEventKind::Moved {
            actor: actor.id,
            from,
            to,
        },
        format!("{} {} moves {} -> {}", actor.name(), actor.id, from, to),
        ctx.tick,
    );
}

/// Path one cell toward `target`; false if no usable step exists
pub fn step_toward(actor: &mut Actor, target: GridPos, ctx: &mut BehaviorContext<'_>) -> bool {
    let step = next_step(
        ctx.grid,
        ctx.occupancy,
        actor.id,
        actor.position,
        target,
        ctx.config.node_budget,
        &mut *ctx.rng,
    );
    match step {
        Some(pos) if can_enter(actor, pos, ctx) => {
            move_actor(actor, pos, ctx);
            true
        }
        _ => false,
    }
}

/// One step in a uniformly random king direction, if that cell is free
pub fn random_step(actor: &mut Actor, ctx: &mut BehaviorContext<'_>) -> bool {
    let Some(&(dx, dy)) = KING_OFFSETS.choose(&mut *ctx.rng) else {
        return false;
    };
    let target = actor.position.offset(dx, dy);
    if can_enter(actor, target, ctx) {
        move_actor(actor, target, ctx);
        true
    } else {
        false
    }
}

/// Step to the free neighbor farthest (Manhattan) from the player
///
/// Only cells that strictly increase the distance qualify; ties keep the
/// first candidate in direction order.
pub fn retreat_step(actor: &mut Actor, ctx: &mut BehaviorContext<'_>) -> bool {
    let player = ctx.player.position();
    let current = actor.position.manhattan(&player);

    let mut best: Option<(GridPos, i32)> = None;
    for candidate in actor.position.neighbors() {
        if !can_enter(actor, candidate, ctx) {
            continue;
        }
        let dist = candidate.manhattan(&player);
        if dist > current && best.map_or(true, |(_, d)| dist > d) {
            best = Some((candidate, dist));
        }
    }

    match best {
        Some((pos, _)) => {
            move_actor(actor, pos, ctx);
            true
        }
        None => false,
    }
}

/// The full skeleton: strike if adjacent, otherwise chase or wander
pub fn default_turn(actor: &mut Actor, ctx: &mut BehaviorContext<'_>) -> ActionKind {
    if in_melee_range(actor, ctx) {
        return strike(actor, ctx);
    }
    pursue_or_wander(actor, ctx)
}

/// Steps 2-4 of the skeleton
pub fn pursue_or_wander(actor: &mut Actor, ctx: &mut BehaviorContext<'_>) -> ActionKind {
    if sees_player(actor, ctx) {
        let player = ctx.player.position();
        actor.pursuit.remember(player);
        step_toward(actor, player, ctx);
        return ActionKind::Move;
    }

    if let Some(last_known) = actor.pursuit.last_known {
        if actor.pursuit.turns_since_seen >= ctx.config.pursuit_memory_turns {
            tracing::debug!("{} {} lost the trail", actor.name(), actor.id);
            actor.pursuit.forget();
        } else if actor.position == last_known {
            actor.pursuit.forget();
        } else {
            actor.pursuit.turns_since_seen += 1;
            step_toward(actor, last_known, ctx);
        }
        return ActionKind::Move;
    }

    let chance = wander_chance(actor, ctx);
    if ctx.rng.gen_bool(chance) {
        random_step(actor, ctx);
    }
    ActionKind::Move
}
