//! Minotaurs build up speed along straight lines before closing in
//!
//! Charging only swaps the actor's move delay; the turn itself is still
//! the common skeleton.

use rand::Rng;

use crate::actor::{Actor, SpeciesState};
use crate::behavior::common::{default_turn, player_distance, sees_player};
use crate::behavior::{BehaviorContext, MonsterBehavior};
use crate::simulation::events::EncounterEventKind;
use crate::simulation::scheduler::ActionKind;

pub struct ChargerBehavior;

impl ChargerBehavior {
    fn begin_charge(actor: &mut Actor, ctx: &mut BehaviorContext<'_>) {
        actor.state = SpeciesState::Charger { charging: true };
        actor.speed = ctx.config.charge_speed;
        ctx.log.push(
            EncounterEventKind::ChargeStarted { actor: actor.id },
            format!("The {} begins charging!", actor.name()),
            ctx.tick,
        );
    }

    fn end_charge(actor: &mut Actor, ctx: &mut BehaviorContext<'_>) {
        actor.state = SpeciesState::Charger { charging: false };
        actor.speed = actor.base_speed;
        ctx.log.push(
            EncounterEventKind::ChargeEnded { actor: actor.id },
            format!("The {} stops charging.", actor.name()),
            ctx.tick,
        );
    }
}

impl MonsterBehavior for ChargerBehavior {
    fn act(&self, actor: &mut Actor, ctx: &mut BehaviorContext<'_>) -> ActionKind {
        let dist = player_distance(actor, ctx);

        if actor.is_charging() {
            let break_chance = ctx.config.charge_break_chance;
            if dist <= ctx.config.melee_range || ctx.rng.gen_bool(break_chance) {
                Self::end_charge(actor, ctx);
            }
        } else if sees_player(actor, ctx)
            && dist >= ctx.config.charge_min_range
            && dist <= ctx.config.charge_max_range
            && actor.position.is_aligned_with(&ctx.player.position())
        {
            Self::begin_charge(actor, ctx);
        }

        default_turn(actor, ctx)
    }
}
