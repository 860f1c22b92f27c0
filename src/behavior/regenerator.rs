//! Trolls: ordinary melee, plus slow healing that ticks regardless of turn order

use crate::actor::{Actor, SpeciesState};
use crate::behavior::common::default_turn;
use crate::behavior::{BehaviorContext, MonsterBehavior, PassiveContext};
use crate::simulation::events::EncounterEventKind;
use crate::simulation::scheduler::ActionKind;

pub struct RegeneratorBehavior;

impl MonsterBehavior for RegeneratorBehavior {
    fn act(&self, actor: &mut Actor, ctx: &mut BehaviorContext<'_>) -> ActionKind {
        default_turn(actor, ctx)
    }

    fn passive(&self, actor: &mut Actor, ctx: &mut PassiveContext<'_>) {
        let SpeciesState::Regenerator { last_regen_tick } = actor.state else {
            return;
        };
        if actor.health >= actor.max_health
            || ctx.tick.saturating_sub(last_regen_tick) < ctx.config.regen_interval
        {
            return;
        }

        let healed = actor.heal(ctx.config.regen_amount);
        actor.state = SpeciesState::Regenerator {
            last_regen_tick: ctx.tick,
        };
        if ctx.visibility.is_visible(actor.position) {
            ctx.log.push(
                EncounterEventKind::Regenerated {
                    actor: actor.id,
                    amount: healed,
                },
                format!("The {} regenerates!", actor.name()),
                ctx.tick,
            );
        }
    }
}
