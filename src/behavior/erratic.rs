//! Bats flutter about unless they happen to be adjacent

use rand::Rng;

use crate::actor::Actor;
use crate::behavior::common::{default_turn, in_melee_range, random_step, strike};
use crate::behavior::{BehaviorContext, MonsterBehavior};
use crate::simulation::scheduler::ActionKind;

pub struct ErraticBehavior;

impl MonsterBehavior for ErraticBehavior {
    fn act(&self, actor: &mut Actor, ctx: &mut BehaviorContext<'_>) -> ActionKind {
        if in_melee_range(actor, ctx) {
            return strike(actor, ctx);
        }
        let erratic_chance = ctx.config.erratic_chance;
        if ctx.rng.gen_bool(erratic_chance) {
            random_step(actor, ctx);
            return ActionKind::Move;
        }
        default_turn(actor, ctx)
    }
}
