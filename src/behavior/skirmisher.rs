//! Hit-and-run: bite, then back off

use crate::actor::Actor;
use crate::behavior::common::{default_turn, in_melee_range, retreat_step, strike};
use crate::behavior::{BehaviorContext, MonsterBehavior};
use crate::simulation::scheduler::ActionKind;

pub struct SkirmisherBehavior;

impl MonsterBehavior for SkirmisherBehavior {
    fn act(&self, actor: &mut Actor, ctx: &mut BehaviorContext<'_>) -> ActionKind {
        if in_melee_range(actor, ctx) {
            let kind = strike(actor, ctx);
            if !retreat_step(actor, ctx) {
                tracing::trace!("{} {} has nowhere to retreat", actor.name(), actor.id);
            }
            return kind;
        }
        default_turn(actor, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::Species;
    use crate::behavior::test_support::Arena;
    use crate::core::types::{ActorId, GridPos};

    #[test]
    fn test_strikes_then_retreats() {
        let mut arena = Arena::open(10, 10, GridPos::new(5, 5));
        let mut spider = Actor::new(ActorId(1), Species::Spider, GridPos::new(5, 4));
        arena.place(&spider);

        let kind = arena.run(&mut spider);
        assert_eq!(kind, ActionKind::Attack);
        assert!(arena.player.health < 1_000);
        assert!(spider.position.manhattan(&GridPos::new(5, 5)) > 1);
    }

    #[test]
    fn test_cornered_spider_still_attacks() {
        let mut arena = Arena::open(2, 1, GridPos::new(1, 0));
        let mut spider = Actor::new(ActorId(1), Species::Spider, GridPos::new(0, 0));

        let kind = arena.run(&mut spider);
        assert_eq!(kind, ActionKind::Attack);
        assert_eq!(spider.position, GridPos::new(0, 0));
    }

    #[test]
    fn test_distant_spider_approaches() {
        let mut arena = Arena::open(10, 3, GridPos::new(8, 1));
        let mut spider = Actor::new(ActorId(1), Species::Spider, GridPos::new(1, 1));

        assert_eq!(arena.run(&mut spider), ActionKind::Move);
        assert_eq!(spider.position, GridPos::new(2, 1));
    }
}
