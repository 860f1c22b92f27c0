//! Wizards keep their distance and throw bolts on a cooldown

use crate::actor::{Actor, SpeciesState};
use crate::behavior::common::{default_turn, in_players_view, player_distance, retreat_step};
use crate::behavior::{BehaviorContext, MonsterBehavior};
use crate::combat::spell_strikes_player;
use crate::core::types::Tick;
use crate::simulation::scheduler::ActionKind;

pub struct CasterBehavior;

fn spell_ready(last_spell_tick: Tick, now: Tick, cooldown: Tick) -> bool {
    now.saturating_sub(last_spell_tick) >= cooldown
}

impl MonsterBehavior for CasterBehavior {
    fn act(&self, actor: &mut Actor, ctx: &mut BehaviorContext<'_>) -> ActionKind {
        let SpeciesState::Caster { last_spell_tick } = actor.state else {
            return default_turn(actor, ctx);
        };
        let dist = player_distance(actor, ctx);

        if dist >= ctx.config.cast_min_range
            && dist <= ctx.config.cast_max_range
            && in_players_view(actor, ctx)
            && spell_ready(last_spell_tick, ctx.tick, ctx.config.cast_cooldown)
        {
            spell_strikes_player(actor, &mut *ctx.player, &mut *ctx.log, ctx.tick);
            actor.state = SpeciesState::Caster {
                last_spell_tick: ctx.tick,
            };
            return ActionKind::Attack;
        }

        if dist <= ctx.config.cast_min_range && retreat_step(actor, ctx) {
            return ActionKind::Move;
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
    use crate::simulation::events::EncounterEventKind;

    #[test]
    fn test_casts_in_band_for_full_damage() {
        let mut arena = Arena::open(10, 3, GridPos::new(7, 1));
        arena.tick = 640;
        let mut wizard = Actor::new(ActorId(1), Species::Wizard, GridPos::new(3, 1));

        let kind = arena.run(&mut wizard);
        assert_eq!(kind, ActionKind::Attack);
        assert_eq!(arena.player.health, 1_000 - 8);
        assert_eq!(
            wizard.state,
            SpeciesState::Caster {
                last_spell_tick: 640
            }
        );
        assert_eq!(wizard.position, GridPos::new(3, 1));
    }

    #[test]
    fn test_cooldown_blocks_second_cast() {
        let mut arena = Arena::open(10, 3, GridPos::new(7, 1));
        arena.tick = 100;
        let mut wizard = Actor::new(ActorId(1), Species::Wizard, GridPos::new(3, 1));
        wizard.state = SpeciesState::Caster {
            last_spell_tick: 0,
        };

        let kind = arena.run(&mut wizard);
        assert_eq!(kind, ActionKind::Move);
        assert_eq!(
            arena
                .log
                .count_where(|k| matches!(k, EncounterEventKind::SpellCast { .. })),
            0
        );

        arena.tick = 600;
        wizard.position = GridPos::new(3, 1);
        assert_eq!(arena.run(&mut wizard), ActionKind::Attack);
    }

    #[test]
    fn test_fresh_wizard_waits_out_first_cooldown() {
        let mut arena = Arena::open(10, 3, GridPos::new(7, 1));
        arena.tick = 599;
        let mut wizard = Actor::new(ActorId(1), Species::Wizard, GridPos::new(3, 1));

        assert_eq!(arena.run(&mut wizard), ActionKind::Move);
        assert_eq!(arena.player.health, 1_000);

        arena.tick = 600;
        wizard.position = GridPos::new(3, 1);
        assert_eq!(arena.run(&mut wizard), ActionKind::Attack);
        assert_eq!(arena.player.health, 1_000 - 8);
    }

    #[test]
    fn test_backs_away_when_crowded() {
        let mut arena = Arena::open(10, 3, GridPos::new(5, 1));
        let mut wizard = Actor::new(ActorId(1), Species::Wizard, GridPos::new(4, 1));

        let kind = arena.run(&mut wizard);
        assert_eq!(kind, ActionKind::Move);
        assert!(wizard.position.manhattan(&GridPos::new(5, 1)) > 1);
    }

    #[test]
    fn test_unseen_wizard_does_not_cast() {
        let mut arena = Arena::open(10, 3, GridPos::new(7, 1)).dark();
        arena.config.wander_chance = 0.0;
        let mut wizard = Actor::new(ActorId(1), Species::Wizard, GridPos::new(3, 1));

        assert_eq!(arena.run(&mut wizard), ActionKind::Move);
        assert_eq!(arena.player.health, 1_000);
    }
}
