//! Ghosts drift through walls
//!
//! A ghost never uses the pathfinder. Its only constraints are the map
//! bounds, other monsters and the player's own cell.

use rand::seq::SliceRandom;

use crate::actor::Actor;
use crate::behavior::common::{in_melee_range, move_actor, sees_player, strike};
use crate::behavior::{BehaviorContext, MonsterBehavior};
use crate::core::types::{GridPos, KING_OFFSETS};
use crate::simulation::scheduler::ActionKind;

pub struct PhaserBehavior;

fn can_phase_into(actor: &Actor, pos: GridPos, ctx: &BehaviorContext<'_>) -> bool {
    ctx.grid.in_bounds(pos)
        && pos != ctx.player.position()
        && !ctx.occupancy.blocks(pos, actor.id)
}

impl MonsterBehavior for PhaserBehavior {
    fn act(&self, actor: &mut Actor, ctx: &mut BehaviorContext<'_>) -> ActionKind {
        if in_melee_range(actor, ctx) {
            return strike(actor, ctx);
        }

        let target = if sees_player(actor, ctx) {
            let player = ctx.player.position();
            Some(actor.position.offset(
                (player.x - actor.position.x).signum(),
                (player.y - actor.position.y).signum(),
            ))
        } else {
            KING_OFFSETS
                .choose(&mut *ctx.rng)
                .map(|&(dx, dy)| actor.position.offset(dx, dy))
        };

        if let Some(pos) = target.filter(|&pos| can_phase_into(actor, pos, ctx)) {
            move_actor(actor, pos, ctx);
        }
        ActionKind::Move
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::Species;
    use crate::behavior::test_support::Arena;
    use crate::core::types::ActorId;
    use crate::grid::Tile;

    #[test]
    fn test_drifts_through_wall_toward_player() {
        let mut arena = Arena::open(10, 3, GridPos::new(6, 1));
        arena.grid.set_tile(GridPos::new(3, 1), Tile::Wall);
        let mut ghost = Actor::new(ActorId(1), Species::Ghost, GridPos::new(2, 1));

        assert_eq!(arena.run(&mut ghost), ActionKind::Move);
        assert_eq!(ghost.position, GridPos::new(3, 1));
    }

    #[test]
    fn test_shorter_aggro_radius() {
        // Nine cells away is past the ghost's radius of 8
        let mut arena = Arena::open(12, 3, GridPos::new(10, 1));
        let mut ghost = Actor::new(ActorId(1), Species::Ghost, GridPos::new(1, 1));

        arena.run(&mut ghost);
        assert_eq!(ghost.pursuit.last_known, None);
        assert!(ghost.position.chebyshev(&GridPos::new(1, 1)) <= 1);
    }

    #[test]
    fn test_random_drift_stays_in_bounds() {
        let mut arena = Arena::open(1, 1, GridPos::new(5, 5)).dark();
        let mut ghost = Actor::new(ActorId(1), Species::Ghost, GridPos::new(0, 0));
        for _ in 0..10 {
            arena.run(&mut ghost);
            assert_eq!(ghost.position, GridPos::new(0, 0));
        }
    }

    #[test]
    fn test_adjacent_ghost_attacks() {
        let mut arena = Arena::open(5, 5, GridPos::new(2, 2));
        let mut ghost = Actor::new(ActorId(1), Species::Ghost, GridPos::new(3, 3));
        assert_eq!(arena.run(&mut ghost), ActionKind::Attack);
    }

    #[test]
    fn test_will_not_enter_occupied_cell() {
        let mut arena = Arena::open(10, 3, GridPos::new(6, 1));
        arena.block(GridPos::new(3, 1));
        let mut ghost = Actor::new(ActorId(1), Species::Ghost, GridPos::new(2, 1));

        arena.run(&mut ghost);
        assert_eq!(ghost.position, GridPos::new(2, 1));
    }
}
