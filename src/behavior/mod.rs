//! Per-species monster tactics
//!
//! Every species maps to one strategy. Strategies share the skeleton in
//! `common` (strike when adjacent, chase what you see, follow a cold trail
//! for a while, otherwise maybe wander) and override only the parts that
//! make the species distinct.

pub mod caster;
pub mod charger;
pub mod common;
pub mod erratic;
pub mod phaser;
pub mod regenerator;
pub mod skirmisher;

use crate::actor::{Actor, Species};
use crate::combat::PlayerTarget;
use crate::core::config::MonsterConfig;
use crate::core::types::{SimRng, Tick};
use crate::grid::{GridOracle, VisibilityMap};
use crate::navigation::Occupancy;
use crate::simulation::events::EncounterLog;
use crate::simulation::scheduler::ActionKind;

/// Everything a strategy may read or touch during one actor's turn
pub struct BehaviorContext<'a> {
    pub tick: Tick,
    pub grid: &'a dyn GridOracle,
    pub visibility: &'a VisibilityMap,
    /// Live actors at the start of this actor's turn
    pub occupancy: &'a Occupancy,
    pub player: &'a mut dyn PlayerTarget,
    pub rng: &'a mut SimRng,
    pub log: &'a mut EncounterLog,
    pub config: &'a MonsterConfig,
}

/// Per-tick effects that run whether or not the actor is eligible
pub struct PassiveContext<'a> {
    pub tick: Tick,
    pub visibility: &'a VisibilityMap,
    pub log: &'a mut EncounterLog,
    pub config: &'a MonsterConfig,
}

/// Trait for species-specific monster behavior
pub trait MonsterBehavior: Sync {
    /// Take one turn; the returned kind decides the actor's cooldown
    fn act(&self, actor: &mut Actor, ctx: &mut BehaviorContext<'_>) -> ActionKind;

    /// Runs every tick for every living actor of the species
    fn passive(&self, _actor: &mut Actor, _ctx: &mut PassiveContext<'_>) {}
}

/// Get the behavior handler for a species
pub fn behavior_for(species: Species) -> &'static dyn MonsterBehavior {
    match species {
        Species::Spider => &skirmisher::SkirmisherBehavior,
        Species::Troll => &regenerator::RegeneratorBehavior,
        Species::Bat => &erratic::ErraticBehavior,
        Species::Wizard => &caster::CasterBehavior,
        Species::Minotaur => &charger::ChargerBehavior,
        Species::Ghost => &phaser::PhaserBehavior,
        Species::Goblin | Species::Orc | Species::Skeleton => &common::MeleeBehavior,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_species_has_a_strategy() {
        for species in Species::ALL {
            // Lookup must not panic for any species
            let _ = behavior_for(species);
        }
    }
}
