//! Hostile creatures - stats, transient tactical state and the live roster

pub mod roster;
pub mod species;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::types::{ActorId, GridPos, SimRng, Tick};

pub use roster::Roster;
pub use species::{choose_species, Species, SpeciesProfile};

/// Inclusive damage range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRoll {
    pub min: i32,
    pub max: i32,
}

impl DamageRoll {
    pub fn new(min: i32, max: i32) -> Self {
        Self {
            min: min.min(max),
            max: max.max(min),
        }
    }

    pub fn fixed(amount: i32) -> Self {
        Self::new(amount, amount)
    }

    pub fn roll(&self, rng: &mut SimRng) -> i32 {
        if self.min == self.max {
            self.min
        } else {
            rng.gen_range(self.min..=self.max)
        }
    }
}

/// Where the player was last seen and for how long the trail has been cold
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PursuitMemory {
    pub last_known: Option<GridPos>,
    /// Own turns since the player was last in sight
    pub turns_since_seen: u32,
}

impl PursuitMemory {
    pub fn remember(&mut self, pos: GridPos) {
        self.last_known = Some(pos);
        self.turns_since_seen = 0;
    }

    pub fn forget(&mut self) {
        self.last_known = None;
        self.turns_since_seen = 0;
    }
}

/// Strategy-specific bookkeeping
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeciesState {
    #[default]
    None,
    Regenerator { last_regen_tick: Tick },
    /// Starts at 0, so the first bolt waits out a full cooldown
    Caster { last_spell_tick: Tick },
    Charger { charging: bool },
}

impl SpeciesState {
    /// Initial state for a species
    pub fn for_species(species: Species) -> Self {
        match species {
            Species::Troll => SpeciesState::Regenerator { last_regen_tick: 0 },
            Species::Wizard => SpeciesState::Caster { last_spell_tick: 0 },
            Species::Minotaur => SpeciesState::Charger { charging: false },
            _ => SpeciesState::None,
        }
    }
}

/// A hostile creature instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub species: Species,
    pub position: GridPos,
    pub health: i32,
    pub max_health: i32,
    pub damage: DamageRoll,
    /// Current move delay; chargers swap this while charging
    pub speed: Tick,
    /// Species move delay, restored after a charge
    pub base_speed: Tick,
    pub attack_speed: Tick,
    pub size: u32,
    pub experience: u32,
    /// Earliest tick this actor may act again
    pub next_action_time: Tick,
    pub pursuit: PursuitMemory,
    pub state: SpeciesState,
}

impl Actor {
    /// Actor with its species' minimum health
    pub fn new(id: ActorId, species: Species, position: GridPos) -> Self {
        let profile = species.profile();
        Self {
            id,
            species,
            position,
            health: profile.base_health,
            max_health: profile.base_health,
            damage: DamageRoll::new(1, profile.max_damage),
            speed: profile.speed,
            base_speed: profile.speed,
            attack_speed: profile.attack_speed,
            size: profile.size,
            experience: profile.experience,
            next_action_time: 0,
            pursuit: PursuitMemory::default(),
            state: SpeciesState::for_species(species),
        }
    }

    /// Actor with randomized starting health within the species spread
    pub fn rolled(id: ActorId, species: Species, position: GridPos, rng: &mut SimRng) -> Self {
        let mut actor = Self::new(id, species, position);
        let spread = species.profile().health_spread;
        if spread > 0 {
            actor.max_health += rng.gen_range(0..spread);
            actor.health = actor.max_health;
        }
        actor
    }

    pub fn name(&self) -> &'static str {
        self.species.name()
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Eligible iff the tick has reached the scheduled time
    pub fn can_act(&self, tick: Tick) -> bool {
        tick >= self.next_action_time
    }

    /// Returns true if this blow killed the actor
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.health -= amount.max(0);
        !self.is_alive()
    }

    /// Heal up to max health; returns the amount actually restored
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.health;
        self.health = (self.health + amount.max(0)).min(self.max_health);
        self.health - before
    }

    pub fn is_charging(&self) -> bool {
        matches!(self.state, SpeciesState::Charger { charging: true })
    }

    pub fn distance_to(&self, pos: GridPos) -> f32 {
        self.position.distance(&pos)
    }
}
