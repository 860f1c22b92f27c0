//! Species stat table and level-aware spawn selection
//!
//! Speeds are re-eligibility delays in ticks: 100 is a normal pace, 50
//! acts twice as often, 200 half as often.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::types::{SimRng, Tick};

/// Hostile creature kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Goblin,
    Orc,
    Skeleton,
    Spider,
    Troll,
    Bat,
    Wizard,
    Minotaur,
    Ghost,
}

/// Fixed stats for a species
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesProfile {
    pub name: &'static str,
    pub symbol: char,
    pub description: &'static str,
    /// Minimum starting health
    pub base_health: i32,
    /// Extra random health, exclusive upper bound (0 = none)
    pub health_spread: i32,
    /// Damage rolls 1..=max_damage
    pub max_damage: i32,
    pub speed: Tick,
    pub attack_speed: Tick,
    /// 100 is human-sized; bigger targets are easier to hit
    pub size: u32,
    pub experience: u32,
    /// Dungeon levels (inclusive) where this species spawns
    pub level_range: (u32, u32),
    pub spawn_weight: u32,
    /// Overrides the configured aggro radius
    pub aggro_radius: Option<f32>,
    /// Overrides the configured idle wander chance
    pub wander_chance: Option<f64>,
}

const DEFAULT_ATTACK_SPEED: Tick = 50;

const GOBLIN: SpeciesProfile = SpeciesProfile {
    name: "Goblin",
    symbol: 'g',
    description: "A wiry, sharp-toothed humanoid reeking of damp leather and bad intentions.",
    base_health: 6,
    health_spread: 3,
    max_damage: 5,
    speed: 75,
    attack_speed: DEFAULT_ATTACK_SPEED,
    size: 80,
    experience: 5,
    level_range: (1, 5),
    spawn_weight: 4,
    aggro_radius: None,
    wander_chance: None,
};

const ORC: SpeciesProfile = SpeciesProfile {
    name: "Orc",
    symbol: 'O',
    description: "A brutish warrior, muscles knotted under scarred hide.",
    base_health: 14,
    health_spread: 5,
    max_damage: 7,
    speed: 200,
    attack_speed: DEFAULT_ATTACK_SPEED,
    size: 110,
    experience: 15,
    level_range: (1, 5),
    spawn_weight: 2,
    aggro_radius: None,
    wander_chance: None,
};

const SKELETON: SpeciesProfile = SpeciesProfile {
    name: "Skeleton",
    symbol: 's',
    description: "Rattling bones bound by necromantic malice.",
    base_health: 8,
    health_spread: 4,
    max_damage: 4,
    speed: 120,
    attack_speed: DEFAULT_ATTACK_SPEED,
    size: 90,
    experience: 10,
    level_range: (5, 10),
    spawn_weight: 2,
    aggro_radius: None,
    wander_chance: Some(0.0),
};

const SPIDER: SpeciesProfile = SpeciesProfile {
    name: "Spider",
    symbol: 'x',
    description: "A skittering cavern spider, venom beading along its hooked fangs.",
    base_health: 3,
    health_spread: 2,
    max_damage: 3,
    speed: 30,
    attack_speed: DEFAULT_ATTACK_SPEED,
    size: 50,
    experience: 7,
    level_range: (2, 6),
    spawn_weight: 3,
    aggro_radius: None,
    wander_chance: None,
};

const TROLL: SpeciesProfile = SpeciesProfile {
    name: "Troll",
    symbol: 'T',
    description: "A hulking brute whose mottled flesh knits as fast as blades part it.",
    base_health: 25,
    health_spread: 10,
    max_damage: 12,
    speed: 300,
    attack_speed: DEFAULT_ATTACK_SPEED,
    size: 120,
    experience: 25,
    level_range: (5, 10),
    spawn_weight: 1,
    aggro_radius: None,
    wander_chance: None,
};

const BAT: SpeciesProfile = SpeciesProfile {
    name: "Bat",
    symbol: 'b',
    description: "A squeaking blur of leathery wings and needle teeth.",
    base_health: 2,
    health_spread: 2,
    max_damage: 2,
    speed: 40,
    attack_speed: DEFAULT_ATTACK_SPEED,
    size: 50,
    experience: 4,
    level_range: (3, 8),
    spawn_weight: 3,
    aggro_radius: None,
    wander_chance: None,
};

const WIZARD: SpeciesProfile = SpeciesProfile {
    name: "Wizard",
    symbol: 'W',
    description: "A gaunt spellcaster, fingers crackling with unstable arcane intent.",
    base_health: 8,
    health_spread: 3,
    max_damage: 8,
    speed: 150,
    attack_speed: DEFAULT_ATTACK_SPEED,
    size: 100,
    experience: 20,
    level_range: (4, 9),
    spawn_weight: 2,
    aggro_radius: None,
    wander_chance: None,
};

const MINOTAUR: SpeciesProfile = SpeciesProfile {
    name: "Minotaur",
    symbol: 'M',
    description: "A towering bull-headed terror pawing the ground for the charge.",
    base_health: 30,
    health_spread: 15,
    max_damage: 16,
    speed: 130,
    attack_speed: DEFAULT_ATTACK_SPEED,
    size: 130,
    experience: 50,
    level_range: (6, 11),
    spawn_weight: 1,
    aggro_radius: None,
    wander_chance: None,
};

const GHOST: SpeciesProfile = SpeciesProfile {
    name: "Ghost",
    symbol: 'G',
    description: "A translucent remnant of a restless soul, drifting through stone.",
    base_health: 6,
    health_spread: 4,
    max_damage: 6,
    speed: 80,
    attack_speed: DEFAULT_ATTACK_SPEED,
    size: 105,
    experience: 12,
    level_range: (3, 9),
    spawn_weight: 2,
    aggro_radius: Some(8.0),
    wander_chance: None,
};

impl Species {
    pub const ALL: [Species; 9] = [
        Species::Goblin,
        Species::Orc,
        Species::Skeleton,
        Species::Spider,
        Species::Troll,
        Species::Bat,
        Species::Wizard,
        Species::Minotaur,
        Species::Ghost,
    ];

    pub fn profile(&self) -> &'static SpeciesProfile {
        match self {
            Species::Goblin => &GOBLIN,
            Species::Orc => &ORC,
            Species::Skeleton => &SKELETON,
            Species::Spider => &SPIDER,
            Species::Troll => &TROLL,
            Species::Bat => &BAT,
            Species::Wizard => &WIZARD,
            Species::Minotaur => &MINOTAUR,
            Species::Ghost => &GHOST,
        }
    }

    pub fn name(&self) -> &'static str {
        self.profile().name
    }

    /// Can this species appear on the given dungeon level?
    pub fn spawns_on(&self, level: u32) -> bool {
        let (lo, hi) = self.profile().level_range;
        level >= lo && level <= hi
    }
}

/// Weighted pick among species whose level range covers `level`
///
/// Falls back to the whole table when nothing matches, and to goblins if
/// the weights somehow sum to zero.
pub fn choose_species(level: u32, rng: &mut SimRng) -> Species {
    let mut candidates: Vec<Species> = Species::ALL
        .iter()
        .copied()
        .filter(|s| s.spawns_on(level))
        .collect();
    if candidates.is_empty() {
        candidates = Species::ALL.to_vec();
    }

    let total: u32 = candidates.iter().map(|s| s.profile().spawn_weight).sum();
    if total == 0 {
        return Species::Goblin;
    }

    let mut roll = rng.gen_range(0..total);
    for species in candidates {
        let weight = species.profile().spawn_weight;
        if roll < weight {
            return species;
        }
        roll -= weight;
    }

    Species::Goblin
}
