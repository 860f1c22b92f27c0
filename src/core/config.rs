//! Monster tuning constants
//!
//! Every magic number the behavior engine, pathfinder and spawner rely on
//! lives here, with the value the game ships with and what it controls.
//! A config can be loaded from TOML; missing fields fall back to defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{GloomError, Result};
use crate::core::types::Tick;

/// Tunables for the monster subsystem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonsterConfig {
    // === PATHFINDING ===
    /// Maximum A* expansions before the search gives up
    ///
    /// Exhausting the budget is not an error: callers fall back to the
    /// greedy step. 800 comfortably covers an 80x40 level.
    pub node_budget: usize,

    // === ENGAGEMENT ===
    /// Euclidean distance at which an actor strikes instead of moving
    ///
    /// 1.5 includes diagonal neighbors (distance ~1.41).
    pub melee_range: f32,

    /// Default sight radius for noticing the player
    pub aggro_radius: f32,

    /// Own turns an actor keeps chasing a remembered player location
    pub pursuit_memory_turns: u32,

    /// Default chance of an idle wander step when nothing is chased
    pub wander_chance: f64,

    // === REGENERATION ===
    /// Ticks between regenerator heals
    pub regen_interval: Tick,

    /// Health restored per heal
    pub regen_amount: i32,

    // === CASTING ===
    /// Ticks between spells, independent of the move scheduler
    pub cast_cooldown: Tick,

    /// Casters only cast when the player is at least this far away
    pub cast_min_range: f32,

    /// Casters only cast when the player is at most this far away
    pub cast_max_range: f32,

    // === CHARGING ===
    /// Charges begin no closer than this
    pub charge_min_range: f32,

    /// Charges begin no farther than this
    pub charge_max_range: f32,

    /// Re-eligibility delay while charging (lower is faster)
    pub charge_speed: Tick,

    /// Per-turn chance a charge fizzles before contact
    pub charge_break_chance: f64,

    // === ERRATIC FLIGHT ===
    /// Chance an erratic flier ignores the chase and flutters randomly
    pub erratic_chance: f64,

    // === COMBAT ===
    /// Floor on a monster's raw damage roll before the player's defense
    pub min_monster_damage: i32,

    // === SPAWNING ===
    /// Monsters per room on a freshly generated level
    pub spawn_density: f32,

    /// Placement attempts before the spawner settles for fewer monsters
    pub spawn_attempts: u32,
}

impl Default for MonsterConfig {
    fn default() -> Self {
        Self {
            node_budget: 800,

            melee_range: 1.5,
            aggro_radius: 10.0,
            pursuit_memory_turns: 15,
            wander_chance: 0.2,

            regen_interval: 500,
            regen_amount: 2,

            cast_cooldown: 600,
            cast_min_range: 2.0,
            cast_max_range: 5.0,

            charge_min_range: 3.0,
            charge_max_range: 6.0,
            charge_speed: 50,
            charge_break_chance: 0.3,

            erratic_chance: 0.7,

            min_monster_damage: 1,

            spawn_density: 0.7,
            spawn_attempts: 800,
        }
    }
}

impl MonsterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: MonsterConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.node_budget == 0 {
            return Err(GloomError::InvalidConfig(
                "node_budget must be at least 1".into(),
            ));
        }

        if self.melee_range <= 0.0 {
            return Err(GloomError::InvalidConfig(format!(
                "melee_range ({}) must be positive",
                self.melee_range
            )));
        }

        if self.cast_min_range > self.cast_max_range {
            return Err(GloomError::InvalidConfig(format!(
                "cast_min_range ({}) should be <= cast_max_range ({})",
                self.cast_min_range, self.cast_max_range
            )));
        }

        if self.charge_min_range > self.charge_max_range {
            return Err(GloomError::InvalidConfig(format!(
                "charge_min_range ({}) should be <= charge_max_range ({})",
                self.charge_min_range, self.charge_max_range
            )));
        }

        for (name, p) in [
            ("wander_chance", self.wander_chance),
            ("charge_break_chance", self.charge_break_chance),
            ("erratic_chance", self.erratic_chance),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(GloomError::InvalidConfig(format!(
                    "{} ({}) must be within 0..=1",
                    name, p
                )));
            }
        }

        if self.min_monster_damage < 0 || self.regen_amount < 0 {
            return Err(GloomError::InvalidConfig(
                "damage floor and regen amount cannot be negative".into(),
            ));
        }

        Ok(())
    }
}
