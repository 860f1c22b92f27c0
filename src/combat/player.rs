//! The player as seen by the monster core
//!
//! The real player owns a body-part damage model and equipment; monsters
//! only ever reach it through `PlayerTarget`. `SimplePlayer` is a flat
//! stand-in used by the headless runner and tests.

use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::core::types::{GridPos, SimRng, Tick};

/// Numbers the player's attack formula needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackProfile {
    /// Weapon damage die (damage rolls below this before bonuses)
    pub base_damage: i32,
    pub bonus: i32,
    pub strength_bonus: i32,
    pub accuracy_bonus: i32,
    /// Ticks a swing costs the player
    pub weapon_speed: Tick,
}

impl AttackProfile {
    /// Bare hands
    pub fn fists() -> Self {
        Self {
            base_damage: 2,
            bonus: 0,
            strength_bonus: 0,
            accuracy_bonus: 0,
            weapon_speed: 30,
        }
    }

    /// Strength bonus is one point per ten strength above 50
    pub fn with_strength(mut self, strength: i32) -> Self {
        self.strength_bonus = (strength - 50).div_euclid(10);
        self
    }
}

impl Default for AttackProfile {
    fn default() -> Self {
        Self::fists()
    }
}

/// Collaborator interface for everything monsters do to the player
pub trait PlayerTarget {
    fn position(&self) -> GridPos;

    /// Percent chance (0-100) to dodge a melee blow
    fn chance_to_evade(&self) -> f32;

    /// Apply raw damage; returns what got through the player's defense
    fn hit_player(&mut self, amount: i32) -> i32;

    fn is_dead(&self) -> bool;

    fn attack_profile(&self) -> AttackProfile;

    fn gain_experience(&mut self, amount: u32);
}

/// Flat-health player with armor mitigation `floor(rand * base) + bonus`
#[derive(Debug, Clone)]
pub struct SimplePlayer {
    pub position: GridPos,
    pub health: i32,
    pub max_health: i32,
    pub armor_base: i32,
    pub armor_bonus: i32,
    /// Percent
    pub evasion: f32,
    pub attack: AttackProfile,
    pub experience: u32,
    pub level: u32,
    rng: SimRng,
}

impl SimplePlayer {
    pub fn new(position: GridPos, seed: u64) -> Self {
        Self {
            position,
            health: 20,
            max_health: 20,
            armor_base: 0,
            armor_bonus: 0,
            evasion: 10.0,
            attack: AttackProfile::fists(),
            experience: 0,
            level: 1,
            rng: SimRng::seed_from_u64(seed),
        }
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self.max_health = self.max_health.max(health);
        self
    }

    pub fn with_armor(mut self, base: i32, bonus: i32) -> Self {
        self.armor_base = base;
        self.armor_bonus = bonus;
        self
    }

    pub fn with_evasion(mut self, evasion: f32) -> Self {
        self.evasion = evasion;
        self
    }

    pub fn with_attack(mut self, attack: AttackProfile) -> Self {
        self.attack = attack;
        self
    }

    fn mitigation(&mut self) -> i32 {
        let rolled = if self.armor_base > 0 {
            self.rng.gen_range(0..self.armor_base)
        } else {
            0
        };
        rolled + self.armor_bonus
    }
}

impl PlayerTarget for SimplePlayer {
    fn position(&self) -> GridPos {
        self.position
    }

    fn chance_to_evade(&self) -> f32 {
        self.evasion
    }

    fn hit_player(&mut self, amount: i32) -> i32 {
        let actual = (amount - self.mitigation()).max(0);
        self.health -= actual;
        actual
    }

    fn is_dead(&self) -> bool {
        self.health <= 0
    }

    fn attack_profile(&self) -> AttackProfile {
        self.attack
    }

    fn gain_experience(&mut self, amount: u32) {
        self.experience += amount;
        let to_level = self.level * 100;
        if self.experience >= to_level {
            self.level += 1;
            self.experience -= to_level;
            tracing::info!("Player reached level {}", self.level);
        }
    }
}
