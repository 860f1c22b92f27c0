//! Blows traded between monsters and the player
//!
//! Thin adapter: defense and damage application belong to the player
//! collaborator, this module only rolls, applies and reports.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::actor::Actor;
use crate::combat::player::{AttackProfile, PlayerTarget};
use crate::core::config::MonsterConfig;
use crate::core::types::{ActorId, SimRng, Tick};
use crate::simulation::events::{EncounterEventKind, EncounterLog};

/// Base percent chance for the player to land a blow
pub const BASE_PLAYER_HIT_CHANCE: f32 = 65.0;
pub const MIN_PLAYER_HIT_CHANCE: f32 = 5.0;
pub const MAX_PLAYER_HIT_CHANCE: f32 = 95.0;

/// Result of a monster's melee swing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeleeOutcome {
    Evaded,
    Hit { damage: i32, player_died: bool },
}

/// Roll evasion, then damage, and apply it to the player
pub fn monster_attacks_player(
    actor: &Actor,
    player: &mut dyn PlayerTarget,
    config: &MonsterConfig,
    rng: &mut SimRng,
    log: &mut EncounterLog,
    tick: Tick,
) -> MeleeOutcome {
    let evade_roll = rng.gen::<f32>() * 100.0;
    if evade_roll < player.chance_to_evade() {
        log.push(
            EncounterEventKind::PlayerEvaded { actor: actor.id },
            format!("You evade the {}'s attack!", actor.name()),
            tick,
        );
        return MeleeOutcome::Evaded;
    }

    let raw = actor.damage.roll(rng).max(config.min_monster_damage);
    let damage = player.hit_player(raw);
    log.push(
        EncounterEventKind::PlayerHit {
            actor: actor.id,
            damage,
        },
        format!("The {} hits you for {} damage.", actor.name(), damage),
        tick,
    );

    let player_died = player.is_dead();
    if player_died {
        log.push(
            EncounterEventKind::PlayerDied,
            "You die. Game over.".to_string(),
            tick,
        );
    }

    MeleeOutcome::Hit {
        damage,
        player_died,
    }
}

/// A caster's bolt: no evasion roll, full damage die
pub fn spell_strikes_player(
    actor: &Actor,
    player: &mut dyn PlayerTarget,
    log: &mut EncounterLog,
    tick: Tick,
) -> i32 {
    let damage = player.hit_player(actor.damage.max);
    log.push(
        EncounterEventKind::SpellCast {
            actor: actor.id,
            damage,
        },
        format!(
            "The {} casts magic missile for {} damage!",
            actor.name(),
            damage
        ),
        tick,
    );
    if player.is_dead() {
        log.push(
            EncounterEventKind::PlayerDied,
            "You die. Game over.".to_string(),
            tick,
        );
    }
    damage
}

/// Size modifier: small targets are harder to hit, capped at +/-15
pub fn size_modifier(size: u32) -> f32 {
    (10.0 - size as f32 / 10.0).clamp(-15.0, 15.0)
}

/// Speed penalty: monsters faster than 100 are harder to hit, 0..=20
pub fn speed_penalty(speed: Tick) -> f32 {
    let ratio = 100.0 / (speed.max(10) as f32);
    ((ratio - 1.0) * 12.0).clamp(0.0, 20.0).round()
}

/// Percent chance for the player's swing to connect with `actor`
pub fn player_hit_chance(attack: &AttackProfile, actor: &Actor) -> f32 {
    let chance = BASE_PLAYER_HIT_CHANCE + size_modifier(actor.size) - speed_penalty(actor.speed)
        + attack.accuracy_bonus as f32;
    chance.clamp(MIN_PLAYER_HIT_CHANCE, MAX_PLAYER_HIT_CHANCE)
}

/// Result of a player-initiated attack
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerAttackReport {
    pub actor: ActorId,
    pub hit: bool,
    pub hit_chance: f32,
    pub damage: i32,
    pub killed: bool,
    /// Ticks the swing costs the player
    pub time_cost: Tick,
}

/// Roll the player's swing against `actor` and apply damage
///
/// On a kill the player is awarded the actor's experience; taking the
/// corpse out of the roster is the caller's job.
pub fn player_attacks_monster(
    actor: &mut Actor,
    player: &mut dyn PlayerTarget,
    rng: &mut SimRng,
    log: &mut EncounterLog,
    tick: Tick,
) -> PlayerAttackReport {
    let attack = player.attack_profile();
    let hit_chance = player_hit_chance(&attack, actor);
    let mut report = PlayerAttackReport {
        actor: actor.id,
        hit: false,
        hit_chance,
        damage: 0,
        killed: false,
        time_cost: attack.weapon_speed,
    };

    if rng.gen::<f32>() * 100.0 >= hit_chance {
        log.push(
            EncounterEventKind::MonsterMissed { actor: actor.id },
            format!("You miss the {}.", actor.name()),
            tick,
        );
        return report;
    }

    let swing = rng.gen::<f32>() * attack.base_damage.max(0) as f32
        + attack.bonus as f32
        + attack.strength_bonus as f32;
    let damage = (swing.floor() as i32).max(0);

    report.hit = true;
    report.damage = damage;
    report.killed = actor.take_damage(damage);

    log.push(
        EncounterEventKind::MonsterHit {
            actor: actor.id,
            damage,
        },
        format!("You hit {} for {} damage.", actor.name(), damage),
        tick,
    );

    if report.killed {
        player.gain_experience(actor.experience);
        log.push(
            EncounterEventKind::MonsterDied {
                actor: actor.id,
                experience: actor.experience,
            },
            format!("{} dies.", actor.name()),
            tick,
        );
    }

    report
}
