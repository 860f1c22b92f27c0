pub mod player;
pub mod resolution;

pub use player::{AttackProfile, PlayerTarget, SimplePlayer};
pub use resolution::{
    monster_attacks_player, player_attacks_monster, player_hit_chance, spell_strikes_player,
    MeleeOutcome, PlayerAttackReport,
};
