//! Gloomhold - monster core for a tick-scheduled dungeon crawler
//!
//! Decides each logical tick which monsters may act, where they move and
//! how they fight. Level generation, rendering and the player's own model
//! live outside this crate and are reached through `GridOracle` and
//! `PlayerTarget`.

pub mod actor;
pub mod behavior;
pub mod combat;
pub mod core;
pub mod grid;
pub mod navigation;
pub mod simulation;
