//! Dungeon grid - tiles, rooms and field of view
//!
//! Produced by level generation and treated as immutable by the monster
//! core. Occupancy is never stored here; it is derived from the live roster.

pub mod map;
pub mod tile;
pub mod visibility;

pub use map::{DungeonGrid, GridOracle, Room};
pub use tile::Tile;
pub use visibility::{compute_visibility, has_line_of_sight, line_between, VisibilityMap};
