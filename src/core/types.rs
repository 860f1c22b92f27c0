//! Core type definitions used throughout the codebase

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a monster in the roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Logical simulation time unit
pub type Tick = u64;

/// Seeded generator shared by every random decision in an encounter
pub type SimRng = ChaCha8Rng;

/// Integer cell coordinate on the dungeon grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

/// The eight king-move offsets, cardinal directions first
pub const KING_OFFSETS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn manhattan(&self, other: &Self) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// King-move distance (diagonal steps count as one)
    pub fn chebyshev(&self, other: &Self) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    pub fn distance(&self, other: &Self) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }

    /// True when `other` lies on a row, column or 45-degree diagonal through `self`
    pub fn is_aligned_with(&self, other: &Self) -> bool {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx == 0 || dy == 0 || dx.abs() == dy.abs()
    }

    /// The eight surrounding cells in `KING_OFFSETS` order
    pub fn neighbors(&self) -> impl Iterator<Item = GridPos> + '_ {
        KING_OFFSETS.iter().map(move |&(dx, dy)| self.offset(dx, dy))
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distances() {
        let a = GridPos::new(1, 1);
        let b = GridPos::new(4, 5);
        assert_eq!(a.manhattan(&b), 7);
        assert_eq!(a.chebyshev(&b), 4);
        assert!((a.distance(&b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_alignment() {
        let origin = GridPos::new(5, 5);
        assert!(origin.is_aligned_with(&GridPos::new(5, 9)));
        assert!(origin.is_aligned_with(&GridPos::new(1, 5)));
        assert!(origin.is_aligned_with(&GridPos::new(8, 2)));
        assert!(!origin.is_aligned_with(&GridPos::new(7, 8)));
    }

    #[test]
    fn test_neighbors_are_adjacent() {
        let origin = GridPos::new(3, 3);
        let neighbors: Vec<_> = origin.neighbors().collect();
        assert_eq!(neighbors.len(), 8);
        assert!(neighbors.iter().all(|n| origin.chebyshev(n) == 1));
    }

    #[test]
    fn test_actor_id_display() {
        assert_eq!(ActorId(7).to_string(), "#7");
    }
}
