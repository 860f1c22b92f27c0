//! Dungeon tile kinds

use serde::{Deserialize, Serialize};

/// A single cell of the dungeon grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Wall,
    Floor,
    DoorClosed,
    DoorOpen,
    Stair,
}

impl Tile {
    /// Can a creature stand here?
    pub fn is_walkable(&self) -> bool {
        matches!(self, Tile::Floor | Tile::DoorOpen | Tile::Stair)
    }

    /// Does this tile block line of sight?
    pub fn is_opaque(&self) -> bool {
        matches!(self, Tile::Wall | Tile::DoorClosed)
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Tile::Wall),
            '.' => Some(Tile::Floor),
            '+' => Some(Tile::DoorClosed),
            '/' => Some(Tile::DoorOpen),
            '<' | '>' => Some(Tile::Stair),
            _ => None,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
            Tile::DoorClosed => '+',
            Tile::DoorOpen => '/',
            Tile::Stair => '>',
        }
    }
}
