//! Static dungeon grid and the walkability oracle the monster core consumes
//!
//! Level generation lives elsewhere; this module only stores its output
//! (tiles plus room rectangles) and answers queries about it.

use serde::{Deserialize, Serialize};

use crate::core::error::{GloomError, Result};
use crate::core::types::GridPos;
use crate::grid::tile::Tile;

/// Read-only view of the level used by pathfinding and behaviors
///
/// Out-of-bounds cells are never walkable and always opaque.
pub trait GridOracle {
    fn width(&self) -> i32;
    fn height(&self) -> i32;

    fn in_bounds(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width() && pos.y < self.height()
    }

    fn is_walkable(&self, pos: GridPos) -> bool;
    fn is_opaque(&self, pos: GridPos) -> bool;
}

/// Axis-aligned room rectangle produced by level generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Room {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x >= self.x
            && pos.y >= self.y
            && pos.x < self.x + self.width
            && pos.y < self.y + self.height
    }

    pub fn center(&self) -> GridPos {
        GridPos::new(self.x + self.width / 2, self.y + self.height / 2)
    }
}

/// Rectangular tile array
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DungeonGrid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl DungeonGrid {
    /// Create a grid filled with one tile kind
    pub fn filled(width: i32, height: i32, tile: Tile) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            tiles: vec![tile; (width * height) as usize],
        }
    }

    /// Open floor everywhere
    pub fn open(width: i32, height: i32) -> Self {
        Self::filled(width, height, Tile::Floor)
    }

    /// Parse an ASCII map (`#` wall, `.` floor, `+` closed door, `/` open door, `<`/`>` stair)
    ///
    /// Rows must all have the same length.
    pub fn from_ascii(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(|l| l.trim_end())
            .filter(|l| !l.is_empty())
            .collect();

        let Some(first) = rows.first() else {
            return Err(GloomError::InvalidMap("map has no rows".into()));
        };
        let width = first.chars().count();

        let mut tiles = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(GloomError::InvalidMap(format!(
                    "row {} has {} columns, expected {}",
                    y,
                    row.chars().count(),
                    width
                )));
            }
            for (x, c) in row.chars().enumerate() {
                let tile = Tile::from_char(c).ok_or_else(|| {
                    GloomError::InvalidMap(format!("unknown tile '{}' at ({}, {})", c, x, y))
                })?;
                tiles.push(tile);
            }
        }

        Ok(Self {
            width: width as i32,
            height: rows.len() as i32,
            tiles,
        })
    }

    fn index(&self, pos: GridPos) -> Option<usize> {
        if self.in_bounds(pos) {
            Some((pos.y * self.width + pos.x) as usize)
        } else {
            None
        }
    }

    pub fn tile(&self, pos: GridPos) -> Option<Tile> {
        self.index(pos).map(|i| self.tiles[i])
    }

    /// Set a tile; out-of-bounds writes are ignored
    pub fn set_tile(&mut self, pos: GridPos, tile: Tile) {
        if let Some(i) = self.index(pos) {
            self.tiles[i] = tile;
        }
    }

    /// Fill a rectangle (clipped to the grid)
    pub fn fill_rect(&mut self, room: Room, tile: Tile) {
        for y in room.y..room.y + room.height {
            for x in room.x..room.x + room.width {
                self.set_tile(GridPos::new(x, y), tile);
            }
        }
    }

    /// Bounding boxes of 4-connected floor regions, in scan order
    ///
    /// Doors and stairs separate regions, so a map drawn as rooms joined by
    /// doors yields one rectangle per room.
    pub fn find_rooms(&self) -> Vec<Room> {
        let mut seen = vec![false; self.tiles.len()];
        let mut rooms = Vec::new();

        for y in 0..self.height {
            for x in 0..self.width {
                let start = GridPos::new(x, y);
                let Some(i) = self.index(start) else { continue };
                if seen[i] || self.tiles[i] != Tile::Floor {
                    continue;
                }

                let (mut min_x, mut min_y, mut max_x, mut max_y) = (x, y, x, y);
                let mut stack = vec![start];
                seen[i] = true;

                while let Some(pos) = stack.pop() {
                    min_x = min_x.min(pos.x);
                    min_y = min_y.min(pos.y);
                    max_x = max_x.max(pos.x);
                    max_y = max_y.max(pos.y);

                    for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
                        let next = pos.offset(dx, dy);
                        if let Some(j) = self.index(next) {
                            if !seen[j] && self.tiles[j] == Tile::Floor {
                                seen[j] = true;
                                stack.push(next);
                            }
                        }
                    }
                }

                rooms.push(Room::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1));
            }
        }

        rooms
    }

    /// Positions of every stair tile
    pub fn stairs(&self) -> Vec<GridPos> {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| GridPos::new(x, y)))
            .filter(|&pos| self.tile(pos) == Some(Tile::Stair))
            .collect()
    }
}

impl GridOracle for DungeonGrid {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn is_walkable(&self, pos: GridPos) -> bool {
        self.tile(pos).is_some_and(|t| t.is_walkable())
    }

    fn is_opaque(&self, pos: GridPos) -> bool {
        self.tile(pos).map_or(true, |t| t.is_opaque())
    }
}
