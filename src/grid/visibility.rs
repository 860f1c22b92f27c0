//! Player field of view
//!
//! The monster core only reads the resulting matrix. "The player sees this
//! cell" doubles as "a creature on this cell sees the player".

use serde::{Deserialize, Serialize};

use crate::core::types::GridPos;
use crate::grid::map::GridOracle;

/// Per-cell visibility flags
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisibilityMap {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl VisibilityMap {
    /// Nothing visible
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![false; (width * height) as usize],
        }
    }

    /// Everything visible (lit arenas, tests)
    pub fn all_visible(width: i32, height: i32) -> Self {
        let mut map = Self::new(width, height);
        map.cells.fill(true);
        map
    }

    fn index(&self, pos: GridPos) -> Option<usize> {
        if pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height {
            Some((pos.y * self.width + pos.x) as usize)
        } else {
            None
        }
    }

    /// Out-of-bounds cells are never visible
    pub fn is_visible(&self, pos: GridPos) -> bool {
        self.index(pos).is_some_and(|i| self.cells[i])
    }

    pub fn set_visible(&mut self, pos: GridPos, visible: bool) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = visible;
        }
    }
}

/// Cells on the Bresenham line from `from` to `to`, both ends included
pub fn line_between(from: GridPos, to: GridPos) -> Vec<GridPos> {
    let mut points = Vec::new();
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (from.x, from.y);

    loop {
        points.push(GridPos::new(x, y));
        if x == to.x && y == to.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }

    points
}

/// Does anything opaque sit strictly between the two cells?
pub fn has_line_of_sight(grid: &dyn GridOracle, from: GridPos, to: GridPos) -> bool {
    let line = line_between(from, to);
    line.iter()
        .skip(1)
        .take(line.len().saturating_sub(2))
        .all(|&pos| !grid.is_opaque(pos))
}

/// Field of view from `origin` out to a Euclidean `radius`
///
/// Walls themselves are visible when the line to them is clear, so room
/// outlines light up the way a player expects.
pub fn compute_visibility(grid: &dyn GridOracle, origin: GridPos, radius: i32) -> VisibilityMap {
    let mut map = VisibilityMap::new(grid.width(), grid.height());
    if !grid.in_bounds(origin) {
        return map;
    }

    let radius_sq = radius * radius;
    for y in (origin.y - radius)..=(origin.y + radius) {
        for x in (origin.x - radius)..=(origin.x + radius) {
            let pos = GridPos::new(x, y);
            if !grid.in_bounds(pos) {
                continue;
            }
            let (dx, dy) = (x - origin.x, y - origin.y);
            if dx * dx + dy * dy > radius_sq {
                continue;
            }
            if has_line_of_sight(grid, origin, pos) {
                map.set_visible(pos, true);
            }
        }
    }

    map
}
