//! Ship geometry and damage tracking.

use crate::coord::Coord;

/// Axis along which a ship extends from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Cells grow along the column (`y`).
    Horizontal,
    /// Cells grow along the row (`x`).
    Vertical,
}

impl Orientation {
    /// Unit step `(dx, dy)` between consecutive cells.
    pub const fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A straight ship. Its cells are derived from `anchor`, `orientation` and
/// `length` rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    anchor: Coord,
    orientation: Orientation,
    remaining: usize,
}

impl Ship {
    /// A new, undamaged ship.
    pub const fn new(length: usize, anchor: Coord, orientation: Orientation) -> Self {
        Self {
            length,
            anchor,
            orientation,
            remaining: length,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Segments not yet hit.
    pub fn remaining_hits(&self) -> usize {
        self.remaining
    }

    /// Occupied cells, anchor first.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let (dx, dy) = self.orientation.step();
        let anchor = self.anchor;
        (0..self.length as i32).map(move |i| anchor.offset(dx * i, dy * i))
    }

    /// Whether `c` is one of this ship's cells.
    pub fn contains(&self, c: Coord) -> bool {
        let (dx, _) = self.orientation.step();
        let (ox, oy) = (c.x - self.anchor.x, c.y - self.anchor.y);
        // offset must lie on the axis, within [0, length)
        let along = if dx == 0 { (ox == 0).then_some(oy) } else { (oy == 0).then_some(ox) };
        matches!(along, Some(i) if i >= 0 && (i as usize) < self.length)
    }

    /// Take one point of damage. Returns `true` when this hit sinks the ship.
    ///
    /// Damage on a ship that is already sunk is ignored.
    pub fn register_hit(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }

    pub fn is_sunk(&self) -> bool {
        self.remaining == 0
    }
}
