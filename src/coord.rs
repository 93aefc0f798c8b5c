//! Board coordinates.

use core::fmt;

/// Offsets of the 8-connected neighbourhood, centre excluded.
const NEIGHBOURS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A cell position: `x` is the row, `y` the column, both 0-based.
///
/// Coordinates may be negative or exceed the board; `Board::out` decides
/// whether a given value lies on a particular board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate shifted by `(dx, dy)`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The eight surrounding cells, unclipped.
    pub fn neighbours(self) -> impl Iterator<Item = Coord> {
        NEIGHBOURS.iter().map(move |&(dx, dy)| self.offset(dx, dy))
    }

    /// Build a coordinate from 1-based `(row, col)` input.
    pub const fn from_one_based(row: i32, col: i32) -> Self {
        Self::new(row - 1, col - 1)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Rendered 1-based, as a player would type it.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x + 1, self.y + 1)
    }
}
