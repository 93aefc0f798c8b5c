//! Common types for the board: cell states, shot results and board errors.

use crate::coord::Coord;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Open water, never shot.
    #[default]
    Empty,
    /// Intact ship segment.
    Ship,
    /// Shot that hit water, or water cleared around a sunk ship.
    Miss,
    /// Damaged ship segment.
    Hit,
    /// Water next to a ship, reserved during placement. Only reported by the
    /// placement view.
    Margin,
}

impl Cell {
    /// `Hit` or `Miss`: the cell has been shot at or cleared by a sink.
    pub fn is_resolved(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

/// Outcome of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    Miss,
    /// Hit a ship that still floats.
    Damaged,
    /// Hit the last intact segment of a ship.
    Sunk,
}

impl ShotResult {
    /// Whether the attacker moves again.
    pub fn grants_repeat(self) -> bool {
        matches!(self, ShotResult::Damaged | ShotResult::Sunk)
    }
}

/// Errors returned by Board operations and fleet generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Target lies outside the grid.
    #[error("cell {0} is outside the board")]
    OutOfBounds(Coord),
    /// Target was shot before.
    #[error("cell {0} has already been targeted")]
    AlreadyTargeted(Coord),
    /// Ship would leave the grid, overlap another ship or touch one.
    #[error("ship cannot be placed there")]
    InvalidPlacement,
    /// The fleet did not fit within the attempt budget.
    #[error("fleet could not be placed after {attempts} attempts")]
    GenerationFailed { attempts: usize },
}
