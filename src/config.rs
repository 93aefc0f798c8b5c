use alloc::vec::Vec;

pub const DEFAULT_BOARD_SIZE: usize = 6;
pub const STANDARD_FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Placement attempts shared by the whole fleet before a board is abandoned.
pub const PLACEMENT_ATTEMPTS: usize = 2000;

/// Abandoned boards tolerated before generation gives up for good.
pub const MAX_RESTARTS: usize = 10_000;

/// Board and fleet parameters for a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    /// Ship lengths, placed in this order.
    pub fleet: Vec<usize>,
    pub placement_attempts: usize,
    pub max_restarts: usize,
}

impl GameConfig {
    /// Standard fleet on a board of `board_size`.
    pub fn with_size(board_size: usize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }

    /// Replace the fleet composition.
    pub fn fleet(mut self, lengths: impl Into<Vec<usize>>) -> Self {
        self.fleet = lengths.into();
        self
    }

    /// Total ship cells in the fleet.
    pub fn fleet_cells(&self) -> usize {
        self.fleet.iter().sum()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            fleet: STANDARD_FLEET.to_vec(),
            placement_attempts: PLACEMENT_ATTEMPTS,
            max_restarts: MAX_RESTARTS,
        }
    }
}
