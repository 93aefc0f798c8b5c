//! Random fleet layout.
//!
//! Ships are dropped one at a time at uniformly random anchors. The attempt
//! budget is shared across the whole fleet; a board that runs out of budget
//! is discarded and generation starts over on a fresh one.

use log::{debug, warn};
use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::GameConfig;
use crate::coord::Coord;
use crate::ship::{Orientation, Ship};

pub struct FleetGenerator<'a> {
    config: &'a GameConfig,
}

impl<'a> FleetGenerator<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        Self { config }
    }

    /// Returns a uniformly random anchor and orientation on the board.
    pub fn random_placement<R: Rng + ?Sized>(&self, rng: &mut R) -> (Coord, Orientation) {
        let size = self.config.board_size as i32;
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let anchor = Coord::new(rng.random_range(0..size), rng.random_range(0..size));
        (anchor, orientation)
    }

    /// One attempt at a full board.
    ///
    /// Fails with `GenerationFailed` once more than `placement_attempts`
    /// placements have been tried across the whole fleet.
    pub fn try_board<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board, BoardError> {
        let mut board = Board::new(self.config.board_size);
        if self.config.board_size == 0 && !self.config.fleet.is_empty() {
            return Err(BoardError::GenerationFailed { attempts: 0 });
        }
        let mut attempts = 0;
        for &length in &self.config.fleet {
            loop {
                attempts += 1;
                if attempts > self.config.placement_attempts {
                    return Err(BoardError::GenerationFailed { attempts: attempts - 1 });
                }
                let (anchor, orientation) = self.random_placement(rng);
                match board.add_ship(Ship::new(length, anchor, orientation)) {
                    Ok(()) => break,
                    Err(BoardError::InvalidPlacement) => continue,
                    Err(e) => return Err(e),
                }
            }
        }
        board.commit_setup();
        debug!(
            "placed {} ships in {} attempts",
            board.ship_count(),
            attempts
        );
        Ok(board)
    }

    /// A complete board, restarting from scratch whenever an attempt dead-ends.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board, BoardError> {
        let mut last = BoardError::GenerationFailed { attempts: 0 };
        for restart in 0..=self.config.max_restarts {
            match self.try_board(rng) {
                Ok(board) => return Ok(board),
                Err(e @ BoardError::GenerationFailed { .. }) => {
                    debug!("board attempt {} failed: {}", restart, e);
                    last = e;
                }
                Err(e) => return Err(e),
            }
        }
        warn!(
            "giving up on fleet {:?} for a {}x{} board",
            self.config.fleet, self.config.board_size, self.config.board_size
        );
        Err(last)
    }
}
