use log::debug;
use rand::rngs::SmallRng;

use crate::board::{Board, BoardView, ViewMode};
use crate::common::{BoardError, ShotResult};
use crate::coord::Coord;
use crate::events::{Event, EventSink, InvalidMove, Side};

/// Failures that end a player's turn instead of being retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    #[error("input closed before a move was made")]
    InputClosed,
    #[error("no untargeted cells left on the opponent board")]
    NoTargetsLeft,
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Interface implemented by the human proxy and the automated player.
///
/// A player only sees the hidden view of the opponent board; shots go
/// through [`Player::take_turn`], which owns the retry loop for refused
/// targets.
pub trait Player {
    /// Short name used in notifications ("You", "Computer").
    fn label(&self) -> &str;

    /// Choose the next target from the opponent's hidden view.
    fn choose_target(
        &mut self,
        side: Side,
        rng: &mut SmallRng,
        opponent: &BoardView,
        events: &mut dyn EventSink,
    ) -> Result<Coord, PlayerError>;

    /// Choose and fire one shot, asking again until the opponent board
    /// accepts a target. Refused targets are reported, never returned.
    fn take_turn(
        &mut self,
        side: Side,
        rng: &mut SmallRng,
        opponent: &mut Board,
        events: &mut dyn EventSink,
    ) -> Result<ShotResult, PlayerError> {
        loop {
            let view = opponent.view(ViewMode::Hidden);
            let target = self.choose_target(side, rng, &view, events)?;
            match opponent.shot(target) {
                Ok(result) => {
                    let event = match result {
                        ShotResult::Miss => Event::ShotMissed { side, target },
                        ShotResult::Damaged => Event::ShipDamaged { side, target },
                        ShotResult::Sunk => Event::ShipSunk { side, target },
                    };
                    events.notify(&event);
                    return Ok(result);
                }
                Err(err) => match InvalidMove::from_board_error(&err) {
                    Some(reason) => {
                        debug!("{} refused target {:?}: {}", self.label(), target, err);
                        events.notify(&Event::InvalidMove { side, reason });
                    }
                    None => return Err(err.into()),
                },
            }
        }
    }
}
