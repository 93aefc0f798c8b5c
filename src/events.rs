//! Notifications the engine emits to whoever presents the match.

use alloc::vec::Vec;

use crate::board::Board;
use crate::common::BoardError;
use crate::coord::Coord;
use crate::input::ParseError;

/// One of the two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// Why a move was refused and asked for again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidMove {
    OutOfBounds(Coord),
    AlreadyTargeted(Coord),
    ParseFailure(ParseError),
}

impl InvalidMove {
    /// Targeting errors the move loop recovers from; `None` for the rest.
    pub fn from_board_error(err: &BoardError) -> Option<Self> {
        match *err {
            BoardError::OutOfBounds(c) => Some(InvalidMove::OutOfBounds(c)),
            BoardError::AlreadyTargeted(c) => Some(InvalidMove::AlreadyTargeted(c)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    TurnStarted { side: Side },
    ShotMissed { side: Side, target: Coord },
    ShipDamaged { side: Side, target: Coord },
    ShipSunk { side: Side, target: Coord },
    InvalidMove { side: Side, reason: InvalidMove },
    MatchWon { winner: Side },
}

/// Output collaborator.
pub trait EventSink {
    fn notify(&mut self, event: &Event);

    /// Called with both boards before every turn and once the match ends.
    fn boards(&mut self, _first: &Board, _second: &Board) {}
}

/// Discards everything.
impl EventSink for () {
    fn notify(&mut self, _event: &Event) {}
}

/// Records every event in order.
impl EventSink for Vec<Event> {
    fn notify(&mut self, event: &Event) {
        self.push(event.clone());
    }
}
