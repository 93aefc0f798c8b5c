//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiPlayer, Board, BoardError, BoardView, Coord, Event, EventSink, FleetGenerator, Game,
    GameConfig, GameStatus, HumanPlayer, Orientation, Player, Ship, ShotResult, Side,
};

#[cfg(feature = "std")]
pub use crate::{ui::render_side_by_side, ConsoleReporter, StdinSource};
