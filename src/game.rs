use alloc::boxed::Box;

use log::info;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{BoardError, ShotResult};
use crate::config::GameConfig;
use crate::events::{Event, EventSink, Side};
use crate::fleet::FleetGenerator;
use crate::player::{Player, PlayerError};

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Fleets not generated yet.
    Setup,
    InProgress,
    Finished { winner: Side },
}

/// What a single call to [`Game::play_turn`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    pub side: Side,
    pub result: ShotResult,
    /// The same side moves again.
    pub repeat: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("the match has not been set up")]
    NotStarted,
    #[error("the match is past its setup phase")]
    NotInSetup,
    #[error("the match is already over")]
    AlreadyFinished,
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Player(#[from] PlayerError),
}

struct Seat {
    board: Board,
    player: Box<dyn Player>,
}

/// Two boards, two players and the turn order between them.
pub struct Game {
    config: GameConfig,
    seats: [Seat; 2],
    turn: usize,
    shots: [usize; 2],
    status: GameStatus,
}

impl Game {
    /// A match in `Setup`: boards are empty until [`Game::setup`] runs.
    pub fn new(config: GameConfig, first: Box<dyn Player>, second: Box<dyn Player>) -> Self {
        let size = config.board_size;
        Self {
            config,
            seats: [
                Seat {
                    board: Board::new(size),
                    player: first,
                },
                Seat {
                    board: Board::new(size),
                    player: second,
                },
            ],
            turn: 0,
            shots: [0; 2],
            status: GameStatus::Setup,
        }
    }

    /// A match that starts straight away on prepared boards.
    pub fn with_boards(
        first: (Board, Box<dyn Player>),
        second: (Board, Box<dyn Player>),
    ) -> Self {
        let config = GameConfig::with_size(first.0.size());
        Self {
            config,
            seats: [
                Seat {
                    board: first.0,
                    player: first.1,
                },
                Seat {
                    board: second.0,
                    player: second.1,
                },
            ],
            turn: 0,
            shots: [0; 2],
            status: GameStatus::InProgress,
        }
    }

    /// Generate both fleets and open play. The second side's board is marked
    /// hidden for renderers.
    pub fn setup(&mut self, rng: &mut SmallRng) -> Result<(), GameError> {
        if self.status != GameStatus::Setup {
            return Err(GameError::NotInSetup);
        }
        let generator = FleetGenerator::new(&self.config);
        for seat in self.seats.iter_mut() {
            seat.board = generator.generate(rng)?;
        }
        self.seats[1].board.set_hidden(true);
        self.status = GameStatus::InProgress;
        info!(
            "match set up: {} vs {} on {}x{}",
            self.seats[0].player.label(),
            self.seats[1].player.label(),
            self.config.board_size,
            self.config.board_size
        );
        Ok(())
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Side whose move is next.
    pub fn active_side(&self) -> Side {
        if self.turn % 2 == 0 {
            Side::First
        } else {
            Side::Second
        }
    }

    /// Number of times the move has passed to the other side.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Shots `side` landed on the opponent board (refused targets excluded).
    pub fn shots_fired(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    pub fn board(&self, side: Side) -> &Board {
        &self.seats[side.index()].board
    }

    pub fn player(&self, side: Side) -> &dyn Player {
        self.seats[side.index()].player.as_ref()
    }

    fn seats_for(&mut self, side: Side) -> (&mut Seat, &mut Seat) {
        let [first, second] = &mut self.seats;
        match side {
            Side::First => (first, second),
            Side::Second => (second, first),
        }
    }

    fn winner(&self) -> Option<Side> {
        [Side::First, Side::Second]
            .into_iter()
            .find(|&side| self.board(side).is_fleet_destroyed())
            .map(Side::opponent)
    }

    /// Let the active side make one move.
    ///
    /// A hit or a sink keeps the move with the same side; a miss passes it.
    pub fn play_turn(
        &mut self,
        rng: &mut SmallRng,
        events: &mut dyn EventSink,
    ) -> Result<TurnOutcome, GameError> {
        match self.status {
            GameStatus::Setup => return Err(GameError::NotStarted),
            GameStatus::Finished { .. } => return Err(GameError::AlreadyFinished),
            GameStatus::InProgress => {}
        }

        let side = self.active_side();
        events.notify(&Event::TurnStarted { side });
        let (attacker, defender) = self.seats_for(side);
        let result = attacker
            .player
            .take_turn(side, rng, &mut defender.board, events)?;
        self.shots[side.index()] += 1;

        let repeat = result.grants_repeat();
        if !repeat {
            self.turn += 1;
        }

        if let Some(winner) = self.winner() {
            self.status = GameStatus::Finished { winner };
            info!(
                "{} won after {} shots",
                self.player(winner).label(),
                self.shots_fired(winner)
            );
            events.notify(&Event::MatchWon { winner });
        }

        Ok(TurnOutcome {
            side,
            result,
            repeat,
        })
    }

    /// Play until one fleet is destroyed and return the winner.
    pub fn run(
        &mut self,
        rng: &mut SmallRng,
        events: &mut dyn EventSink,
    ) -> Result<Side, GameError> {
        loop {
            events.boards(&self.seats[0].board, &self.seats[1].board);
            if let GameStatus::Finished { winner } = self.status {
                return Ok(winner);
            }
            self.play_turn(rng, events)?;
        }
    }
}
