#![cfg(feature = "std")]

//! Terminal collaborators: stdin input and printed notifications.

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::input::{parse_coordinate, CoordinateSource, InputError};
use crate::ui::render_side_by_side;
use crate::{Board, Event, EventSink, InvalidMove, ParseError, Side};

/// Reads `"row col"` lines from standard input, prompting before each.
pub struct StdinSource {
    prompt: String,
}

impl StdinSource {
    pub fn new() -> Self {
        Self {
            prompt: String::from("Your move (row col): "),
        }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordinateSource for StdinSource {
    fn request_coordinate(&mut self) -> Result<(i32, i32), InputError> {
        print!("{}", self.prompt);
        io::stdout().flush().map_err(|_| InputError::Closed)?;
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => Err(InputError::Closed),
            Ok(_) => Ok(parse_coordinate(&line)?),
        }
    }
}

/// Prints events as sentences and boards side by side.
pub struct ConsoleReporter {
    names: [String; 2],
}

impl ConsoleReporter {
    pub fn new(first: &str, second: &str) -> Self {
        Self {
            names: [first.into(), second.into()],
        }
    }

    fn name(&self, side: Side) -> &str {
        &self.names[side.index()]
    }

    /// Sentence for an event, as printed.
    pub fn describe(&self, event: &Event) -> String {
        match event {
            Event::TurnStarted { side } => format!("{} to move.", self.name(*side)),
            Event::ShotMissed { side, target } => {
                format!("{} fired at {}: miss.", self.name(*side), target)
            }
            Event::ShipDamaged { side, target } => {
                format!("{} fired at {}: ship damaged!", self.name(*side), target)
            }
            Event::ShipSunk { side, target } => {
                format!("{} fired at {}: ship sunk!", self.name(*side), target)
            }
            Event::InvalidMove { side, reason } => {
                let why = match reason {
                    InvalidMove::OutOfBounds(c) => format!("{} is off the board", c),
                    InvalidMove::AlreadyTargeted(c) => format!("{} was already shot at", c),
                    InvalidMove::ParseFailure(ParseError::WrongTokenCount(_)) => {
                        String::from("enter two numbers: row and column")
                    }
                    InvalidMove::ParseFailure(ParseError::NotANumber(t)) => {
                        format!("'{}' is not a number", t)
                    }
                };
                format!("{}: invalid move, {}. Try again.", self.name(*side), why)
            }
            Event::MatchWon { winner } => format!("{} won the match!", self.name(*winner)),
        }
    }
}

impl EventSink for ConsoleReporter {
    fn notify(&mut self, event: &Event) {
        println!("{}", self.describe(event));
    }

    fn boards(&mut self, first: &Board, second: &Board) {
        println!();
        println!(
            "{}",
            render_side_by_side(
                (&format!("{}:", self.names[0]), first),
                (&format!("{}:", self.names[1]), second),
            )
        );
    }
}
