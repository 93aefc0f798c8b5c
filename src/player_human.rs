use log::debug;
use rand::rngs::SmallRng;

use crate::board::BoardView;
use crate::coord::Coord;
use crate::events::{Event, EventSink, InvalidMove, Side};
use crate::input::{CoordinateSource, InputError};
use crate::player::{Player, PlayerError};

/// Proxy for a person: targets come from an input collaborator.
pub struct HumanPlayer<S> {
    label: &'static str,
    source: S,
}

impl<S: CoordinateSource> HumanPlayer<S> {
    pub fn new(source: S) -> Self {
        Self {
            label: "You",
            source,
        }
    }

    pub fn with_label(label: &'static str, source: S) -> Self {
        Self { label, source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: CoordinateSource> Player for HumanPlayer<S> {
    fn label(&self) -> &str {
        self.label
    }

    fn choose_target(
        &mut self,
        side: Side,
        _rng: &mut SmallRng,
        _opponent: &BoardView,
        events: &mut dyn EventSink,
    ) -> Result<Coord, PlayerError> {
        loop {
            match self.source.request_coordinate() {
                Ok((row, col)) => return Ok(Coord::from_one_based(row, col)),
                Err(InputError::Parse(err)) => {
                    debug!("unparsable input: {}", err);
                    events.notify(&Event::InvalidMove {
                        side,
                        reason: InvalidMove::ParseFailure(err),
                    });
                }
                Err(InputError::Closed) => return Err(PlayerError::InputClosed),
            }
        }
    }
}
