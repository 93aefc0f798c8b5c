use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::BoardView;
use crate::coord::Coord;
use crate::events::{EventSink, Side};
use crate::player::{Player, PlayerError};

/// Automated player: fires at uniformly random cells it has not tried yet.
pub struct AiPlayer {
    label: &'static str,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self { label: "Computer" }
    }

    pub fn with_label(label: &'static str) -> Self {
        Self { label }
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn label(&self) -> &str {
        self.label
    }

    fn choose_target(
        &mut self,
        _side: Side,
        rng: &mut SmallRng,
        opponent: &BoardView,
        _events: &mut dyn EventSink,
    ) -> Result<Coord, PlayerError> {
        if opponent.untried_count() == 0 {
            return Err(PlayerError::NoTargetsLeft);
        }
        let size = opponent.size() as i32;
        loop {
            let c = Coord::new(rng.random_range(0..size), rng.random_range(0..size));
            if opponent.is_untried(c) {
                return Ok(c);
            }
        }
    }
}
