use log::debug;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::core::common::Coordinate;
use crate::core::config::BOARD_SIZE;

use super::Player;

/// Automated player firing at uniformly random cells.
///
/// It keeps no record of earlier shots, so repeats are possible; the board
/// rejects them and the turn loop simply asks again.
pub struct AiPlayer {
    name: String,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::named("Computer")
    }

    /// An automated player identified as `name` in the log.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn select_target(&mut self, rng: &mut SmallRng) -> anyhow::Result<Coordinate> {
        let target = Coordinate::new(
            rng.random_range(0..BOARD_SIZE as i32),
            rng.random_range(0..BOARD_SIZE as i32),
        );
        debug!("{} fires at {} {}", self.name, target.row + 1, target.col + 1);
        Ok(target)
    }
}
