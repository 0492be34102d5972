//! Randomized board generation with a bounded placement budget.

use log::debug;
use rand::Rng;

use crate::core::board::Board;
use crate::core::common::{Coordinate, GenerationError, PlacementError};
use crate::core::config::{BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::core::ship::{Orientation, Vessel};

/// Builds fully populated boards by random placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardFactory {
    fleet: Vec<usize>,
    max_attempts: usize,
}

impl BoardFactory {
    /// Factory for the given vessel lengths, allowing `max_attempts` placement
    /// tries per board.
    pub fn new(fleet: &[usize], max_attempts: usize) -> Self {
        Self {
            fleet: fleet.to_vec(),
            max_attempts,
        }
    }

    pub fn fleet(&self) -> &[usize] {
        &self.fleet
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Try to place the whole fleet on a fresh board.
    ///
    /// Bows are drawn from `[0, BOARD_SIZE]` on both axes; the last row and
    /// column are off the board and get rejected by the bounds check like any
    /// other bad placement. Every try counts against one budget for the whole
    /// board. On success the board has already entered play.
    pub fn try_generate<R: Rng>(&self, rng: &mut R) -> Result<Board, GenerationError> {
        let mut board = Board::new();
        let mut attempts = 0;
        for &length in &self.fleet {
            loop {
                attempts += 1;
                if attempts > self.max_attempts {
                    return Err(GenerationError::AttemptsExhausted {
                        attempts: self.max_attempts,
                    });
                }
                let bow = Coordinate::new(
                    rng.random_range(0..=BOARD_SIZE as i32),
                    rng.random_range(0..=BOARD_SIZE as i32),
                );
                let orientation: Orientation = rng.random();
                match board.place_vessel(Vessel::new(bow, length, orientation)?) {
                    Ok(()) => break,
                    Err(PlacementError::OutOfBounds | PlacementError::Overlap) => continue,
                    Err(e) => return Err(e.into()),
                }
            }
        }
        debug!("fleet placed after {} attempts", attempts);
        board.begin_play();
        Ok(board)
    }

    /// Generate boards until one succeeds.
    ///
    /// Only an exhausted budget is retried; a fleet that can never be placed
    /// is returned as an error.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Board, GenerationError> {
        let mut regenerations = 0usize;
        loop {
            match self.try_generate(rng) {
                Ok(board) => return Ok(board),
                Err(e @ GenerationError::AttemptsExhausted { .. }) => {
                    regenerations += 1;
                    debug!("{}; regenerating board (#{})", e, regenerations);
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl Default for BoardFactory {
    fn default() -> Self {
        Self::new(&FLEET, MAX_PLACEMENT_ATTEMPTS)
    }
}
