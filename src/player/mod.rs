//! Player trait and implementations
//!
//! A player only decides where to shoot. The shared turn loop in
//! [`crate::core::game::take_turn`] applies the target to the opponent's board
//! and asks again when the board rejects it.
//! - AiPlayer: uniformly random targets, no memory
//! - CliPlayer: targets typed by a human on a line-based terminal

use rand::rngs::SmallRng;

use crate::core::common::{Coordinate, ShotError, ShotOutcome};

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next target. Bounds and repeats are checked by the board.
    fn select_target(&mut self, rng: &mut SmallRng) -> anyhow::Result<Coordinate>;

    /// Inform the player of the result of a shot that landed.
    fn handle_shot_result(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}

    /// Inform the player that the board refused its target.
    fn handle_rejected_shot(&mut self, _target: Coordinate, _error: ShotError) {}
}

pub mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{parse_coord, CliPlayer};
