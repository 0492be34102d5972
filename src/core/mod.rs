//! Core sea battle engine
//!
//! Board model, placement rules, shot resolution, random board generation and
//! the two-seat match state machine. Nothing in here touches the terminal;
//! randomness is always passed in by the caller.

pub mod bitboard;
pub mod board;
pub mod common;
pub mod config;
pub mod factory;
pub mod game;
pub mod ship;

// Re-export commonly used types
pub use bitboard::{BitBoard, BitBoardError};
pub use board::{Board, BoardView, CellState};
pub use common::{Coordinate, GenerationError, PlacementError, ShotError, ShotOutcome};
pub use config::*;
pub use factory::BoardFactory;
pub use game::{take_turn, Match, MatchState, TurnReport};
pub use ship::{Orientation, Vessel};
