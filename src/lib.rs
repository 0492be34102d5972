//! Sea battle between a human and the computer on a 6×6 board.
//!
//! [`core`] holds the game rules and the match state machine, [`player`] the
//! targeting strategies, and with the `std` feature [`ui`] and the logger give
//! the console shell what it needs.

pub mod core;
#[cfg(feature = "std")]
mod logging;
pub mod player;
#[cfg(feature = "std")]
pub mod ui;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level, LOG_ENV};
pub use player::*;
