//! Common types for the engine: coordinates, shot outcomes and errors.

use std::fmt;

use crate::core::bitboard::BitBoardError;

/// A cell position on the board, `(row, col)`, 0-indexed.
///
/// Components are signed so neighbour arithmetic and user input conversion can
/// step off the board; the [`Board`](crate::core::board::Board) decides what
/// is in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The coordinate shifted by `(d_row, d_col)`, saturating at the `i32` limits.
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row.saturating_add(d_row), self.col.saturating_add(d_col))
    }

    /// The 3×3 block centred on this coordinate, itself included.
    pub fn neighbourhood(self) -> impl Iterator<Item = Coordinate> {
        (-1..=1).flat_map(move |dr| (-1..=1).map(move |dc| self.offset(dr, dc)))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Result of a shot that landed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// No vessel at the target.
    Miss,
    /// A vessel was hit and still has hit points left.
    Hit,
    /// The shot took the last hit point of a vessel.
    Destroyed,
}

impl ShotOutcome {
    /// Whether the shooter moves again after this outcome.
    pub fn retains_turn(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::Miss => write!(f, "missed"),
            ShotOutcome::Hit => write!(f, "hit"),
            ShotOutcome::Destroyed => write!(f, "destroyed"),
        }
    }
}

/// Errors returned when a vessel cannot be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// At least one vessel cell lies off the board.
    OutOfBounds,
    /// At least one vessel cell is occupied or inside another vessel's margin.
    Overlap,
    /// Vessels need at least one cell.
    EmptyVessel,
    /// The board has already entered play.
    InPlay,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "Vessel placement is out of bounds"),
            PlacementError::Overlap => {
                write!(f, "Vessel placement overlaps or touches another vessel")
            }
            PlacementError::EmptyVessel => write!(f, "Vessel length must be at least 1"),
            PlacementError::InPlay => write!(f, "Board is already in play"),
        }
    }
}

impl std::error::Error for PlacementError {}

impl From<BitBoardError> for PlacementError {
    fn from(_: BitBoardError) -> Self {
        PlacementError::OutOfBounds
    }
}

/// Errors returned when a shot is rejected. Both are retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// Target is off the board.
    OutOfBounds,
    /// Target was already shot at or lies in a revealed margin.
    AlreadyTargeted,
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::OutOfBounds => write!(f, "Shot is off the board! Try again."),
            ShotError::AlreadyTargeted => {
                write!(f, "That cell was already targeted! Try again.")
            }
        }
    }
}

impl std::error::Error for ShotError {}

impl From<BitBoardError> for ShotError {
    fn from(_: BitBoardError) -> Self {
        ShotError::OutOfBounds
    }
}

/// Errors returned by board generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    /// The placement budget ran out before the fleet was complete.
    AttemptsExhausted { attempts: usize },
    /// The fleet itself cannot be placed, e.g. a zero-length vessel.
    Placement(PlacementError),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::AttemptsExhausted { attempts } => {
                write!(f, "Fleet not placed within {} attempts", attempts)
            }
            GenerationError::Placement(e) => write!(f, "Fleet cannot be placed: {}", e),
        }
    }
}

impl std::error::Error for GenerationError {}

impl From<PlacementError> for GenerationError {
    fn from(err: PlacementError) -> Self {
        GenerationError::Placement(err)
    }
}
