//! Board state: grid, cell sets and vessels, with placement and shot resolution.

use std::fmt;

use log::debug;

use crate::core::bitboard::BitBoard;
use crate::core::common::{Coordinate, PlacementError, ShotError, ShotOutcome};
use crate::core::config::BOARD_SIZE;
use crate::core::ship::Vessel;

type CellSet = BitBoard<u64, BOARD_SIZE>;

const _: () = assert!(BOARD_SIZE * BOARD_SIZE <= CellSet::CAPACITY);

/// Visible state of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Empty,
    Ship,
    Miss,
    Hit,
    /// Revealed buffer around a destroyed vessel.
    Margin,
}

impl CellState {
    /// Symbol used when rendering. Ships show as water unless `reveal` is set.
    pub fn symbol(self, reveal: bool) -> char {
        match self {
            CellState::Empty => 'O',
            CellState::Ship if reveal => '■',
            CellState::Ship => 'O',
            CellState::Miss => 'T',
            CellState::Hit => 'X',
            CellState::Margin => '.',
        }
    }
}

/// One player's side of the ocean.
///
/// Three cell sets drive the rules:
/// - `occupied`: cells covered by a vessel;
/// - `reserved_margin`: the placement-only gap around vessels, dropped by
///   [`Board::begin_play`];
/// - `shot_at`: targeted cells plus margins revealed around destroyed vessels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[CellState; BOARD_SIZE]; BOARD_SIZE],
    occupied: CellSet,
    reserved_margin: CellSet,
    shot_at: CellSet,
    vessels: Vec<Vessel>,
    damaged: usize,
    in_play: bool,
}

impl Board {
    /// Create an empty board with no vessels.
    pub fn new() -> Self {
        Board {
            grid: [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE],
            occupied: CellSet::new(),
            reserved_margin: CellSet::new(),
            shot_at: CellSet::new(),
            vessels: Vec::new(),
            damaged: 0,
            in_play: false,
        }
    }

    fn grid_index(coord: Coordinate) -> Option<(usize, usize)> {
        let row = usize::try_from(coord.row).ok()?;
        let col = usize::try_from(coord.col).ok()?;
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some((row, col))
    }

    fn paint(&mut self, coord: Coordinate, state: CellState) {
        if let Some((r, c)) = Self::grid_index(coord) {
            self.grid[r][c] = state;
        }
    }

    /// Returns true if either component lies outside `[0, BOARD_SIZE)`.
    pub fn is_out_of_bounds(&self, coord: Coordinate) -> bool {
        Self::grid_index(coord).is_none()
    }

    /// State of the cell at `coord`, or `None` off the board.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        Self::grid_index(coord).map(|(r, c)| self.grid[r][c])
    }

    /// Vessels in placement order, sunk ones included.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Number of destroyed vessels.
    pub fn damaged(&self) -> usize {
        self.damaged
    }

    /// Whether `coord` can no longer be targeted.
    pub fn is_targeted(&self, coord: Coordinate) -> bool {
        self.shot_at.contains(coord)
    }

    /// Whether `coord` is blocked for new vessels.
    pub fn is_blocked(&self, coord: Coordinate) -> bool {
        (self.occupied | self.reserved_margin).contains(coord)
    }

    pub fn is_in_play(&self) -> bool {
        self.in_play
    }

    /// Mark the 8-neighbourhood of every cell of `vessel`.
    ///
    /// Without `reveal` the free cells become reserved margin, which keeps later
    /// placements from touching the vessel. With `reveal` every cell not yet
    /// shot at becomes untargetable and is painted as margin.
    pub fn mark_adjacency(&mut self, vessel: &Vessel, reveal: bool) {
        for cell in vessel.occupied_cells() {
            for near in cell.neighbourhood() {
                if reveal {
                    if let Ok(true) = self.shot_at.insert(near) {
                        self.paint(near, CellState::Margin);
                    }
                } else if !self.occupied.contains(near) {
                    // Off-board neighbours are simply not recorded.
                    let _ = self.reserved_margin.insert(near);
                }
            }
        }
    }

    /// Place `vessel`, reserving its margin for the rest of the setup.
    ///
    /// Nothing is modified when placement fails.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), PlacementError> {
        if self.in_play {
            return Err(PlacementError::InPlay);
        }
        for cell in vessel.occupied_cells() {
            if self.is_out_of_bounds(cell) {
                return Err(PlacementError::OutOfBounds);
            }
            if self.is_blocked(cell) {
                return Err(PlacementError::Overlap);
            }
        }
        for cell in vessel.occupied_cells() {
            self.occupied.insert(cell)?;
            self.paint(cell, CellState::Ship);
        }
        self.vessels.push(vessel);
        self.mark_adjacency(&vessel, false);
        debug!(
            "placed vessel of length {} at {} ({:?})",
            vessel.length(),
            vessel.bow(),
            vessel.orientation()
        );
        Ok(())
    }

    /// Finish setup: forget the placement margins. Ship cells stay as they are.
    pub fn begin_play(&mut self) {
        self.reserved_margin.clear_all();
        self.in_play = true;
    }

    /// Fire at `coord`.
    pub fn resolve_shot(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        if self.is_out_of_bounds(coord) {
            return Err(ShotError::OutOfBounds);
        }
        if !self.shot_at.insert(coord)? {
            return Err(ShotError::AlreadyTargeted);
        }

        let Some(idx) = self.vessels.iter().position(|v| v.is_hit_by(coord)) else {
            self.paint(coord, CellState::Miss);
            debug!("shot at {}: miss", coord);
            return Ok(ShotOutcome::Miss);
        };

        self.paint(coord, CellState::Hit);
        if !self.vessels[idx].register_hit() {
            debug!("shot at {}: hit vessel {}", coord, idx);
            return Ok(ShotOutcome::Hit);
        }

        let sunk = self.vessels[idx];
        self.damaged += 1;
        self.mark_adjacency(&sunk, true);
        debug!(
            "shot at {}: vessel {} destroyed ({}/{})",
            coord,
            idx,
            self.damaged,
            self.vessels.len()
        );
        Ok(ShotOutcome::Destroyed)
    }

    /// Returns true once every vessel is destroyed. Trivially true with no vessels.
    pub fn is_defeated(&self) -> bool {
        self.damaged == self.vessels.len()
    }

    /// Renderable view of the board. Ship cells are shown only with `reveal`.
    pub fn view(&self, reveal: bool) -> BoardView<'_> {
        BoardView {
            board: self,
            reveal,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view(true), f)
    }
}

/// Text rendering of a [`Board`], with 1-based row and column labels.
#[derive(Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    reveal: bool,
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  |")?;
        for c in 1..=BOARD_SIZE {
            write!(f, " {} |", c)?;
        }
        for (r, row) in self.board.grid.iter().enumerate() {
            write!(f, "\n{} |", r + 1)?;
            for cell in row {
                write!(f, " {} |", cell.symbol(self.reveal))?;
            }
        }
        Ok(())
    }
}
