//! Vessels: straight ships anchored at a bow cell.

use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::core::common::{Coordinate, PlacementError};

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Cells extend to the right of the bow, along the row.
    Horizontal,
    /// Cells extend downwards from the bow, along the column.
    Vertical,
}

impl Orientation {
    /// `(d_row, d_col)` between consecutive cells.
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

impl Distribution<Orientation> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A vessel with its placement and remaining hit points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    bow: Coordinate,
    length: usize,
    orientation: Orientation,
    hit_points: usize,
}

impl Vessel {
    /// Build an undamaged vessel. Fails for zero length, and for a length no
    /// board coordinate can span.
    pub fn new(
        bow: Coordinate,
        length: usize,
        orientation: Orientation,
    ) -> Result<Self, PlacementError> {
        if length == 0 {
            return Err(PlacementError::EmptyVessel);
        }
        if i32::try_from(length).is_err() {
            return Err(PlacementError::OutOfBounds);
        }
        Ok(Vessel {
            bow,
            length,
            orientation,
            hit_points: length,
        })
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn hit_points(&self) -> usize {
        self.hit_points
    }

    pub fn is_sunk(&self) -> bool {
        self.hit_points == 0
    }

    /// Cells covered by the vessel, starting at the bow.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coordinate> {
        let bow = self.bow;
        let (dr, dc) = self.orientation.step();
        (0..self.length as i32).map(move |i| bow.offset(dr * i, dc * i))
    }

    /// Whether a shot at `coord` would strike this vessel.
    pub fn is_hit_by(&self, coord: Coordinate) -> bool {
        self.occupied_cells().any(|cell| cell == coord)
    }

    /// Take one hit point. Returns `true` if the vessel is now sunk.
    pub(crate) fn register_hit(&mut self) -> bool {
        self.hit_points = self.hit_points.saturating_sub(1);
        self.is_sunk()
    }
}
