/// Side length of the square board.
pub const BOARD_SIZE: usize = 6;

/// Number of vessels in a standard fleet.
pub const NUM_SHIPS: usize = 7;

/// Vessel lengths placed on every generated board, largest first.
pub const FLEET: [usize; NUM_SHIPS] = [3, 2, 2, 1, 1, 1, 1];

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Placement attempts allowed for a whole board before generation starts over.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;
