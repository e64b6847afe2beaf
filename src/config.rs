use crate::ship::ShipDef;

/// Width and height of every grid.
pub const BOARD_SIZE: usize = 10;
/// Number of cells on a grid.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;
pub const NUM_SHIPS: usize = 4;
/// Fleet placed on every ship grid, in placement order.
pub const FLEET: [ShipDef; NUM_SHIPS] = [
    ShipDef::new("Destroyer", 2),
    ShipDef::new("Cruiser", 3),
    ShipDef::new("Battleship", 4),
    ShipDef::new("Carrier", 5),
];

/// Total number of ship segments in the fleet. A tracking grid holding this
/// many hits ends the game.
pub const TOTAL_SHIP_CELLS: usize = 2 + 3 + 4 + 5;

/// Random samples tried per ship before falling back to a deterministic scan.
pub const DEFAULT_PLACEMENT_ATTEMPTS: usize = 1000;

