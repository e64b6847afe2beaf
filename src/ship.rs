//! Ship definitions and straight-line placements.

use crate::common::PlacementError;
use crate::coordinate::Coordinate;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Extends to the right along a row, one column per segment.
    Horizontal,
    /// Extends downward along a column, one row per segment.
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    /// `(row, col)` step between consecutive segments.
    const fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShipDef {
    name: &'static str,
    length: usize,
}

impl ShipDef {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship laid out on the grid: its anchor is the top-left segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    ship: ShipDef,
    anchor: Coordinate,
    orientation: Orientation,
}

impl Placement {
    /// Lay `ship` out from `anchor` in the given orientation.
    ///
    /// Horizontal ships are bounds-checked on the column axis and vertical
    /// ships on the row axis; a ship that would run off the grid is rejected.
    pub fn new(
        ship: ShipDef,
        anchor: Coordinate,
        orientation: Orientation,
    ) -> Result<Self, PlacementError> {
        let (d_row, d_col) = orientation.step();
        let last = ship.length().saturating_sub(1);
        if anchor.offset(d_row * last, d_col * last).is_none() {
            return Err(PlacementError::OutOfBounds { ship: ship.name() });
        }
        Ok(Self {
            ship,
            anchor,
            orientation,
        })
    }

    pub fn ship(&self) -> ShipDef {
        self.ship
    }

    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Coordinates covered by the ship, starting at the anchor.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let (d_row, d_col) = self.orientation.step();
        // Bounds were checked in `new`, so every offset lands on the board.
        (0..self.ship.length()).filter_map(move |i| self.anchor.offset(d_row * i, d_col * i))
    }

    /// Returns `true` if the ship covers `coord`.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells().any(|c| c == coord)
    }
}
