//! Random fleet placement onto a ship grid.

use alloc::vec::Vec;

use log::debug;
use rand::Rng;

use crate::common::{Cell, PlacementError};
use crate::config::{BOARD_SIZE, DEFAULT_PLACEMENT_ATTEMPTS, FLEET};
use crate::coordinate::Coordinate;
use crate::grid::Grid;
use crate::ship::{Orientation, Placement, ShipDef};

/// Places ships at uniformly random positions without overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipPlacer {
    max_attempts: usize,
}

impl ShipPlacer {
    /// Placer that tries `max_attempts` random samples per ship before
    /// scanning the grid for the first free position.
    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// Place the standard fleet onto a water-only grid, returning the
    /// placements in fleet order.
    pub fn place_fleet<R: Rng>(
        &self,
        grid: &mut Grid,
        rng: &mut R,
    ) -> Result<Vec<Placement>, PlacementError> {
        self.place_ships(grid, rng, &FLEET)
    }

    /// Place an arbitrary list of ships, in order, onto a water-only grid.
    pub fn place_ships<R: Rng>(
        &self,
        grid: &mut Grid,
        rng: &mut R,
        ships: &[ShipDef],
    ) -> Result<Vec<Placement>, PlacementError> {
        if !grid.is_clear() {
            return Err(PlacementError::GridNotClear);
        }
        let mut placed = Vec::with_capacity(ships.len());
        for &ship in ships {
            let placement = match self.random_placement(grid, rng, ship) {
                Some(p) => p,
                None => {
                    debug!(
                        "{} not placed after {} samples, scanning for space",
                        ship.name(),
                        self.max_attempts
                    );
                    first_fit(grid, ship)?
                }
            };
            place(grid, &placement)?;
            debug!(
                "placed {} at {} {:?}",
                ship.name(),
                placement.anchor(),
                placement.orientation()
            );
            placed.push(placement);
        }
        Ok(placed)
    }

    /// Sample orientation and anchor until the ship fits, giving up after
    /// `max_attempts` samples.
    pub fn random_placement<R: Rng>(
        &self,
        grid: &Grid,
        rng: &mut R,
        ship: ShipDef,
    ) -> Option<Placement> {
        for _ in 0..self.max_attempts {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let row = rng.random_range(0..BOARD_SIZE);
            let col = rng.random_range(0..BOARD_SIZE);
            let Ok(anchor) = Coordinate::new(row, col) else {
                continue;
            };
            if let Ok(placement) = Placement::new(ship, anchor, orientation) {
                if fits(grid, &placement) {
                    return Some(placement);
                }
            }
        }
        None
    }
}

impl Default for ShipPlacer {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEMENT_ATTEMPTS)
    }
}

/// Returns `true` if every cell the placement covers is water.
pub fn fits(grid: &Grid, placement: &Placement) -> bool {
    placement.cells().all(|c| grid.get(c) == Cell::Water)
}

/// Mark the placement's cells as ship, refusing to overlap existing ships.
pub fn place(grid: &mut Grid, placement: &Placement) -> Result<(), PlacementError> {
    if !fits(grid, placement) {
        return Err(PlacementError::Overlaps {
            ship: placement.ship().name(),
        });
    }
    for coord in placement.cells() {
        grid.set(coord, Cell::Ship);
    }
    Ok(())
}

/// First position, in row-major anchor order with horizontal tried before
/// vertical, where the ship fits.
fn first_fit(grid: &Grid, ship: ShipDef) -> Result<Placement, PlacementError> {
    Coordinate::all()
        .flat_map(|anchor| {
            Orientation::ALL
                .into_iter()
                .filter_map(move |o| Placement::new(ship, anchor, o).ok())
        })
        .find(|placement| fits(grid, placement))
        .ok_or(PlacementError::NoRoom {
            ship: ship.name(),
            length: ship.length(),
        })
}
