//! Fixed-size cell grid shared by ship grids and tracking grids.

use core::fmt;

use crate::common::Cell;
use crate::config::BOARD_SIZE;
use crate::coordinate::{column_letter, Coordinate};

/// A `BOARD_SIZE`×`BOARD_SIZE` matrix of cells, indexed `[row][col]`.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Grid {
    /// Create a grid filled with water.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Water; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Reset every cell to water.
    pub fn initialize(&mut self) {
        for row in self.cells.iter_mut() {
            row.fill(Cell::Water);
        }
    }

    pub fn get(&self, coord: Coordinate) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    pub fn set(&mut self, coord: Coordinate, cell: Cell) {
        self.cells[coord.row()][coord.col()] = cell;
    }

    /// Number of cells currently in the given state.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Returns `true` when every cell is water.
    pub fn is_clear(&self) -> bool {
        self.cells.iter().flatten().all(|&c| c == Cell::Water)
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE]> {
        self.cells.iter()
    }

    /// Text view of the grid: column letters across the top, row digits
    /// down the left side.
    pub fn render(&self) -> alloc::string::String {
        alloc::format!("{}", self)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", column_letter(col))?;
        }
        writeln!(f)?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{}", r)?;
            for cell in row {
                write!(f, " {}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{")?;
        fmt::Display::fmt(self, f)?;
        write!(f, "}}")
    }
}
