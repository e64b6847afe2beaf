//! Common types for the game: cell states, attack results and errors.

use core::fmt;

use thiserror::Error;

/// State of a single grid cell.
///
/// Ship grids only ever hold `Water` and `Ship`; tracking grids hold `Water`
/// (not yet attacked), `Hit` and `Miss`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Water,
    Ship,
    Hit,
    Miss,
}

impl Cell {
    /// Character used when rendering the cell.
    pub const fn symbol(self) -> char {
        match self {
            Cell::Water => '~',
            Cell::Ship => '*',
            Cell::Hit => 'X',
            Cell::Miss => 'O',
        }
    }

    /// Whether an attack has already been resolved on this tracking cell.
    pub const fn is_resolved(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Outcome of a single attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackResult {
    /// The attacked cell holds part of a ship.
    Hit,
    /// The attacked cell is open water.
    Miss,
}

impl AttackResult {
    /// Status line reported to the players.
    pub const fn message(self) -> &'static str {
        match self {
            AttackResult::Hit => "Hit!",
            AttackResult::Miss => "Miss!",
        }
    }

    /// Mark left on the attacker's tracking grid.
    pub const fn cell(self) -> Cell {
        match self {
            AttackResult::Hit => Cell::Hit,
            AttackResult::Miss => Cell::Miss,
        }
    }
}

/// Reasons a coordinate could not be parsed or constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoordinateError {
    /// Input was not exactly two characters long.
    #[error("expected 2 characters, got {0}")]
    WrongLength(usize),
    /// First character is not an uppercase column letter A-J.
    #[error("column '{0}' is not in A-J")]
    ColumnOutOfRange(char),
    /// Second character is not a digit.
    #[error("row '{0}' is not a digit 0-9")]
    RowNotDigit(char),
    /// Numeric row/column outside the board.
    #[error("({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },
}

/// Errors raised while placing the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// The grid already held something other than water.
    #[error("ship grid must be cleared to water before placing the fleet")]
    GridNotClear,
    /// A ship would extend past the edge of the grid.
    #[error("{ship} does not fit inside the grid at that position")]
    OutOfBounds { ship: &'static str },
    /// A ship would cover a cell that is already occupied.
    #[error("{ship} overlaps another ship")]
    Overlaps { ship: &'static str },
    /// No free run of water is long enough for the ship.
    #[error("no room left for {ship} (length {length})")]
    NoRoom { ship: &'static str, length: usize },
    /// A fixed layout does not list one ship per fleet entry with matching
    /// lengths, in fleet order.
    #[error("fleet must be ships of length 2, 3, 4 and 5, in that order")]
    FleetMismatch,
}

/// Errors returned by the game engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// A turn was requested after the game finished.
    #[error("the game is already over")]
    GameOver,
    /// Fleet placement failed while setting up the game.
    #[error(transparent)]
    Placement(#[from] PlacementError),
}
