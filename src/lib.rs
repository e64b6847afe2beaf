#![cfg_attr(not(feature = "std"), no_std)]

//! Two-player hotseat Battleship on a 10×10 grid.
//!
//! The core (grids, placement, attacks and the turn engine) builds without
//! `std`; the `std` feature adds the session runner, stdin input, the stderr
//! logger and serde support.

extern crate alloc;

mod attack;
mod common;
mod config;
mod coordinate;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod placer;
mod player;
#[cfg(feature = "std")]
mod player_cli;
#[cfg(feature = "std")]
mod session;
mod ship;

pub use attack::resolve_attack;
pub use common::*;
pub use config::*;
pub use coordinate::Coordinate;
pub use game::*;
pub use grid::Grid;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use placer::{fits, place, ShipPlacer};
pub use player::{Player, ScriptedPlayer};
#[cfg(feature = "std")]
pub use player_cli::CliPlayer;
#[cfg(feature = "std")]
pub use session::run_game;
pub use ship::{Orientation, Placement, ShipDef};
