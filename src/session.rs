#![cfg(feature = "std")]

//! Drives a [`GameEngine`] against an input source and an output writer.

use std::io::Write;

use anyhow::Context;
use log::info;

use crate::game::{GameEngine, GameStatus, GameSummary};
use crate::player::Player;

/// Play until one fleet is sunk or the input runs out.
///
/// Before every turn the acting player is announced and their tracking grid
/// is rendered; after it the outcome ("Hit!", "Miss!", ...) is printed. The
/// transcript ends with the winner, if any, and "Game Over!".
pub fn run_game<S, W>(
    engine: &mut GameEngine,
    input: &mut S,
    out: &mut W,
) -> anyhow::Result<GameSummary>
where
    S: Player + ?Sized,
    W: Write + ?Sized,
{
    loop {
        let player = match engine.status() {
            GameStatus::Over { winner } => {
                writeln!(out, "{} won!", winner)?;
                break;
            }
            GameStatus::InProgress { turn } => turn,
        };
        let tracking = engine.tracking_grid(player);
        writeln!(out, "{}'s turn:", player)?;
        write!(out, "{}", tracking)?;
        out.flush()?;

        let Some(line) = input.next_move(player, tracking)? else {
            info!("input ended after {} turns", engine.turns_played());
            break;
        };
        let outcome = engine
            .play_turn(&line)
            .with_context(|| format!("{} could not play {:?}", player, line))?;
        writeln!(out, "{}", outcome.message())?;
    }
    writeln!(out, "Game Over!")?;
    out.flush()?;

    let summary = engine.summary();
    info!(
        "game finished after {} turns, winner: {:?}",
        summary.turns, summary.winner
    );
    Ok(summary)
}
