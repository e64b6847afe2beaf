#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use hotseat_battleship::{init_logging, run_game, CliPlayer, GameEngine, RepeatPolicy, Rules};
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, Write};

/// Two players share this terminal and take turns firing at each other's
/// fleet. Enter targets as a column letter and row digit, e.g. `C7`.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Refuse attacks on cells that were already attacked (the turn is still used up).
    #[arg(long)]
    reject_repeats: bool,
    /// Print the final game summary as JSON after the game ends.
    #[arg(long)]
    json_summary: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };
    let rules = Rules {
        repeat_attacks: if cli.reject_repeats {
            RepeatPolicy::Reject
        } else {
            RepeatPolicy::Allow
        },
        ..Rules::default()
    };
    let mut engine = GameEngine::new(&mut rng, rules).context("failed to place the fleets")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut input = CliPlayer::stdin();
    let summary = run_game(&mut engine, &mut input, &mut out)?;

    if cli.json_summary {
        writeln!(out, "{}", serde_json::to_string(&summary)?)?;
    }
    Ok(())
}
