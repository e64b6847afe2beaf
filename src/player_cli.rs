#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock};
use std::string::String;

use anyhow::Context;

use crate::game::PlayerId;
use crate::grid::Grid;
use crate::player::Player;

/// Reads one line per turn from a buffered reader, normally stdin.
pub struct CliPlayer<R> {
    reader: R,
    line: String,
}

impl CliPlayer<StdinLock<'static>> {
    /// Read moves from the process's standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> CliPlayer<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }
}

impl<R: BufRead> Player for CliPlayer<R> {
    fn next_move(
        &mut self,
        player: PlayerId,
        _tracking: &Grid,
    ) -> anyhow::Result<Option<String>> {
        self.line.clear();
        let read = self
            .reader
            .read_line(&mut self.line)
            .with_context(|| format!("failed to read input for {}", player))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(&self.line).to_string()))
    }
}

/// Remove a trailing `\n` or `\r\n`, leaving any other whitespace in place.
fn strip_line_ending(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}
