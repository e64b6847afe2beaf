//! Sources of coordinate input for the players.

use alloc::collections::VecDeque;
use alloc::string::String;

use crate::game::PlayerId;
use crate::grid::Grid;

/// Supplies one line of coordinate text per turn.
///
/// A single source may serve both seats (hotseat play); `player` says who is
/// about to move and `tracking` is the board they are looking at.
pub trait Player {
    /// Next raw input line without its line terminator, or `None` once the
    /// source is exhausted.
    fn next_move(
        &mut self,
        player: PlayerId,
        tracking: &Grid,
    ) -> anyhow::Result<Option<String>>;
}

/// Replays a fixed list of inputs in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    moves: VecDeque<String>,
}

impl ScriptedPlayer {
    pub fn new<I, S>(moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            moves: moves.into_iter().map(Into::into).collect(),
        }
    }

    /// Inputs not yet consumed.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Player for ScriptedPlayer {
    fn next_move(
        &mut self,
        _player: PlayerId,
        _tracking: &Grid,
    ) -> anyhow::Result<Option<String>> {
        Ok(self.moves.pop_front())
    }
}
