//! Two-player turn engine: owns every grid, alternates turns and detects
//! the end of the game.

use alloc::vec::Vec;
use core::fmt;

use log::{debug, info};
use rand::Rng;

use crate::{
    attack::resolve_attack,
    common::{AttackResult, Cell, CoordinateError, GameError, PlacementError},
    config::{DEFAULT_PLACEMENT_ATTEMPTS, FLEET, TOTAL_SHIP_CELLS},
    coordinate::Coordinate,
    grid::Grid,
    placer::{place, ShipPlacer},
    ship::Placement,
};

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const BOTH: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// 1-based seat number used in messages.
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    fn index(self) -> usize {
        usize::from(self.number() - 1)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// What happens when a player attacks a cell they already resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatPolicy {
    /// Resolve the attack again. The result is the same as the first time.
    #[default]
    Allow,
    /// Report the repeat and consume the turn without touching any grid.
    Reject,
}

/// Runtime options for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub repeat_attacks: RepeatPolicy,
    /// Random samples per ship before placement falls back to a scan.
    pub placement_attempts: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            repeat_attacks: RepeatPolicy::default(),
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for `turn` to attack.
    InProgress { turn: PlayerId },
    /// `winner` has hit every segment of the opposing fleet.
    Over { winner: PlayerId },
}

/// Result of one completed turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A valid coordinate was attacked.
    Attack {
        target: Coordinate,
        result: AttackResult,
    },
    /// The input did not parse; no grid was touched.
    Invalid(CoordinateError),
    /// The coordinate was already resolved and repeats are rejected.
    Repeated(Coordinate),
}

impl TurnOutcome {
    /// Status line reported to the players.
    pub fn message(&self) -> &'static str {
        match self {
            TurnOutcome::Attack { result, .. } => result.message(),
            TurnOutcome::Invalid(_) => "Invalid input!",
            TurnOutcome::Repeated(_) => "Already attacked!",
        }
    }
}

/// Final numbers for a finished (or abandoned) game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSummary {
    /// `None` when play stopped before either fleet was sunk.
    pub winner: Option<PlayerId>,
    pub turns: usize,
    /// Hits scored by player 1 and player 2.
    pub hits: [usize; 2],
}

/// A player's own ships plus their record of attacks on the opponent.
#[derive(Debug, Clone)]
struct Side {
    ships: Grid,
    tracking: Grid,
    fleet: Vec<Placement>,
}

impl Side {
    fn new(ships: Grid, fleet: Vec<Placement>) -> Self {
        Self {
            ships,
            tracking: Grid::new(),
            fleet,
        }
    }

    fn random<R: Rng>(
        placer: &ShipPlacer,
        rng: &mut R,
        player: PlayerId,
    ) -> Result<Self, GameError> {
        let mut ships = Grid::new();
        let fleet = placer.place_fleet(&mut ships, rng)?;
        debug!("{} fleet placed", player);
        Ok(Self::new(ships, fleet))
    }

    fn fixed(fleet: Vec<Placement>) -> Result<Self, PlacementError> {
        let matches_fleet = fleet.len() == FLEET.len()
            && fleet
                .iter()
                .zip(FLEET)
                .all(|(placement, def)| placement.ship().length() == def.length());
        if !matches_fleet {
            return Err(PlacementError::FleetMismatch);
        }
        let mut ships = Grid::new();
        for placement in &fleet {
            place(&mut ships, placement)?;
        }
        Ok(Self::new(ships, fleet))
    }
}

/// Core game logic holding both players' grids.
#[derive(Debug, Clone)]
pub struct GameEngine {
    sides: [Side; 2],
    rules: Rules,
    turn: PlayerId,
    turns_played: usize,
}

impl GameEngine {
    /// Start a game with randomly placed fleets for both players.
    pub fn new<R: Rng>(rng: &mut R, rules: Rules) -> Result<Self, GameError> {
        let placer = ShipPlacer::new(rules.placement_attempts);
        let one = Side::random(&placer, rng, PlayerId::One)?;
        let two = Side::random(&placer, rng, PlayerId::Two)?;
        info!("new game started");
        Ok(Self::from_sides([one, two], rules))
    }

    /// Start a game from fixed fleet layouts, e.g. for scripted play.
    ///
    /// Each layout must hold one ship per [`FLEET`] entry with the same
    /// length, in fleet order, and its ships must not overlap.
    pub fn from_fleets(fleets: [Vec<Placement>; 2], rules: Rules) -> Result<Self, GameError> {
        let [one, two] = fleets;
        let sides = [Side::fixed(one)?, Side::fixed(two)?];
        Ok(Self::from_sides(sides, rules))
    }

    fn from_sides(sides: [Side; 2], rules: Rules) -> Self {
        Self {
            sides,
            rules,
            turn: PlayerId::One,
            turns_played: 0,
        }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Player whose turn it is, regardless of whether the game has ended.
    pub fn current_player(&self) -> PlayerId {
        self.turn
    }

    /// Number of completed turns, invalid ones included.
    pub fn turns_played(&self) -> usize {
        self.turns_played
    }

    /// The player's private grid of ships.
    pub fn ship_grid(&self, player: PlayerId) -> &Grid {
        &self.sides[player.index()].ships
    }

    /// The player's record of attacks against the opponent.
    pub fn tracking_grid(&self, player: PlayerId) -> &Grid {
        &self.sides[player.index()].tracking
    }

    /// Ships placed for the player, in fleet order.
    pub fn fleet(&self, player: PlayerId) -> &[Placement] {
        &self.sides[player.index()].fleet
    }

    /// Hit marks on the player's tracking grid.
    pub fn hits(&self, player: PlayerId) -> usize {
        self.tracking_grid(player).count(Cell::Hit)
    }

    /// Evaluate the end-of-game condition. Player 1 is checked first.
    pub fn status(&self) -> GameStatus {
        match PlayerId::BOTH
            .into_iter()
            .find(|&p| self.hits(p) >= TOTAL_SHIP_CELLS)
        {
            Some(winner) => GameStatus::Over { winner },
            None => GameStatus::InProgress { turn: self.turn },
        }
    }

    /// Play one turn for the current player from raw coordinate text.
    ///
    /// Every completed turn passes play to the other player, including
    /// turns whose input was invalid.
    pub fn play_turn(&mut self, input: &str) -> Result<TurnOutcome, GameError> {
        let attacker = self.attacker()?;
        let outcome = match Coordinate::parse(input) {
            Ok(target) => self.attack(attacker, target),
            Err(err) => {
                debug!("{} entered {:?}: {}", attacker, input, err);
                TurnOutcome::Invalid(err)
            }
        };
        self.finish_turn(attacker);
        Ok(outcome)
    }

    /// Play one turn for the current player against an already parsed target.
    pub fn play_attack(&mut self, target: Coordinate) -> Result<TurnOutcome, GameError> {
        let attacker = self.attacker()?;
        let outcome = self.attack(attacker, target);
        self.finish_turn(attacker);
        Ok(outcome)
    }

    /// Snapshot of the final numbers.
    pub fn summary(&self) -> GameSummary {
        let winner = match self.status() {
            GameStatus::Over { winner } => Some(winner),
            GameStatus::InProgress { .. } => None,
        };
        GameSummary {
            winner,
            turns: self.turns_played,
            hits: PlayerId::BOTH.map(|p| self.hits(p)),
        }
    }

    fn attacker(&self) -> Result<PlayerId, GameError> {
        match self.status() {
            GameStatus::InProgress { turn } => Ok(turn),
            GameStatus::Over { .. } => Err(GameError::GameOver),
        }
    }

    fn attack(&mut self, attacker: PlayerId, target: Coordinate) -> TurnOutcome {
        let [one, two] = &mut self.sides;
        let (own, opponent) = match attacker {
            PlayerId::One => (one, two),
            PlayerId::Two => (two, one),
        };
        let rejects_repeats = self.rules.repeat_attacks == RepeatPolicy::Reject;
        if rejects_repeats && own.tracking.get(target).is_resolved() {
            debug!("{} repeated attack on {}", attacker, target);
            return TurnOutcome::Repeated(target);
        }
        let result = resolve_attack(target, &opponent.ships, &mut own.tracking);
        debug!("{} attacked {}: {:?}", attacker, target, result);
        TurnOutcome::Attack { target, result }
    }

    fn finish_turn(&mut self, attacker: PlayerId) {
        self.turn = attacker.opponent();
        self.turns_played += 1;
    }
}
