use hotseat_battleship::{
    AttackResult, Cell, Coordinate, CoordinateError, GameEngine, GameError, GameStatus, Grid,
    Orientation, Placement, PlacementError, PlayerId, RepeatPolicy, Rules, ShipDef, TurnOutcome,
    FLEET, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Fleet laid out in the top-left corner: rows 0-3 hold ships of length
/// 2, 3, 4 and 5, all starting in column A.
const CORNER_FLEET: [&str; 14] = [
    "A0", "B0", "A1", "B1", "C1", "A2", "B2", "C2", "D2", "A3", "B3", "C3", "D3", "E3",
];

fn grid_with_ships(cells: &[&str]) -> Grid {
    let mut grid = Grid::new();
    for c in cells {
        grid.set(Coordinate::parse(c).unwrap(), Cell::Ship);
    }
    grid
}

/// One ship per row from column A, in fleet order.
fn corner_layout() -> Vec<Placement> {
    FLEET
        .iter()
        .enumerate()
        .map(|(row, &ship)| {
            let anchor = Coordinate::new(row, 0).unwrap();
            Placement::new(ship, anchor, Orientation::Horizontal).unwrap()
        })
        .collect()
}

fn corner_game(rules: Rules) -> GameEngine {
    GameEngine::from_fleets([corner_layout(), corner_layout()], rules).unwrap()
}

#[test]
fn test_new_game_places_both_fleets() {
    let mut rng = SmallRng::seed_from_u64(99);
    let engine = GameEngine::new(&mut rng, Rules::default()).unwrap();
    for player in PlayerId::BOTH {
        assert_eq!(engine.ship_grid(player).count(Cell::Ship), TOTAL_SHIP_CELLS);
        assert!(engine.tracking_grid(player).is_clear());
        assert_eq!(engine.fleet(player).len(), 4);
        assert_eq!(engine.hits(player), 0);
    }
    assert_eq!(
        engine.status(),
        GameStatus::InProgress {
            turn: PlayerId::One
        }
    );
    assert_eq!(engine.turns_played(), 0);
}

#[test]
fn test_hit_on_a0() {
    let mut engine = corner_game(Rules::default());
    let outcome = engine.play_turn("A0").unwrap();
    assert_eq!(
        outcome,
        TurnOutcome::Attack {
            target: Coordinate::new(0, 0).unwrap(),
            result: AttackResult::Hit
        }
    );
    assert_eq!(outcome.message(), "Hit!");
    assert_eq!(
        engine.tracking_grid(PlayerId::One).get(Coordinate::new(0, 0).unwrap()),
        Cell::Hit
    );
    // Player 2's ships are untouched.
    assert_eq!(engine.ship_grid(PlayerId::Two), &grid_with_ships(&CORNER_FLEET));
    assert_eq!(engine.current_player(), PlayerId::Two);
}

#[test]
fn test_miss_message() {
    let mut engine = corner_game(Rules::default());
    let outcome = engine.play_turn("J9").unwrap();
    assert_eq!(outcome.message(), "Miss!");
    assert_eq!(
        engine.tracking_grid(PlayerId::One).get(Coordinate::parse("J9").unwrap()),
        Cell::Miss
    );
}

#[test]
fn test_invalid_input_consumes_turn_without_mutation() {
    let mut engine = corner_game(Rules::default());
    let before = engine.clone();
    let outcome = engine.play_turn("Z9").unwrap();
    assert_eq!(outcome, TurnOutcome::Invalid(CoordinateError::ColumnOutOfRange('Z')));
    assert_eq!(outcome.message(), "Invalid input!");
    for player in PlayerId::BOTH {
        assert_eq!(engine.ship_grid(player), before.ship_grid(player));
        assert_eq!(engine.tracking_grid(player), before.tracking_grid(player));
    }
    assert_eq!(engine.current_player(), PlayerId::Two);
    assert_eq!(engine.turns_played(), 1);
}

#[test]
fn test_turns_alternate() {
    let mut engine = corner_game(Rules::default());
    engine.play_turn("A0").unwrap();
    engine.play_turn("J9").unwrap();
    engine.play_turn("nonsense").unwrap();
    assert_eq!(engine.current_player(), PlayerId::Two);
    assert_eq!(engine.hits(PlayerId::One), 1);
    assert_eq!(engine.tracking_grid(PlayerId::Two).count(Cell::Miss), 1);
    assert_eq!(engine.turns_played(), 3);
}

#[test]
fn test_repeat_attack_allowed_by_default() {
    let mut engine = corner_game(Rules::default());
    engine.play_turn("B0").unwrap();
    engine.play_turn("J9").unwrap();
    let again = engine.play_turn("B0").unwrap();
    assert_eq!(again.message(), "Hit!");
    assert_eq!(engine.hits(PlayerId::One), 1);
}

#[test]
fn test_repeat_attack_rejected_when_configured() {
    let rules = Rules {
        repeat_attacks: RepeatPolicy::Reject,
        ..Rules::default()
    };
    let mut engine = corner_game(rules);
    engine.play_turn("J5").unwrap();
    engine.play_turn("J9").unwrap();
    let tracking_before = *engine.tracking_grid(PlayerId::One);

    let again = engine.play_turn("J5").unwrap();
    assert_eq!(again, TurnOutcome::Repeated(Coordinate::parse("J5").unwrap()));
    assert_eq!(again.message(), "Already attacked!");
    assert_eq!(engine.tracking_grid(PlayerId::One), &tracking_before);
    assert_eq!(engine.current_player(), PlayerId::Two);
}

#[test]
fn test_fourteen_hits_win_for_player_one() {
    let mut engine = corner_game(Rules::default());
    for (i, target) in CORNER_FLEET.iter().enumerate() {
        assert!(matches!(engine.status(), GameStatus::InProgress { .. }));
        assert_eq!(engine.play_turn(target).unwrap().message(), "Hit!");
        if i + 1 < CORNER_FLEET.len() {
            // Player 2 wastes every turn.
            assert_eq!(engine.play_turn("J9").unwrap().message(), "Miss!");
        }
    }
    assert_eq!(engine.hits(PlayerId::One), TOTAL_SHIP_CELLS);
    assert_eq!(
        engine.status(),
        GameStatus::Over {
            winner: PlayerId::One
        }
    );
    assert_eq!(engine.play_turn("A0"), Err(GameError::GameOver));

    let summary = engine.summary();
    assert_eq!(summary.winner, Some(PlayerId::One));
    assert_eq!(summary.turns, 27);
    assert_eq!(summary.hits, [14, 0]);
}

#[test]
fn test_player_two_can_win() {
    let mut engine = corner_game(Rules::default());
    for target in CORNER_FLEET {
        engine.play_turn("xx").unwrap();
        engine.play_turn(target).unwrap();
    }
    assert_eq!(
        engine.status(),
        GameStatus::Over {
            winner: PlayerId::Two
        }
    );
}

#[test]
fn test_thirteen_hits_is_not_over() {
    let mut engine = corner_game(Rules::default());
    for target in &CORNER_FLEET[..13] {
        engine.play_attack(Coordinate::parse(target).unwrap()).unwrap();
        engine.play_turn("").unwrap();
    }
    assert_eq!(engine.hits(PlayerId::One), 13);
    assert!(matches!(engine.status(), GameStatus::InProgress { .. }));
    assert_eq!(engine.summary().winner, None);
}

#[test]
fn test_player_display() {
    assert_eq!(PlayerId::One.to_string(), "Player 1");
    assert_eq!(PlayerId::Two.to_string(), "Player 2");
    assert_eq!(PlayerId::One.opponent(), PlayerId::Two);
    assert_eq!(PlayerId::Two.opponent(), PlayerId::One);
}

#[test]
fn test_independent_sessions() {
    let mut first = corner_game(Rules::default());
    let second = corner_game(Rules::default());
    first.play_turn("A0").unwrap();
    assert_eq!(first.hits(PlayerId::One), 1);
    assert_eq!(second.hits(PlayerId::One), 0);
}

#[test]
fn test_fixed_fleets_are_recorded() {
    let engine = corner_game(Rules::default());
    for player in PlayerId::BOTH {
        assert_eq!(engine.fleet(player), corner_layout().as_slice());
        assert_eq!(engine.ship_grid(player), &grid_with_ships(&CORNER_FLEET));
        assert_eq!(engine.ship_grid(player).count(Cell::Ship), TOTAL_SHIP_CELLS);
    }
}

#[test]
fn test_fixed_fleets_must_match_the_fleet() {
    let empty = GameEngine::from_fleets([Vec::new(), corner_layout()], Rules::default());
    assert_eq!(
        empty.unwrap_err(),
        GameError::Placement(PlacementError::FleetMismatch)
    );

    let mut partial = corner_layout();
    partial.pop();
    let result = GameEngine::from_fleets([corner_layout(), partial], Rules::default());
    assert_eq!(
        result.unwrap_err(),
        GameError::Placement(PlacementError::FleetMismatch)
    );

    let mut reordered = corner_layout();
    reordered.swap(0, 3);
    let result = GameEngine::from_fleets([reordered, corner_layout()], Rules::default());
    assert_eq!(
        result.unwrap_err(),
        GameError::Placement(PlacementError::FleetMismatch)
    );

    let mut extra = corner_layout();
    let spare = ShipDef::new("Spare", 2);
    let anchor = Coordinate::new(9, 0).unwrap();
    extra.push(Placement::new(spare, anchor, Orientation::Horizontal).unwrap());
    let result = GameEngine::from_fleets([extra, corner_layout()], Rules::default());
    assert_eq!(
        result.unwrap_err(),
        GameError::Placement(PlacementError::FleetMismatch)
    );
}

#[test]
fn test_fixed_fleets_must_not_overlap() {
    let mut crossing = corner_layout();
    // The carrier runs down column B through the destroyer.
    crossing[3] =
        Placement::new(FLEET[3], Coordinate::new(0, 1).unwrap(), Orientation::Vertical).unwrap();
    let result = GameEngine::from_fleets([corner_layout(), crossing], Rules::default());
    assert_eq!(
        result.unwrap_err(),
        GameError::Placement(PlacementError::Overlaps { ship: "Carrier" })
    );
}

#[test]
fn test_rules_are_kept() {
    let rules = Rules {
        repeat_attacks: RepeatPolicy::Reject,
        placement_attempts: 7,
    };
    let engine = corner_game(rules);
    assert_eq!(engine.rules(), &rules);
    assert_eq!(corner_game(Rules::default()).rules().repeat_attacks, RepeatPolicy::Allow);
}
