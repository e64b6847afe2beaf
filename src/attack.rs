use crate::common::{AttackResult, Cell};
use crate::coordinate::Coordinate;
use crate::grid::Grid;

/// Resolve an attack at `target` against the opponent's ship grid, marking
/// the outcome on the attacker's tracking grid.
///
/// The opponent grid is never modified. Attacking the same coordinate again
/// yields the same result and leaves the tracking cell unchanged.
pub fn resolve_attack(
    target: Coordinate,
    opponent_ships: &Grid,
    tracking: &mut Grid,
) -> AttackResult {
    let result = if opponent_ships.get(target) == Cell::Ship {
        AttackResult::Hit
    } else {
        AttackResult::Miss
    };
    tracking.set(target, result.cell());
    result
}
