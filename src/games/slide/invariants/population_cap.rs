//! Population invariant: slides relocate marks, they never add them.

use super::super::GameState;
use super::super::rules::MOVEMENT_THRESHOLD;
use super::Invariant;

/// Invariant: no snapshot holds more than six marks.
///
/// Placement stops at the movement threshold and every later move is a
/// slide, so the population is capped for the whole history.
pub struct PopulationCapInvariant;

impl Invariant<GameState> for PopulationCapInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history
            .iter()
            .all(|board| board.population() <= MOVEMENT_THRESHOLD)
    }

    fn description() -> &'static str {
        "No snapshot holds more than six marks"
    }
}
