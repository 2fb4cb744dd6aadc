//! Pointer invariant: the current move indexes a recorded snapshot.

use super::super::GameState;
use super::Invariant;

/// Invariant: `current_move < history.len()` and history is never empty.
pub struct PointerInBoundsInvariant;

impl Invariant<GameState> for PointerInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        state.current_move < state.history.len()
    }

    fn description() -> &'static str {
        "Current move points at a recorded snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::slide::Board;

    #[test]
    fn test_new_state_holds() {
        assert!(PointerInBoundsInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_dangling_pointer_violates() {
        let state = GameState {
            history: vec![Board::new()],
            current_move: 1,
        };
        assert!(!PointerInBoundsInvariant::holds(&state));
    }

    #[test]
    fn test_empty_history_violates() {
        let state = GameState {
            history: Vec::new(),
            current_move: 0,
        };
        assert!(!PointerInBoundsInvariant::holds(&state));
    }
}
