//! Placement / movement phase detection.

use super::super::{Board, Phase};

/// Marks on the board at which players stop placing and start sliding.
pub const MOVEMENT_THRESHOLD: usize = 6;

/// Returns the phase the board is in.
pub fn phase(board: &Board) -> Phase {
    if board.population() >= MOVEMENT_THRESHOLD {
        Phase::Movement
    } else {
        Phase::Placement
    }
}
