//! First-class action types for sliding tic-tac-toe.
//!
//! A click is interpreted by the rules engine as either a placement or a
//! slide. Rejections are values rather than errors: a rejected click can
//! still move the selection marker, so the engine always reports the
//! selection that should be shown next.

use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};

/// A state-changing move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// A new mark is written on an empty square.
    Place {
        /// The player placing the mark.
        player: Player,
        /// Where the mark lands.
        to: Position,
    },
    /// An existing mark moves to an adjacent empty square.
    Slide {
        /// The player sliding the mark.
        player: Player,
        /// Square that is vacated.
        from: Position,
        /// Square that receives the mark.
        to: Position,
    },
}

impl Action {
    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        match self {
            Action::Place { player, .. } | Action::Slide { player, .. } => *player,
        }
    }

    /// Square that receives the mark.
    pub fn to(&self) -> Position {
        match self {
            Action::Place { to, .. } | Action::Slide { to, .. } => *to,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Place { player, to } => write!(f, "{} places at {}", player, to.label()),
            Action::Slide { player, from, to } => {
                write!(f, "{} slides {} -> {}", player, from.label(), to.label())
            }
        }
    }
}

/// Why a click left the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// A line is already complete.
    #[display("Game is already over")]
    GameOver,

    /// The clicked square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The selection holds the opponent's mark during the movement phase.
    #[display("Selected square {} does not hold a {} piece", _0, _1)]
    SelectionLocked(Position, Player),

    /// Movement phase click with nothing picked up.
    #[display("No piece selected")]
    NoSelection,

    /// Movement phase click on a selection that is not the mover's piece.
    #[display("Square {} has no {} piece to slide", _0, _1)]
    NothingToSlide(Position, Player),

    /// Destination is not a king-move away from the selection.
    #[display("Square {} is not adjacent to {}", to, from)]
    NotAdjacent {
        /// Selected square.
        from: Position,
        /// Clicked square.
        to: Position,
    },
}

/// Result of interpreting a single click.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct Click {
    /// Accepted move with the board it produced, or why nothing changed.
    verdict: Result<(Action, Board), Rejection>,
    /// Selection after this click, reported for rejections too.
    selection: Option<Position>,
}

impl Click {
    /// Accepted move and resulting board, or the rejection.
    pub fn verdict(&self) -> &Result<(Action, Board), Rejection> {
        &self.verdict
    }

    /// Selection to show after this click.
    pub fn selection(&self) -> Option<Position> {
        self.selection
    }

    /// Returns true if the click produced a new board.
    pub fn is_accepted(&self) -> bool {
        self.verdict.is_ok()
    }

    /// Returns the new board if the click was accepted.
    pub fn board(&self) -> Option<&Board> {
        self.verdict.as_ref().ok().map(|(_, board)| board)
    }

    /// Returns the rejection if the click was refused.
    pub fn rejection(&self) -> Option<Rejection> {
        self.verdict.as_ref().err().copied()
    }

    /// Splits into verdict and selection.
    pub fn into_parts(self) -> (Result<(Action, Board), Rejection>, Option<Position>) {
        (self.verdict, self.selection)
    }
}
