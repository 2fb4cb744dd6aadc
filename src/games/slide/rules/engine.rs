//! Click interpretation: selection, placement and slide.

use super::super::action::{Action, Click, Rejection};
use super::super::{Board, Phase, Player, Position, Square};
use super::{check_winner, is_adjacent, phase};
use tracing::{debug, instrument};

/// Interprets a click on `clicked` by `player` against `board`.
///
/// The selection guard runs first in both phases. When it trips, the click is
/// rejected but the clicked square still becomes the selection; this is how a
/// player picks up a piece in the movement phase. Rejections further down in
/// the movement branch leave the selection where it was.
#[instrument(skip(board))]
pub fn apply_action(
    board: &Board,
    clicked: Position,
    player: Player,
    last_selected: Option<Position>,
) -> Click {
    let phase = phase(board);

    if let Some(reason) = selection_guard(board, clicked, player, last_selected, phase) {
        debug!(%reason, "Click rejected, selection moved");
        return Click::new(Err(reason), Some(clicked));
    }

    let mut next = *board;
    match phase {
        Phase::Placement => {
            next.set(clicked, Square::Occupied(player));
            let action = Action::Place {
                player,
                to: clicked,
            };
            debug!(%action, "Placement accepted");
            Click::new(Ok((action, next)), Some(clicked))
        }
        Phase::Movement => match slide_source(board, clicked, player, last_selected) {
            Ok(from) => {
                next.set(from, Square::Empty);
                next.set(clicked, Square::Occupied(player));
                let action = Action::Slide {
                    player,
                    from,
                    to: clicked,
                };
                debug!(%action, "Slide accepted");
                Click::new(Ok((action, next)), Some(clicked))
            }
            Err(reason) => {
                debug!(%reason, "Slide rejected");
                Click::new(Err(reason), last_selected)
            }
        },
    }
}

/// Rejects clicks on finished boards, occupied squares, and movement-phase
/// clicks while the selection holds the opponent's mark.
fn selection_guard(
    board: &Board,
    clicked: Position,
    player: Player,
    last_selected: Option<Position>,
    phase: Phase,
) -> Option<Rejection> {
    if check_winner(board).is_some() {
        return Some(Rejection::GameOver);
    }

    if !board.is_empty(clicked) {
        return Some(Rejection::SquareOccupied(clicked));
    }

    if phase == Phase::Movement {
        if let Some(selected) = last_selected {
            if let Square::Occupied(owner) = board.get(selected) {
                if owner != player {
                    return Some(Rejection::SelectionLocked(selected, player));
                }
            }
        }
    }

    None
}

/// Finds the square a movement-phase click slides from.
///
/// The clicked square is already known to be empty.
fn slide_source(
    board: &Board,
    clicked: Position,
    player: Player,
    last_selected: Option<Position>,
) -> Result<Position, Rejection> {
    let from = last_selected.ok_or(Rejection::NoSelection)?;

    if !is_adjacent(from, clicked) {
        return Err(Rejection::NotAdjacent { from, to: clicked });
    }

    // An empty selection would "slide" nothing into a new mark.
    if board.get(from) != Square::Occupied(player) {
        return Err(Rejection::NothingToSlide(from, player));
    }

    Ok(from)
}
