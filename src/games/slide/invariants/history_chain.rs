//! History chain invariant: each snapshot follows from the previous one by
//! a single legal move.

use super::super::rules::{check_winner, is_adjacent, phase};
use super::super::{Board, GameState, Phase, Player, Position, Square};
use super::Invariant;

/// Invariant: snapshot `n` is reachable from snapshot `n - 1` by exactly one
/// legal move for the player to move at `n - 1`.
///
/// Snapshot 0 must be the empty board. A placement fills exactly one empty
/// square; a slide empties one of the mover's squares and fills an adjacent
/// empty one. Nothing follows a won board.
pub struct HistoryChainInvariant;

impl Invariant<GameState> for HistoryChainInvariant {
    fn holds(state: &GameState) -> bool {
        if state.history.first() != Some(&Board::new()) {
            return false;
        }

        state
            .history
            .windows(2)
            .enumerate()
            .all(|(ply, pair)| legal_step(&pair[0], &pair[1], Player::for_ply(ply)))
    }

    fn description() -> &'static str {
        "Each snapshot follows from the previous one by a single legal move"
    }
}

/// Invariant: the newest snapshot follows from the one before it.
///
/// [`GameState::play`] only ever appends, so checking the newest step after
/// each play covers the whole chain in constant time per move.
pub struct LatestStepInvariant;

impl Invariant<GameState> for LatestStepInvariant {
    fn holds(state: &GameState) -> bool {
        match state.history.as_slice() {
            [] => false,
            [only] => *only == Board::new(),
            [.., before, after] => {
                legal_step(before, after, Player::for_ply(state.history.len() - 2))
            }
        }
    }

    fn description() -> &'static str {
        "The newest snapshot follows from the previous one by a single legal move"
    }
}

fn legal_step(before: &Board, after: &Board, player: Player) -> bool {
    if check_winner(before).is_some() {
        return false;
    }

    let mut vacated = Vec::new();
    let mut filled = Vec::new();
    for pos in Position::ALL {
        match (before.get(pos), after.get(pos)) {
            (a, b) if a == b => {}
            (Square::Occupied(p), Square::Empty) if p == player => vacated.push(pos),
            (Square::Empty, Square::Occupied(p)) if p == player => filled.push(pos),
            _ => return false,
        }
    }

    match (phase(before), vacated.as_slice(), filled.as_slice()) {
        (Phase::Placement, [], [_]) => true,
        (Phase::Movement, [from], [to]) => is_adjacent(*from, *to),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::slide::Position::*;

    fn place(board: &Board, pos: Position, player: Player) -> Board {
        let mut next = *board;
        next.set(pos, Square::Occupied(player));
        next
    }

    fn chain(boards: Vec<Board>) -> GameState {
        GameState {
            current_move: boards.len() - 1,
            history: boards,
        }
    }

    fn placements(cells: &[Position]) -> Vec<Board> {
        let mut boards = vec![Board::new()];
        for (ply, &pos) in cells.iter().enumerate() {
            let next = place(boards.last().unwrap(), pos, Player::for_ply(ply));
            boards.push(next);
        }
        boards
    }

    #[test]
    fn test_placements_hold() {
        let state = chain(placements(&[Center, TopLeft, TopCenter]));
        assert!(HistoryChainInvariant::holds(&state));
    }

    #[test]
    fn test_adjacent_slide_holds() {
        let mut boards = placements(&[Center, TopLeft, TopCenter, MiddleLeft, MiddleRight, TopRight]);
        let mut slid = *boards.last().unwrap();
        slid.set(Center, Square::Empty);
        slid.set(BottomRight, Square::Occupied(Player::X));
        boards.push(slid);
        assert!(HistoryChainInvariant::holds(&chain(boards)));
    }

    #[test]
    fn test_distant_slide_violates() {
        let mut boards = placements(&[Center, TopLeft, TopCenter, MiddleLeft, MiddleRight, TopRight]);
        let mut slid = *boards.last().unwrap();
        slid.set(TopCenter, Square::Empty);
        slid.set(BottomLeft, Square::Occupied(Player::X));
        boards.push(slid);
        assert!(!HistoryChainInvariant::holds(&chain(boards)));
    }

    #[test]
    fn test_wrong_player_violates() {
        let boards = vec![Board::new(), place(&Board::new(), Center, Player::O)];
        assert!(!HistoryChainInvariant::holds(&chain(boards)));
    }

    #[test]
    fn test_move_after_win_violates() {
        let mut boards = placements(&[TopLeft, Center, TopCenter, BottomLeft, TopRight]);
        let next = place(boards.last().unwrap(), BottomRight, Player::O);
        boards.push(next);
        assert!(!HistoryChainInvariant::holds(&chain(boards)));
    }

    #[test]
    fn test_latest_step_ignores_earlier_steps() {
        let mut boards = placements(&[Center, TopLeft]);
        boards[0] = place(&Board::new(), BottomRight, Player::X);
        assert!(!HistoryChainInvariant::holds(&chain(boards.clone())));
        assert!(LatestStepInvariant::holds(&chain(boards)));
    }

    #[test]
    fn test_latest_step_flags_bad_newest_step() {
        let mut boards = placements(&[Center, TopLeft]);
        let next = place(boards.last().unwrap(), BottomRight, Player::O);
        boards.push(next);
        assert!(!LatestStepInvariant::holds(&chain(boards)));
    }

    #[test]
    fn test_latest_step_on_fresh_history() {
        assert!(LatestStepInvariant::holds(&GameState::new()));
        let boards = vec![place(&Board::new(), Center, Player::X)];
        assert!(!LatestStepInvariant::holds(&chain(boards)));
    }

    #[test]
    fn test_non_empty_start_violates() {
        let boards = vec![place(&Board::new(), Center, Player::X)];
        assert!(!HistoryChainInvariant::holds(&chain(boards)));
    }
}
