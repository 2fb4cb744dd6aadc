//! Board history with time-travel.

use super::rules::{check_winner, phase};
use super::{Board, Phase, Player, Status};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Ordered board snapshots plus a pointer to the one on display.
///
/// Snapshot 0 is always the empty board. The player to move is derived
/// from the pointer: X on even moves, O on odd.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(super) history: Vec<Board>,
    pub(super) current_move: usize,
}

impl GameState {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
        }
    }

    /// Records `board` as the move after the current one.
    ///
    /// Any snapshots after the current move are discarded first.
    #[instrument(skip(self, board), fields(current_move = self.current_move))]
    pub fn play(&mut self, board: Board) {
        let dropped = self.history.len() - (self.current_move + 1);
        self.history.truncate(self.current_move + 1);
        self.history.push(board);
        self.current_move = self.history.len() - 1;
        debug!(dropped, current_move = self.current_move, "Snapshot recorded");
    }

    /// Moves the pointer to snapshot `target`.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] and leaves the pointer alone if
    /// `target` is past the last snapshot.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, target: usize) -> Result<(), JumpError> {
        if target >= self.history.len() {
            warn!("Jump target outside history");
            return Err(JumpError::OutOfRange {
                target,
                len: self.history.len(),
            });
        }
        self.current_move = target;
        Ok(())
    }

    /// Board at the current move.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Index of the snapshot on display.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// All recorded snapshots.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Player whose turn it is at the current move.
    pub fn to_move(&self) -> Player {
        Player::for_ply(self.current_move)
    }

    /// Phase of the current board.
    pub fn phase(&self) -> Phase {
        phase(self.current_board())
    }

    /// Winner on the current board, or the player to move.
    pub fn status(&self) -> Status {
        match check_winner(self.current_board()) {
            Some(winner) => Status::Winner(winner),
            None => Status::NextPlayer(self.to_move()),
        }
    }

    /// Jump targets, one per snapshot.
    ///
    /// The iterator borrows nothing, so it can be cloned and restarted.
    pub fn move_list(&self) -> MoveList {
        MoveList {
            next: 0,
            len: self.history.len(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// A labelled jump target in the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Snapshot index to jump to.
    pub index: usize,
    /// Button label.
    pub label: String,
}

impl MoveEntry {
    /// Creates the entry for snapshot `index`.
    pub fn new(index: usize) -> Self {
        let label = if index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{index}")
        };
        Self { index, label }
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.index, self.label)
    }
}

/// Lazy iterator over [`MoveEntry`] values.
#[derive(Debug, Clone)]
pub struct MoveList {
    next: usize,
    len: usize,
}

impl Iterator for MoveList {
    type Item = MoveEntry;

    fn next(&mut self) -> Option<MoveEntry> {
        if self.next >= self.len {
            return None;
        }
        let entry = MoveEntry::new(self.next);
        self.next += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveList {}

/// Error returned by [`GameState::jump_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum JumpError {
    /// Target is past the last snapshot.
    #[display("Move {} is out of range (history has {} entries)", target, len)]
    OutOfRange {
        /// Requested snapshot.
        target: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::slide::{Position, Square};

    fn with_mark(board: &Board, pos: Position, player: Player) -> Board {
        let mut next = *board;
        next.set(pos, Square::Occupied(player));
        next
    }

    #[test]
    fn test_new_history_starts_empty() {
        let state = GameState::new();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.current_board(), &Board::new());
        assert_eq!(state.to_move(), Player::X);
        assert_eq!(state.status(), Status::NextPlayer(Player::X));
    }

    #[test]
    fn test_play_advances_pointer_and_turn() {
        let mut state = GameState::new();
        let board = with_mark(state.current_board(), Position::Center, Player::X);
        state.play(board);
        assert_eq!(state.current_move(), 1);
        assert_eq!(state.to_move(), Player::O);
        assert_eq!(state.current_board(), &board);
    }

    #[test]
    fn test_play_after_jump_truncates() {
        let mut state = GameState::new();
        let first = with_mark(&Board::new(), Position::Center, Player::X);
        let second = with_mark(&first, Position::TopLeft, Player::O);
        state.play(first);
        state.play(second);

        state.jump_to(1).unwrap();
        let branch = with_mark(&first, Position::BottomRight, Player::O);
        state.play(branch);

        assert_eq!(state.history(), &[Board::new(), first, branch]);
        assert_eq!(state.current_move(), 2);
    }

    #[test]
    fn test_jump_out_of_range_is_noop() {
        let mut state = GameState::new();
        state.play(with_mark(&Board::new(), Position::Center, Player::X));

        let err = state.jump_to(5).unwrap_err();
        assert_eq!(err, JumpError::OutOfRange { target: 5, len: 2 });
        assert_eq!(state.current_move(), 1);
    }

    #[test]
    fn test_move_list_labels() {
        let mut state = GameState::new();
        state.play(with_mark(&Board::new(), Position::Center, Player::X));
        let labels: Vec<String> = state.move_list().map(|e| e.label).collect();
        assert_eq!(labels, vec!["Go to game start", "Go to move #1"]);
    }

    #[test]
    fn test_move_list_is_restartable() {
        let state = GameState::new();
        let moves = state.move_list();
        assert_eq!(moves.clone().count(), 1);
        assert_eq!(moves.len(), 1);
        assert_eq!(state.move_list().count(), 1);
    }
}
