//! Session controller tying the rules engine to the board history.

use super::action::Click;
use super::history::{GameState, JumpError, MoveList};
use super::invariants::{InvariantSet, PlayInvariants};
use super::rules::apply_action;
use super::view::GameView;
use super::{Board, Phase, Player, Position, Status};
use tracing::{debug, info, instrument, warn};

/// One game of sliding tic-tac-toe.
///
/// Owns the history and the transient selection. Every input event goes
/// through [`Game::click`] or [`Game::jump`]; the presentation layer reads
/// back [`Game::board`], [`Game::status`] and [`Game::moves`] afterwards.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    selection: Option<Position>,
    reset_selection_on_jump: bool,
}

impl Game {
    /// Creates a new game. Jumping through history clears the selection.
    #[instrument]
    pub fn new() -> Self {
        Self::with_reset_selection_on_jump(true)
    }

    /// Creates a new game with an explicit jump policy.
    ///
    /// With `reset == false` the selection survives a jump and may point at
    /// a square from a different board.
    #[instrument]
    pub fn with_reset_selection_on_jump(reset: bool) -> Self {
        info!("Starting new game");
        Self {
            state: GameState::new(),
            selection: None,
            reset_selection_on_jump: reset,
        }
    }

    /// Handles a click on `pos` by the player to move.
    ///
    /// The selection is updated even when the click is rejected.
    #[instrument(skip(self), fields(current_move = self.state.current_move(), selection = ?self.selection))]
    pub fn click(&mut self, pos: Position) -> Click {
        let click = apply_action(
            self.state.current_board(),
            pos,
            self.state.to_move(),
            self.selection,
        );
        self.selection = click.selection();

        match click.verdict() {
            Ok((action, board)) => {
                info!(%action, "Move played");
                self.state.play(*board);
                if cfg!(debug_assertions) {
                    self.check_invariants();
                }
            }
            Err(reason) => debug!(%reason, "Click rejected"),
        }

        click
    }

    /// Shows the board as it was after move `target`.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError`] if `target` is not in the history; nothing
    /// changes in that case.
    #[instrument(skip(self))]
    pub fn jump(&mut self, target: usize) -> Result<(), JumpError> {
        self.state.jump_to(target)?;
        if self.reset_selection_on_jump {
            self.selection = None;
        }
        info!(current_move = target, selection = ?self.selection, "Jumped");
        Ok(())
    }

    /// Discards the history and starts over.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.state = GameState::new();
        self.selection = None;
    }

    /// Board on display.
    pub fn board(&self) -> &Board {
        self.state.current_board()
    }

    /// Winner or next player for the board on display.
    pub fn status(&self) -> Status {
        self.state.status()
    }

    /// Phase of the board on display.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Player to move on the board on display.
    pub fn to_move(&self) -> Player {
        self.state.to_move()
    }

    /// Currently selected square.
    pub fn selection(&self) -> Option<Position> {
        self.selection
    }

    /// Index of the board on display.
    pub fn current_move(&self) -> usize {
        self.state.current_move()
    }

    /// Jump targets for every recorded board.
    pub fn moves(&self) -> MoveList {
        self.state.move_list()
    }

    /// Underlying history.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Whether jumps clear the selection.
    pub fn resets_selection_on_jump(&self) -> bool {
        self.reset_selection_on_jump
    }

    /// Snapshot of everything the presentation layer renders.
    pub fn view(&self) -> GameView {
        GameView::from_game(self)
    }

    fn check_invariants(&self) {
        let result = PlayInvariants::check_all(&self.state);
        if let Err(violations) = &result {
            for violation in violations {
                warn!(%violation, "History invariant violated");
            }
        }
        debug_assert!(result.is_ok(), "History invariants violated: {result:?}");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::slide::invariants::SlideInvariants;
    use crate::games::slide::{Rejection, Square};
    use crate::games::slide::Position::*;

    fn play_all(game: &mut Game, cells: &[Position]) {
        for &pos in cells {
            assert!(game.click(pos).is_accepted(), "click on {pos} rejected");
        }
    }

    #[test]
    fn test_rejected_click_moves_selection_only() {
        let mut game = Game::new();
        play_all(&mut game, &[Center]);

        let click = game.click(Center);
        assert_eq!(click.rejection(), Some(Rejection::SquareOccupied(Center)));
        assert_eq!(game.selection(), Some(Center));
        assert_eq!(game.current_move(), 1);
    }

    #[test]
    fn test_jump_clears_selection_by_default() {
        let mut game = Game::new();
        play_all(&mut game, &[Center, TopLeft]);
        assert_eq!(game.selection(), Some(TopLeft));

        game.jump(1).unwrap();
        assert_eq!(game.selection(), None);
        assert_eq!(game.board().get(TopLeft), Square::Empty);
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_jump_can_keep_stale_selection() {
        let mut game = Game::with_reset_selection_on_jump(false);
        play_all(&mut game, &[Center, TopLeft]);

        game.jump(1).unwrap();
        assert_eq!(game.selection(), Some(TopLeft));
        assert!(game.board().is_empty(TopLeft));
    }

    #[test]
    fn test_bad_jump_changes_nothing() {
        let mut game = Game::new();
        play_all(&mut game, &[Center]);

        assert!(game.jump(7).is_err());
        assert_eq!(game.current_move(), 1);
        assert_eq!(game.selection(), Some(Center));
    }

    #[test]
    fn test_long_movement_game_keeps_history_consistent() {
        let mut game = Game::new();
        play_all(
            &mut game,
            &[Center, TopLeft, TopCenter, MiddleLeft, MiddleRight, TopRight],
        );

        // Pick up, then slide: X 4->8, O 3->6, X 8->4, O 6->3.
        let cycle = [
            (Center, BottomRight),
            (MiddleLeft, BottomLeft),
            (BottomRight, Center),
            (BottomLeft, MiddleLeft),
        ];
        let start = *game.board();
        for _ in 0..100 {
            for (from, to) in cycle {
                assert!(!game.click(from).is_accepted());
                assert!(game.click(to).is_accepted(), "slide {from} -> {to} rejected");
            }
        }

        assert_eq!(game.current_move(), 406);
        assert_eq!(game.moves().len(), 407);
        assert_eq!(game.board(), &start);
        assert!(SlideInvariants::check_all(game.state()).is_ok());

        game.jump(7).unwrap();
        assert_eq!(game.board().population(), 6);
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_reset_starts_over() {
        let mut game = Game::new();
        play_all(&mut game, &[Center, TopLeft]);
        game.reset();
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.moves().count(), 1);
        assert_eq!(game.selection(), None);
    }
}
