//! Render-ready snapshot of a game.

use super::game::Game;
use super::history::MoveEntry;
use super::{Phase, Player};
use serde::{Deserialize, Serialize};

/// Everything the presentation layer needs after an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Marks in row-major order, `None` for empty squares.
    pub cells: [Option<Player>; 9],
    /// Status line, e.g. `Next player: O`.
    pub status: String,
    /// Winner on the board on display.
    pub winner: Option<Player>,
    /// Phase of the board on display.
    pub phase: Phase,
    /// Selected square index.
    pub selection: Option<usize>,
    /// Index of the board on display.
    pub current_move: usize,
    /// Jump targets.
    pub moves: Vec<MoveEntry>,
}

impl GameView {
    /// Captures the current state of `game`.
    pub fn from_game(game: &Game) -> Self {
        let status = game.status();
        Self {
            cells: game.board().squares().map(|square| square.player()),
            status: status.to_string(),
            winner: status.winner(),
            phase: game.phase(),
            selection: game.selection().map(|pos| pos.to_index()),
            current_move: game.current_move(),
            moves: game.moves().collect(),
        }
    }

    /// Plain-text rendering: status, board, move list.
    ///
    /// The move on display is marked with `>`.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.status);
        out.push('\n');

        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                let symbol = match self.cells[idx] {
                    Some(player) => player.to_string(),
                    None => idx.to_string(),
                };
                if self.selection == Some(idx) {
                    out.push_str(&format!("[{symbol}]"));
                } else {
                    out.push_str(&format!(" {symbol} "));
                }
                if col < 2 {
                    out.push('|');
                }
            }
            out.push('\n');
            if row < 2 {
                out.push_str("---+---+---\n");
            }
        }

        for entry in &self.moves {
            let marker = if entry.index == self.current_move { '>' } else { ' ' };
            out.push_str(&format!("{marker} {entry}\n"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::slide::Position;

    #[test]
    fn test_view_of_new_game() {
        let view = Game::new().view();
        assert_eq!(view.cells, [None; 9]);
        assert_eq!(view.status, "Next player: X");
        assert_eq!(view.phase, Phase::Placement);
        assert_eq!(view.moves.len(), 1);
    }

    #[test]
    fn test_text_marks_selection_and_current_move() {
        let mut game = Game::new();
        game.click(Position::Center);
        let text = game.view().render_text();

        assert!(text.starts_with("Next player: O\n"));
        assert!(text.contains("[X]"));
        assert!(text.contains("> 1. Go to move #1"));
        assert!(text.contains("  0. Go to game start"));
    }

    #[test]
    fn test_json_shape() {
        let mut game = Game::new();
        game.click(Position::TopLeft);
        let json = serde_json::to_value(game.view()).unwrap();

        assert_eq!(json["cells"][0], "X");
        assert!(json["cells"][1].is_null());
        assert_eq!(json["selection"], 0);
        assert_eq!(json["phase"], "Placement");
        assert_eq!(json["moves"][1]["label"], "Go to move #1");
    }
}
