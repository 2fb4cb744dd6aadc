//! Sliding tic-tac-toe: place three marks each, then slide them.

mod action;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{Action, Click, Rejection};
pub use game::Game;
pub use history::{GameState, JumpError, MoveEntry, MoveList};
pub use position::Position;
pub use types::{Board, Phase, Player, Square, Status};
pub use view::GameView;

/// Alias used where a player is referred to by the mark it draws.
pub type Mark = Player;
