//! Strictly Slide - two-phase tic-tac-toe with time-travel history
//!
//! Players place three marks each. Once six marks are down, every turn
//! slides one of the mover's own marks to a neighbouring empty square.
//! Every accepted move is recorded so the game can jump back to any
//! earlier board and branch from there.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over one board (win, phase, adjacency, clicks)
//! - **History**: board snapshots with a movable pointer
//! - **Game**: session controller owning history and selection
//! - **Driver**: line-oriented terminal front end
//!
//! # Example
//!
//! ```
//! use strictly_slide::{Game, Position, Status, Player};
//!
//! let mut game = Game::new();
//! assert!(game.click(Position::Center).is_accepted());
//! assert_eq!(game.status(), Status::NextPlayer(Player::O));
//! assert_eq!(game.status().to_string(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod driver;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, SlideConfig};

// Crate-level exports - Terminal driver
pub use driver::{Command, CommandError, Driver, parse_cell};

// Crate-level exports - Game types
pub use games::slide::{
    Action, Board, Click, Game, GameState, GameView, JumpError, Mark, MoveEntry, MoveList, Phase,
    Player, Position, Rejection, Square, Status,
};

// Crate-level exports - Rules and invariants
pub use games::slide::invariants;
pub use games::slide::rules;
