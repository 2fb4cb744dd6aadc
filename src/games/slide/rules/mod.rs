//! Game rules for sliding tic-tac-toe.
//!
//! This module contains pure functions over a single board snapshot.
//! Rules are separated from board storage and history so the session
//! controller can compose them without owning any rule logic itself.

pub mod adjacency;
pub mod engine;
pub mod phase;
pub mod win;

pub use adjacency::is_adjacent;
pub use engine::apply_action;
pub use phase::{MOVEMENT_THRESHOLD, phase};
pub use win::{LINES, check_winner};
