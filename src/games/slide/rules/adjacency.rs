//! King-move adjacency on the 3x3 grid.

use super::super::Position;

/// Returns true if `to` is one king-move away from `from`.
pub fn is_adjacent(from: Position, to: Position) -> bool {
    from.neighbors().contains(&to)
}
