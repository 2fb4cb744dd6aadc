//! Board positions and their king-move neighbourhoods.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the board (0-8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Parse from an index (0-8) or a label such as `center` or `top-left`.
    ///
    /// Labels are matched case-insensitively and must match exactly, so
    /// `center` never resolves to `Top-center`.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return Self::from_index(num);
        }

        let wanted = s.to_lowercase().replace([' ', '_'], "-");
        Self::ALL
            .into_iter()
            .find(|pos| pos.label().to_lowercase() == wanted)
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Cells one king-move away from this one.
    pub fn neighbors(self) -> &'static [Position] {
        use Position::*;
        match self {
            TopLeft => &[TopCenter, MiddleLeft, Center],
            TopCenter => &[TopLeft, TopRight, MiddleLeft, Center, MiddleRight],
            TopRight => &[TopCenter, Center, MiddleRight],
            MiddleLeft => &[TopLeft, TopCenter, Center, BottomLeft, BottomCenter],
            Center => &[
                TopLeft,
                TopCenter,
                TopRight,
                MiddleLeft,
                MiddleRight,
                BottomLeft,
                BottomCenter,
                BottomRight,
            ],
            MiddleRight => &[TopCenter, TopRight, Center, BottomCenter, BottomRight],
            BottomLeft => &[MiddleLeft, Center, BottomCenter],
            BottomCenter => &[MiddleLeft, Center, MiddleRight, BottomLeft, BottomRight],
            BottomRight => &[Center, MiddleRight, BottomCenter],
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), i);
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_parse_label_and_number() {
        assert_eq!(Position::from_label_or_number("4"), Some(Position::Center));
        assert_eq!(Position::from_label_or_number("center"), Some(Position::Center));
        assert_eq!(
            Position::from_label_or_number("Top center"),
            Some(Position::TopCenter)
        );
        assert_eq!(
            Position::from_label_or_number("bottom_right"),
            Some(Position::BottomRight)
        );
        assert_eq!(Position::from_label_or_number("12"), None);
        assert_eq!(Position::from_label_or_number("middle"), None);
    }

    #[test]
    fn test_every_label_parses_back() {
        for pos in Position::ALL {
            assert_eq!(Position::from_label_or_number(pos.label()), Some(pos));
            assert_eq!(
                Position::from_label_or_number(&pos.label().to_uppercase()),
                Some(pos)
            );
        }
    }
}
