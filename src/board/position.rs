//! Board positions: 1-based cell indices that wrap at 36.

use serde::{Deserialize, Serialize};

use super::topics::BOARD_CELLS;

/// A cell position on the board, in `1..=36`.
///
/// Positions are 1-based to match the board's printed cell numbers;
/// advancing past cell 36 wraps back to cell 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position(u8);

impl Position {
    /// The starting cell.
    pub const START: Position = Position(1);

    /// Create a position.
    ///
    /// Panics if `cell` is not in `1..=36`.
    #[must_use]
    pub fn new(cell: u8) -> Self {
        assert!(
            (1..=BOARD_CELLS as u8).contains(&cell),
            "position out of range"
        );
        Self(cell)
    }

    /// The 1-based cell number.
    #[must_use]
    pub const fn cell(self) -> u8 {
        self.0
    }

    /// Index into a board's cell array.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// The position reached by moving `steps` cells forward, wrapping
    /// 36 back to 1.
    #[must_use]
    pub fn advanced(self, steps: u8) -> Position {
        let cells = BOARD_CELLS as u16;
        let zero_based = (u16::from(self.0) - 1 + u16::from(steps)) % cells;
        Position(zero_based as u8 + 1)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
