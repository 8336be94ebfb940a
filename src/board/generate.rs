//! Board generation: fixed start cell plus a shuffled tail.

use serde::{Deserialize, Serialize};

use super::position::Position;
use super::topics::{TopicId, BOARD_CELLS, START_TOPIC};
use crate::core::GameRng;

/// An ordered arrangement of the 36 topics, one per cell.
///
/// Cell 1 is always [`START_TOPIC`]; cells 2-36 hold a uniformly random
/// permutation of the remaining 35 topics. A board is generated once per
/// game (on start), never per turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde(with = "cells_serde")]
    cells: [TopicId; BOARD_CELLS],
}

/// Serde glue for the fixed-size cell array. `serde`'s derive only covers
/// arrays up to length 32, so the `BOARD_CELLS`-length array round-trips
/// through a slice/`Vec` with the same on-the-wire representation.
mod cells_serde {
    use super::{TopicId, BOARD_CELLS};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(cells: &[TopicId; BOARD_CELLS], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        cells.as_slice().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<[TopicId; BOARD_CELLS], D::Error>
    where
        D: Deserializer<'de>,
    {
        let cells: Vec<TopicId> = Vec::deserialize(deserializer)?;
        cells
            .try_into()
            .map_err(|v: Vec<TopicId>| D::Error::invalid_length(v.len(), &"36 board cells"))
    }
}

impl Board {
    /// Generate a fresh board from the given RNG.
    ///
    /// Every call produces an independent permutation; the only state
    /// shared between calls is the injected generator.
    #[must_use]
    pub fn generate(rng: &mut GameRng) -> Self {
        let mut rest: Vec<TopicId> = TopicId::all().skip(1).collect();
        rng.shuffle(&mut rest);

        let mut cells = [START_TOPIC; BOARD_CELLS];
        for (cell, topic) in cells[1..].iter_mut().zip(rest) {
            *cell = topic;
        }
        Self { cells }
    }

    /// The topic at a given position.
    #[must_use]
    pub fn topic_at(&self, pos: Position) -> TopicId {
        self.cells[pos.index()]
    }

    /// All cells in board order.
    #[must_use]
    pub fn cells(&self) -> &[TopicId; BOARD_CELLS] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_cell_is_start_topic() {
        let mut rng = GameRng::new(42);
        for _ in 0..20 {
            let board = Board::generate(&mut rng);
            assert_eq!(board.topic_at(Position::START), START_TOPIC);
        }
    }

    #[test]
    fn test_cells_are_a_permutation() {
        let mut rng = GameRng::new(7);
        let board = Board::generate(&mut rng);

        let mut seen: Vec<u8> = board.cells().iter().map(|t| t.0).collect();
        seen.sort_unstable();
        let expected: Vec<u8> = (0..BOARD_CELLS as u8).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_same_seed_same_board() {
        let board1 = Board::generate(&mut GameRng::new(123));
        let board2 = Board::generate(&mut GameRng::new(123));
        assert_eq!(board1, board2);
    }

    #[test]
    fn test_fresh_permutation_per_call() {
        // Consecutive draws from one generator should differ. A
        // collision is a 1-in-35! coincidence, not flakiness.
        let mut rng = GameRng::new(42);
        let board1 = Board::generate(&mut rng);
        let board2 = Board::generate(&mut rng);
        assert_ne!(board1, board2);
    }

    #[test]
    fn test_serde_round_trip() {
        let board = Board::generate(&mut GameRng::new(5));
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);
    }
}
