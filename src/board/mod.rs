//! The game board: topic set, cell positions, and board generation.

pub mod generate;
pub mod position;
pub mod topics;

pub use generate::Board;
pub use position::Position;
pub use topics::{TopicId, BOARD_CELLS, START_TOPIC};
