//! # margincall
//!
//! The game-state engine for a browser-based board game about leveraged
//! financial decisions: players circle a 36-cell board, draw topic-based
//! events, choose a leverage multiplier, and watch their cash and
//! risk-adjusted performance move.
//!
//! ## Design Principles
//!
//! 1. **Engine, not presentation**: the crate owns board generation,
//!    turn sequencing, event resolution, scoring, and win/loss
//!    determination. Rendering, audio, animation timing, and settings
//!    storage are the hosting page's job; it calls in and renders what
//!    comes back.
//!
//! 2. **Synchronous and explicit**: every operation returns a structured
//!    result immediately. The engine never schedules timers; the UI
//!    animates *around* results it already has.
//!
//! 3. **One source of randomness**: a single seedable generator drives
//!    the board shuffle, die rolls, and event picks, so whole games
//!    replay deterministically under a fixed seed.
//!
//! ## Modules
//!
//! - `core`: players, RNG, settings, errors
//! - `board`: the 36-topic set, positions, board generation
//! - `events`: event records, the topic catalog, built-in event data
//! - `scoring`: cash, performance, and status math
//! - `session`: the turn-cycle state machine tying it all together

pub mod board;
pub mod core;
pub mod events;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    GameError, GameRng, GameSettings, Player, PlayerId, PlayerRegistry, PlayerStatus,
    SequenceViolation, MAX_PLAYERS,
};

pub use crate::board::{Board, Position, TopicId, BOARD_CELLS, START_TOPIC};

pub use crate::events::{EventCatalog, EventRecord};

pub use crate::session::{GameSession, Landing, PendingView, ResolvedEvent, RollOutcome, TurnPhase};
