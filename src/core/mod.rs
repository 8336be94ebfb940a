//! Core engine types: players, RNG, settings, errors.
//!
//! The fundamental building blocks the rest of the engine is assembled
//! from. Nothing here knows about turn sequencing; that lives in
//! `session`.

pub mod error;
pub mod player;
pub mod rng;
pub mod settings;

pub use error::{GameError, SequenceViolation};
pub use player::{Player, PlayerId, PlayerRegistry, PlayerStatus, MAX_PLAYERS};
pub use rng::GameRng;
pub use settings::GameSettings;
