//! The turn engine: session state machine and its outcome types.

pub mod engine;
pub mod outcome;

pub use engine::{GameSession, TurnPhase};
pub use outcome::{Landing, PendingView, ResolvedEvent, RollOutcome};
