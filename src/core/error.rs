//! Error types for the game engine.
//!
//! No error here is fatal: every rejected action leaves the session
//! unchanged and playable. Missing event data and unparseable leverage
//! input are deliberately *not* errors: the first resolves as a no-op
//! event, the second falls back to a leverage of 1.

use thiserror::Error;

use super::player::MAX_PLAYERS;

/// Errors reported by session operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Player count outside the supported range.
    #[error("player count must be between 1 and {MAX_PLAYERS}, got {requested}")]
    InvalidPlayerCount {
        /// The rejected count.
        requested: u8,
    },

    /// The operation is not valid in the session's current phase.
    #[error("action out of sequence: {0}")]
    OutOfSequence(SequenceViolation),
}

/// Why an operation was out of sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceViolation {
    /// `start_game` before any player count was configured.
    NoPlayers,
    /// Rolling or revealing before `start_game`.
    GameNotStarted,
    /// Rolling while a drawn event is still awaiting its reveal.
    RevealPending,
    /// Revealing when no event is pending.
    NothingPending,
    /// Every player has been eliminated or has won.
    NoActivePlayers,
}

impl std::fmt::Display for SequenceViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            SequenceViolation::NoPlayers => "set the player count first",
            SequenceViolation::GameNotStarted => "the game has not started",
            SequenceViolation::RevealPending => "a drawn event is awaiting reveal",
            SequenceViolation::NothingPending => "no event is awaiting reveal",
            SequenceViolation::NoActivePlayers => "no active players remain",
        };
        f.write_str(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GameError::InvalidPlayerCount { requested: 7 };
        assert_eq!(
            err.to_string(),
            "player count must be between 1 and 6, got 7"
        );

        let err = GameError::OutOfSequence(SequenceViolation::RevealPending);
        assert_eq!(
            err.to_string(),
            "action out of sequence: a drawn event is awaiting reveal"
        );
    }
}
