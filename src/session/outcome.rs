//! Structured results the session hands back to the rendering layer.
//!
//! The engine never schedules timers or waits: each operation returns
//! one of these values synchronously and the presentation layer decides
//! how to animate before showing it.

use serde::{Deserialize, Serialize};

use crate::board::{Position, TopicId};
use crate::core::{PlayerId, PlayerStatus};
use crate::events::EventRecord;

/// A drawn event whose impact has been applied.
///
/// Produced for special-topic landings (leverage fixed at 0) and for
/// reveals of ordinary-topic events; also the entry type of the game
/// log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedEvent {
    /// Who the event happened to.
    pub player: PlayerId,
    /// Topic of the cell the player landed on.
    pub topic: TopicId,
    /// The full drawn record, annotations included.
    pub record: EventRecord,
    /// Leverage applied: the clamped choice, or 0 for special topics.
    pub leverage: i64,
    /// The cash change actually applied.
    pub cash_delta: f64,
    /// The player's standing after the event.
    pub status: PlayerStatus,
}

/// The visible part of an event still awaiting its leverage choice.
///
/// Deliberately excludes the impact and annotations: those stay hidden
/// until the reveal, which is the point of the leverage decision.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PendingView {
    /// Who must choose a leverage.
    pub player: PlayerId,
    /// Topic of the cell landed on.
    pub topic: TopicId,
    /// Display text of the drawn event.
    pub text: String,
}

/// What happened after the die moved a player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Landing {
    /// The topic has no registered events; nothing applied, the turn
    /// passed on.
    NoEventData {
        /// The data-less topic.
        topic: TopicId,
    },
    /// A special topic resolved immediately, leverage-free.
    Special(ResolvedEvent),
    /// An ordinary topic drew an event now awaiting its reveal.
    Pending(PendingView),
}

/// Result of a successful dice roll.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// The player who rolled.
    pub player: PlayerId,
    /// The die value, in `1..=6`.
    pub die: u8,
    /// The player's position after moving.
    pub position: Position,
    /// How the landing resolved.
    pub landing: Landing,
}
