//! Event records: what a player draws when landing on a topic.

use serde::{Deserialize, Serialize};

/// One drawable event.
///
/// The cash `impact` is the base effect before leverage; on special
/// topics it applies as-is. The five annotation fields are teaching
/// material shown after the reveal; any of them may be empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Display text describing what happened.
    pub text: String,
    /// Base cash effect, signed, before leverage.
    pub impact: f64,
    /// What the event teaches.
    #[serde(default)]
    pub learn: String,
    /// Practical advice tied to the event.
    #[serde(default)]
    pub advice: String,
    /// Event category shown to the player.
    #[serde(default, rename = "type")]
    pub kind: String,
    /// How to face an event like this.
    #[serde(default)]
    pub face: String,
    /// The mindset to keep.
    #[serde(default)]
    pub mind: String,
}

impl EventRecord {
    /// Create a record with the given text and impact, annotations empty.
    pub fn new(text: impl Into<String>, impact: f64) -> Self {
        Self {
            text: text.into(),
            impact,
            learn: String::new(),
            advice: String::new(),
            kind: String::new(),
            face: String::new(),
            mind: String::new(),
        }
    }

    /// Set the teaching note.
    #[must_use]
    pub fn with_learn(mut self, learn: impl Into<String>) -> Self {
        self.learn = learn.into();
        self
    }

    /// Set the advice note.
    #[must_use]
    pub fn with_advice(mut self, advice: impl Into<String>) -> Self {
        self.advice = advice.into();
        self
    }

    /// Set the event category.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Set the facing note.
    #[must_use]
    pub fn with_face(mut self, face: impl Into<String>) -> Self {
        self.face = face.into();
        self
    }

    /// Set the mindset note.
    #[must_use]
    pub fn with_mind(mut self, mind: impl Into<String>) -> Self {
        self.mind = mind.into();
        self
    }
}
