//! Event catalog: topic-to-events lookup.
//!
//! The catalog is loaded once and never mutated during play. A topic
//! with no registered events is a data-completeness gap, not an error:
//! [`EventCatalog::pick`] returns `None` and the session resolves the
//! landing as a no-op.

use rustc_hash::FxHashMap;

use super::record::EventRecord;
use crate::board::TopicId;
use crate::core::GameRng;

/// Registry of event records, keyed by topic.
#[derive(Clone, Debug, Default)]
pub struct EventCatalog {
    events: FxHashMap<TopicId, Vec<EventRecord>>,
}

impl EventCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The full built-in catalog covering all 36 topics.
    #[must_use]
    pub fn builtin() -> Self {
        super::data::builtin()
    }

    /// Register an event record under a topic.
    pub fn register(&mut self, topic: TopicId, record: EventRecord) {
        self.events.entry(topic).or_default().push(record);
    }

    /// Pick a uniformly random record for a topic.
    ///
    /// Returns `None` when the topic has no registered events.
    #[must_use]
    pub fn pick(&self, topic: TopicId, rng: &mut GameRng) -> Option<&EventRecord> {
        rng.choose(self.records(topic))
    }

    /// All records registered under a topic.
    #[must_use]
    pub fn records(&self, topic: TopicId) -> &[EventRecord] {
        self.events.get(&topic).map_or(&[], Vec::as_slice)
    }

    /// Number of topics with at least one record.
    #[must_use]
    pub fn topic_count(&self) -> usize {
        self.events.len()
    }

    /// Total number of records across all topics.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog_picks_none() {
        let catalog = EventCatalog::new();
        let mut rng = GameRng::new(42);
        assert!(catalog.pick(TopicId::new(5), &mut rng).is_none());
    }

    #[test]
    fn test_pick_from_single_record() {
        let mut catalog = EventCatalog::new();
        let topic = TopicId::new(3);
        catalog.register(topic, EventRecord::new("Golden cross.", 6.0));

        let mut rng = GameRng::new(42);
        let picked = catalog.pick(topic, &mut rng).unwrap();
        assert_eq!(picked.text, "Golden cross.");
    }

    #[test]
    fn test_pick_is_uniform_over_records() {
        let mut catalog = EventCatalog::new();
        let topic = TopicId::new(3);
        catalog.register(topic, EventRecord::new("a", 1.0));
        catalog.register(topic, EventRecord::new("b", 2.0));

        let mut rng = GameRng::new(42);
        let mut seen_a = false;
        let mut seen_b = false;
        for _ in 0..200 {
            match catalog.pick(topic, &mut rng).unwrap().text.as_str() {
                "a" => seen_a = true,
                _ => seen_b = true,
            }
        }
        assert!(seen_a && seen_b);
    }

    #[test]
    fn test_counts() {
        let mut catalog = EventCatalog::new();
        catalog.register(TopicId::new(1), EventRecord::new("x", 1.0));
        catalog.register(TopicId::new(1), EventRecord::new("y", 2.0));
        catalog.register(TopicId::new(2), EventRecord::new("z", 3.0));

        assert_eq!(catalog.topic_count(), 2);
        assert_eq!(catalog.record_count(), 3);
    }

    #[test]
    fn test_builtin_covers_every_topic() {
        let catalog = EventCatalog::builtin();
        for topic in TopicId::all() {
            assert!(
                !catalog.records(topic).is_empty(),
                "builtin catalog missing events for {}",
                topic.name()
            );
        }
    }
}
