//! The fixed set of 36 board topics.
//!
//! Every cell on the board carries a topic, and every topic selects the
//! event pool drawn from when a player lands on it. Four topics are
//! *special*: their events apply their cash impact directly, with no
//! leverage choice. The first topic is the fixed starting cell.
//!
//! The set is a game constant. Boards permute it; nothing adds to it.

use serde::{Deserialize, Serialize};

/// Number of cells on the board, one topic per cell.
pub const BOARD_CELLS: usize = 36;

struct TopicDef {
    name: &'static str,
    special: bool,
}

const fn ordinary(name: &'static str) -> TopicDef {
    TopicDef { name, special: false }
}

const fn special(name: &'static str) -> TopicDef {
    TopicDef { name, special: true }
}

/// All 36 topics in canonical order. Index 0 is the starting cell.
const TOPICS: [TopicDef; BOARD_CELLS] = [
    special("Starting Line"),
    ordinary("Candlestick Patterns"),
    ordinary("Moving Averages"),
    ordinary("Technical Indicators I"),
    ordinary("Technical Indicators II"),
    ordinary("Chart Patterns I"),
    ordinary("Chart Patterns II"),
    ordinary("Institutional Holdings"),
    ordinary("Market Sentiment"),
    special("Windfall"),
    ordinary("Order Flow"),
    ordinary("Balance Sheet"),
    ordinary("Income Statement"),
    ordinary("Dividend Policy"),
    ordinary("Cash Flow"),
    ordinary("Valuation"),
    ordinary("Corporate Governance"),
    ordinary("Sustainability"),
    special("Breather"),
    ordinary("Commodity Prices"),
    ordinary("Benchmark Indexes"),
    ordinary("Market Competition"),
    ordinary("Supply Chain"),
    ordinary("Five Forces"),
    ordinary("International Finance"),
    ordinary("Monetary Policy"),
    ordinary("Fiscal Policy"),
    special("Fate & Fortune"),
    ordinary("Financial Markets"),
    ordinary("Business Cycle"),
    ordinary("Jobs & Inflation"),
    ordinary("Regulatory Shifts"),
    ordinary("Geopolitics"),
    ordinary("Climate & Pandemics"),
    ordinary("Tech Breakthroughs"),
    ordinary("Global Economy"),
];

/// Topic identifier: an index into the canonical topic table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TopicId(pub u8);

/// The fixed topic of the starting cell.
pub const START_TOPIC: TopicId = TopicId(0);

impl TopicId {
    /// Create a topic ID.
    ///
    /// Panics if `id` is not a valid topic index.
    #[must_use]
    pub fn new(id: u8) -> Self {
        assert!((id as usize) < BOARD_CELLS, "topic index out of range");
        Self(id)
    }

    /// Index into the canonical topic table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Display name of this topic.
    #[must_use]
    pub fn name(self) -> &'static str {
        TOPICS[self.index()].name
    }

    /// Whether events on this topic bypass the leverage choice.
    #[must_use]
    pub fn is_special(self) -> bool {
        TOPICS[self.index()].special
    }

    /// Iterate over all topics in canonical order.
    pub fn all() -> impl Iterator<Item = TopicId> {
        (0..BOARD_CELLS as u8).map(TopicId)
    }

    /// Iterate over the special topics.
    pub fn specials() -> impl Iterator<Item = TopicId> {
        Self::all().filter(|t| t.is_special())
    }
}

impl std::fmt::Display for TopicId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_count() {
        assert_eq!(TopicId::all().count(), 36);
    }

    #[test]
    fn test_exactly_four_specials() {
        let specials: Vec<_> = TopicId::specials().collect();
        assert_eq!(specials.len(), 4);
        assert!(specials.contains(&START_TOPIC));
    }

    #[test]
    fn test_start_topic_is_first() {
        assert_eq!(START_TOPIC.index(), 0);
        assert!(START_TOPIC.is_special());
        assert_eq!(START_TOPIC.name(), "Starting Line");
    }

    #[test]
    fn test_names_are_distinct() {
        let mut names: Vec<_> = TopicId::all().map(TopicId::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 36);
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(format!("{}", TopicId::new(11)), "Balance Sheet");
    }

    #[test]
    #[should_panic(expected = "topic index out of range")]
    fn test_out_of_range_index_panics() {
        TopicId::new(36);
    }
}
