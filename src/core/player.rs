//! Player identification and per-player game state.
//!
//! ## PlayerId
//!
//! Type-safe 1-based player identifier. Seats are numbered the way the
//! physical game numbers them: `Player 1` through `Player 6`.
//!
//! ## PlayerRegistry
//!
//! Owns every [`Player`] for the current round and answers the
//! turn-order questions the session asks: who is active, who acts
//! first, and who acts next after a given seat.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Position;

/// Maximum number of seats at the table.
pub const MAX_PLAYERS: u8 = 6;

/// Player identifier, 1-based (`1..=6`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// The raw seat number (1-based).
    #[must_use]
    pub const fn seat(self) -> u8 {
        self.0
    }

    /// Iterate over all player IDs for a game with `count` players.
    pub fn all(count: u8) -> impl Iterator<Item = PlayerId> {
        (1..=count).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Terminal standing of a player.
///
/// `InPlay` corresponds to an empty status cell in the UI; the other two
/// map onto the eliminated/won display classes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerStatus {
    /// Still playing (or nothing to report).
    #[default]
    InPlay,
    /// Cash went negative; out of the game.
    Eliminated,
    /// Cash reached the win threshold.
    Won,
}

impl PlayerStatus {
    /// Display label: empty while in play, otherwise the class the UI
    /// styles the row with.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PlayerStatus::InPlay => "",
            PlayerStatus::Eliminated => "eliminated",
            PlayerStatus::Won => "won",
        }
    }
}

/// Mutable state for one seat.
///
/// Mutated only by the session during event resolution; everything here
/// is public so the rendering layer can snapshot it freely.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Seat identity.
    pub id: PlayerId,
    /// Current board cell.
    pub position: Position,
    /// Cash on hand. Negative cash eliminates the player.
    pub cash: f64,
    /// Cumulative leverage taken across all revealed events. Never
    /// decremented; this is the risk denominator for performance.
    pub leverage_sum: i64,
    /// Risk-adjusted return: `(cash - init_cash) / sqrt(leverage_sum)`,
    /// or 0 while `leverage_sum <= 0`.
    pub performance: f64,
    /// Whether this player still takes turns.
    pub active: bool,
    /// Terminal standing, if any.
    pub status: PlayerStatus,
}

impl Player {
    /// Create a fresh player at the starting cell.
    #[must_use]
    pub fn new(id: PlayerId, init_cash: f64) -> Self {
        Self {
            id,
            position: Position::START,
            cash: init_cash,
            leverage_sum: 0,
            performance: 0.0,
            active: true,
            status: PlayerStatus::InPlay,
        }
    }

    /// Reset to round-start state, keeping the seat.
    pub fn reset(&mut self, init_cash: f64) {
        *self = Player::new(self.id, init_cash);
    }
}

/// Registry of the players in the current round.
///
/// Empty until the session configures a player count; rebuilt whenever
/// the count is re-set, cleared on game reset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerRegistry {
    players: Vec<Player>,
}

impl PlayerRegistry {
    /// Create an empty registry (no seats configured).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the registry with `count` fresh players.
    ///
    /// The caller validates the count; this asserts the engine-wide
    /// bound as a last line of defense.
    pub fn setup(&mut self, count: u8, init_cash: f64) {
        assert!(
            (1..=MAX_PLAYERS).contains(&count),
            "player count out of range"
        );
        self.players = PlayerId::all(count)
            .map(|id| Player::new(id, init_cash))
            .collect();
    }

    /// Remove all players.
    pub fn clear(&mut self) {
        self.players.clear();
    }

    /// Reset every player to round-start state.
    pub fn reset_all(&mut self, init_cash: f64) {
        for p in &mut self.players {
            p.reset(init_cash);
        }
    }

    /// Number of configured seats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether no seats are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Get a player by ID.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        let idx = (id.0 as usize).checked_sub(1)?;
        self.players.get(idx)
    }

    /// Get a mutable player by ID.
    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        let idx = (id.0 as usize).checked_sub(1)?;
        self.players.get_mut(idx)
    }

    /// Iterate over all players in seat order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// IDs of all still-active players, in seat order.
    #[must_use]
    pub fn active_ids(&self) -> SmallVec<[PlayerId; MAX_PLAYERS as usize]> {
        self.players
            .iter()
            .filter(|p| p.active)
            .map(|p| p.id)
            .collect()
    }

    /// Whether any player is still active.
    #[must_use]
    pub fn has_active(&self) -> bool {
        self.players.iter().any(|p| p.active)
    }

    /// The lowest-id active player, who acts first at game start.
    #[must_use]
    pub fn first_active(&self) -> Option<PlayerId> {
        self.players.iter().find(|p| p.active).map(|p| p.id)
    }

    /// The next active player after `from`, round-robin with wraparound,
    /// skipping inactive seats. Returns `from` itself when it is the
    /// only active player; `None` when nobody is active.
    #[must_use]
    pub fn next_active_after(&self, from: PlayerId) -> Option<PlayerId> {
        let count = self.players.len() as u8;
        if count == 0 {
            return None;
        }
        let mut seat = from.0;
        for _ in 0..count {
            seat = if seat >= count { 1 } else { seat + 1 };
            let candidate = PlayerId(seat);
            if self.get(candidate).is_some_and(|p| p.active) {
                return Some(candidate);
            }
        }
        None
    }
}
