//! The game session: turn sequencing and event resolution.
//!
//! `GameSession` owns every piece of mutable game state (players,
//! board, pending event, RNG, log) and is the only way to mutate any
//! of it. The turn cycle is an explicit state machine:
//!
//! ```text
//! Idle --start_game--> AwaitingRoll --roll_dice--+--> AwaitingRoll   (special / no data)
//!                          ^                     |
//!                          |                     +--> AwaitingReveal (ordinary topic)
//!                          +-------reveal--------+
//! ```
//!
//! with `Complete` entered from either loop once no active player
//! remains. Rejected operations return an error and change nothing.

use im::Vector;
use tracing::{debug, info};

use crate::board::{Board, TopicId};
use crate::core::{
    GameError, GameRng, GameSettings, Player, PlayerId, PlayerRegistry, PlayerStatus,
    SequenceViolation, MAX_PLAYERS,
};
use crate::events::{EventCatalog, EventRecord};
use crate::scoring;

use super::outcome::{Landing, PendingView, ResolvedEvent, RollOutcome};

/// Sides on the die.
const DICE_SIDES: i32 = 6;

/// Where the session is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    /// No game running: before setup, or after a reset.
    Idle,
    /// The current player may roll.
    AwaitingRoll,
    /// A drawn event is parked, waiting for a leverage choice.
    AwaitingReveal,
    /// Every player has been eliminated or has won.
    Complete,
}

/// A drawn ordinary-topic event awaiting its leverage choice.
///
/// At most one exists per session; its full record (impact included)
/// stays internal until the reveal.
#[derive(Clone, Debug)]
struct PendingEvent {
    player: PlayerId,
    topic: TopicId,
    record: EventRecord,
}

/// A complete game session.
pub struct GameSession {
    settings: GameSettings,
    catalog: EventCatalog,
    rng: GameRng,
    players: PlayerRegistry,
    board: Option<Board>,
    phase: TurnPhase,
    current: Option<PlayerId>,
    pending: Option<PendingEvent>,
    history: Vector<ResolvedEvent>,
}

impl GameSession {
    /// Create a session with the built-in event catalog and an
    /// entropy-seeded RNG.
    #[must_use]
    pub fn new(settings: GameSettings) -> Self {
        Self::with_catalog(settings, EventCatalog::builtin(), GameRng::from_entropy())
    }

    /// Create a session with the built-in catalog and a fixed seed.
    #[must_use]
    pub fn with_seed(settings: GameSettings, seed: u64) -> Self {
        Self::with_catalog(settings, EventCatalog::builtin(), GameRng::new(seed))
    }

    /// Create a session with full control over catalog and randomness.
    #[must_use]
    pub fn with_catalog(settings: GameSettings, catalog: EventCatalog, rng: GameRng) -> Self {
        Self {
            settings,
            catalog,
            rng,
            players: PlayerRegistry::new(),
            board: None,
            phase: TurnPhase::Idle,
            current: None,
            pending: None,
            history: Vector::new(),
        }
    }

    // === Setup ===

    /// (Re)configure the table with `n` players.
    ///
    /// Rebuilds the registry with fresh players and drops any pending
    /// event; the session returns to `Idle` until the next
    /// [`start_game`](Self::start_game). Counts outside `1..=6` are
    /// rejected without touching anything.
    pub fn set_players(&mut self, n: u8) -> Result<(), GameError> {
        if !(1..=MAX_PLAYERS).contains(&n) {
            return Err(GameError::InvalidPlayerCount { requested: n });
        }

        self.players.setup(n, self.settings.init_cash);
        self.pending = None;
        self.current = None;
        self.phase = TurnPhase::Idle;
        debug!(players = n, "player count configured");
        Ok(())
    }

    /// Start (or restart) a round.
    ///
    /// Generates a fresh board, resets every player, clears the log,
    /// and gives the first turn to the lowest-numbered seat.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        if self.players.is_empty() {
            return Err(GameError::OutOfSequence(SequenceViolation::NoPlayers));
        }

        self.board = Some(Board::generate(&mut self.rng));
        self.players.reset_all(self.settings.init_cash);
        self.pending = None;
        self.history = Vector::new();
        self.current = self.players.first_active();
        self.phase = TurnPhase::AwaitingRoll;
        info!(players = self.players.len(), seed = self.rng.seed(), "game started");
        Ok(())
    }

    /// Tear the session back down to its pre-setup state.
    pub fn reset_game(&mut self) {
        self.players.clear();
        self.board = None;
        self.pending = None;
        self.history = Vector::new();
        self.current = None;
        self.phase = TurnPhase::Idle;
        info!("game reset");
    }

    // === The turn cycle ===

    /// Roll the die for the current player and resolve the landing.
    ///
    /// Position updates fully before land resolution runs; by the time
    /// this returns, the outcome (die value, topic, drawn event) is
    /// settled. The presentation layer may animate the move afterwards,
    /// but the engine is already done.
    pub fn roll_dice(&mut self) -> Result<RollOutcome, GameError> {
        match self.phase {
            TurnPhase::Idle => {
                return Err(GameError::OutOfSequence(SequenceViolation::GameNotStarted))
            }
            TurnPhase::AwaitingReveal => {
                return Err(GameError::OutOfSequence(SequenceViolation::RevealPending))
            }
            TurnPhase::Complete => {
                return Err(GameError::OutOfSequence(SequenceViolation::NoActivePlayers))
            }
            TurnPhase::AwaitingRoll => {}
        }
        debug_assert!(self.pending.is_none(), "pending event outside AwaitingReveal");

        let (Some(player_id), Some(board)) = (self.current, self.board.as_ref()) else {
            return Err(GameError::OutOfSequence(SequenceViolation::GameNotStarted));
        };

        let die = self.rng.gen_range(1..DICE_SIDES + 1) as u8;

        let position = {
            let Some(player) = self.players.get_mut(player_id) else {
                return Err(GameError::OutOfSequence(SequenceViolation::NoActivePlayers));
            };
            player.position = player.position.advanced(die);
            player.position
        };

        let topic = board.topic_at(position);
        debug!(%player_id, die, %position, topic = topic.name(), "die rolled");

        let drawn = self.catalog.pick(topic, &mut self.rng).cloned();
        let landing = match drawn {
            None => {
                // Data gap: no event registered for this topic. Not an
                // error; the turn simply moves on.
                debug!(topic = topic.name(), "no event data");
                self.advance_turn();
                Landing::NoEventData { topic }
            }
            Some(record) if topic.is_special() => {
                let delta = record.impact;
                let resolved = self.resolve_event(player_id, topic, record, delta, 0);
                self.advance_turn();
                Landing::Special(resolved)
            }
            Some(record) => {
                let view = PendingView {
                    player: player_id,
                    topic,
                    text: record.text.clone(),
                };
                self.pending = Some(PendingEvent {
                    player: player_id,
                    topic,
                    record,
                });
                self.phase = TurnPhase::AwaitingReveal;
                Landing::Pending(view)
            }
        };

        Ok(RollOutcome {
            player: player_id,
            die,
            position,
            landing,
        })
    }

    /// Reveal the pending event with the given raw leverage input.
    ///
    /// The input is parsed as an integer (defaulting to 1 when it does
    /// not parse) and clamped to the configured bounds; the cash delta
    /// is `leverage * impact`.
    pub fn reveal(&mut self, raw_leverage: &str) -> Result<ResolvedEvent, GameError> {
        if self.phase != TurnPhase::AwaitingReveal {
            return Err(GameError::OutOfSequence(SequenceViolation::NothingPending));
        }
        let Some(pending) = self.pending.take() else {
            return Err(GameError::OutOfSequence(SequenceViolation::NothingPending));
        };

        let leverage = scoring::leverage_from_input(
            raw_leverage,
            self.settings.min_lev,
            self.settings.max_lev,
        );
        let delta = leverage as f64 * pending.record.impact;
        debug!(player = %pending.player, leverage, delta, "event revealed");

        let resolved =
            self.resolve_event(pending.player, pending.topic, pending.record, delta, leverage);
        self.advance_turn();
        Ok(resolved)
    }

    /// Apply a resolved event to its player, log it, and report it.
    fn resolve_event(
        &mut self,
        player_id: PlayerId,
        topic: TopicId,
        record: EventRecord,
        cash_delta: f64,
        leverage: i64,
    ) -> ResolvedEvent {
        let init_cash = self.settings.init_cash;
        let win_cash = self.settings.win_cash;

        let status = match self.players.get_mut(player_id) {
            Some(player) => {
                scoring::apply_leveraged_outcome(player, cash_delta, leverage, init_cash);
                scoring::check_status(player, win_cash);
                match player.status {
                    PlayerStatus::Eliminated => {
                        info!(%player_id, cash = player.cash, "player eliminated");
                    }
                    PlayerStatus::Won => {
                        info!(%player_id, cash = player.cash, "player won");
                    }
                    PlayerStatus::InPlay => {}
                }
                player.status
            }
            None => PlayerStatus::InPlay,
        };

        let resolved = ResolvedEvent {
            player: player_id,
            topic,
            record,
            leverage,
            cash_delta,
            status,
        };
        self.history.push_back(resolved.clone());
        resolved
    }

    /// Hand the turn to the next active seat, or finish the game.
    fn advance_turn(&mut self) {
        let next = self
            .current
            .and_then(|from| self.players.next_active_after(from));
        match next {
            Some(id) => {
                self.current = Some(id);
                self.phase = TurnPhase::AwaitingRoll;
            }
            None => {
                self.current = None;
                self.phase = TurnPhase::Complete;
                info!("no active players remain; game complete");
            }
        }
    }

    // === Observers ===

    /// Current phase of the turn cycle.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// The player whose turn it is, if any.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.current
    }

    /// The board for the running round, if one has started.
    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// The visible part of the event awaiting its reveal, if any.
    #[must_use]
    pub fn pending(&self) -> Option<PendingView> {
        self.pending.as_ref().map(|p| PendingView {
            player: p.player,
            topic: p.topic,
            text: p.record.text.clone(),
        })
    }

    /// Snapshot of one player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// All players in seat order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Number of configured seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The log of every resolved event this round, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ResolvedEvent> {
        &self.history
    }

    /// The session settings.
    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    // === Live presentation toggles ===

    /// Flip the dice-animation toggle. Presentation-only; never read by
    /// engine math.
    pub fn set_use_dice_animation(&mut self, on: bool) {
        self.settings.use_dice_animation = on;
    }

    /// Flip the sound toggle. Presentation-only.
    pub fn set_use_sound(&mut self, on: bool) {
        self.settings.use_sound = on;
    }
}
