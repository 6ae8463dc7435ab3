//! Game state.
//!
//! `GameState` owns every `Player`, the round schedule, the turn and round
//! counters, and the quarry's last publicly known location. It is only ever
//! mutated by move application (`rules::turn`).
//!
//! ## Hidden information
//!
//! The quarry's true location is stored on its `Player` but the public query
//! surface (`player_location`) reports the last-known location instead. Only
//! the engine and the quarry's own actor see the truth. Actors and spectators
//! get a `GameView`, and `Debug` prints the same redacted view.
//!
//! ## Cloning
//!
//! Players and rounds live in `im` persistent vectors and the network is
//! shared behind an `Arc`, so `clone()` is cheap enough for look-ahead.

use std::sync::Arc;

use im::Vector;

use super::config::GameConfig;
use super::view::GameView;
use super::player::{Colour, Player};
use super::ticket::Ticket;
use crate::error::ConfigError;
use crate::network::{Location, Network};

/// Round number before the quarry's first move.
pub const NOT_STARTED: usize = 0;

/// Index of the quarry in the player list.
pub(crate) const QUARRY_INDEX: usize = 0;

/// Complete state of one game instance.
#[derive(Clone)]
pub struct GameState {
    rounds: Vector<bool>,
    network: Arc<Network>,
    /// Quarry first, then hunters in registration order.
    pub(crate) players: Vector<Player>,
    pub(crate) current_round: usize,
    pub(crate) current_player: usize,
    pub(crate) quarry_last_known: Location,
}

impl GameState {
    /// Validate a configuration and build the initial state.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let players = config.players().map(Player::from_config).collect();

        Ok(Self {
            rounds: config.rounds.into_iter().collect(),
            network: Arc::new(config.network),
            players,
            current_round: NOT_STARTED,
            current_player: QUARRY_INDEX,
            quarry_last_known: Location::UNREVEALED,
        })
    }

    /// Redacted view handed to actors and spectators.
    #[must_use]
    pub fn view(&self) -> GameView<'_> {
        GameView::new(self)
    }

    // === Players ===

    /// Player colours in turn order (quarry first).
    #[must_use]
    pub fn players(&self) -> Vec<Colour> {
        self.players.iter().map(Player::colour).collect()
    }

    /// Number of players including the quarry.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Colour of the player to move next.
    #[must_use]
    pub fn current_player(&self) -> Colour {
        self.players[self.current_player].colour()
    }

    /// Publicly known location of a player.
    ///
    /// Hunters report their true location. The quarry reports its last
    /// revealed location, or `Location::UNREVEALED` before the first reveal.
    /// Returns `None` for a colour that is not in the game.
    #[must_use]
    pub fn player_location(&self, colour: Colour) -> Option<Location> {
        let player = self.player(colour)?;
        if player.is_quarry() {
            Some(self.quarry_last_known)
        } else {
            Some(player.location())
        }
    }

    /// Ticket count of a player, or `None` for a colour not in the game.
    #[must_use]
    pub fn player_tickets(&self, colour: Colour, ticket: Ticket) -> Option<u32> {
        self.player(colour).map(|p| p.tickets().count(ticket))
    }

    /// Last location publicly attributed to the quarry.
    #[must_use]
    pub fn quarry_last_known(&self) -> Location {
        self.quarry_last_known
    }

    pub(crate) fn player(&self, colour: Colour) -> Option<&Player> {
        self.players.iter().find(|p| p.colour() == colour)
    }

    pub(crate) fn quarry(&self) -> &Player {
        debug_assert!(self.players[QUARRY_INDEX].is_quarry(), "quarry must be seated first");
        &self.players[QUARRY_INDEX]
    }

    pub(crate) fn hunters(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().skip(QUARRY_INDEX + 1)
    }

    /// True if a hunter currently stands on `location`.
    pub(crate) fn is_occupied_by_hunter(&self, location: Location) -> bool {
        self.hunters().any(|h| h.location() == location)
    }

    // === Rounds ===

    /// The round schedule (read-only).
    #[must_use]
    pub fn rounds(&self) -> &Vector<bool> {
        &self.rounds
    }

    /// Number of rounds in the schedule.
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Number of quarry moves made so far (`NOT_STARTED` before the first).
    #[must_use]
    pub fn current_round(&self) -> usize {
        self.current_round
    }

    /// True if `round` (0-based) is a reveal round. Out-of-range is false.
    #[must_use]
    pub fn is_reveal_round(&self, round: usize) -> bool {
        self.rounds.get(round).copied().unwrap_or(false)
    }

    /// True if at least one more round remains after the current one.
    #[must_use]
    pub fn has_round_after_current(&self) -> bool {
        self.current_round + 1 < self.rounds.len()
    }

    // === Network ===

    /// The transport network (read-only).
    #[must_use]
    pub fn network(&self) -> &Network {
        &self.network
    }
}

impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.view(), f)
    }
}
