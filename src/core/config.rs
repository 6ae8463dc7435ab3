//! Game configuration.
//!
//! Hosts describe a game by providing:
//! - the round schedule (`true` marks a reveal round)
//! - the transport network
//! - the quarry's and each hunter's `PlayerConfig`
//!
//! `GameConfig::validate` performs every construction-time check. A config
//! that fails validation never becomes a game.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::player::{Colour, PlayerConfig};
use super::ticket::Ticket;
use crate::error::ConfigError;
use crate::network::Network;

/// Reveal rounds of the classic board game (1-based rounds 3, 8, 13, 18, 24).
pub const STANDARD_REVEALS: [usize; 5] = [3, 8, 13, 18, 24];

/// Build a round schedule of `length` rounds with reveals on the given
/// 1-based round numbers.
///
/// ```
/// use pursuit_engine::core::config::schedule;
///
/// assert_eq!(schedule(4, &[2, 4]), vec![false, true, false, true]);
/// ```
#[must_use]
pub fn schedule(length: usize, reveals: &[usize]) -> Vec<bool> {
    (1..=length).map(|round| reveals.contains(&round)).collect()
}

/// The classic 24-round schedule.
#[must_use]
pub fn standard_schedule() -> Vec<bool> {
    schedule(24, &STANDARD_REVEALS)
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Round schedule; `true` marks a reveal round.
    pub rounds: Vec<bool>,

    /// Transport network.
    pub network: Network,

    /// The quarry. Must be `Colour::Black`.
    pub quarry: PlayerConfig,

    /// Hunters, in turn order.
    pub hunters: Vec<PlayerConfig>,
}

impl GameConfig {
    /// Create a configuration with a placeholder quarry at the sentinel
    /// location and no hunters. Use the builder methods to fill it in.
    pub fn new(rounds: Vec<bool>, network: Network) -> Self {
        Self {
            rounds,
            network,
            quarry: PlayerConfig::new(Colour::QUARRY, crate::network::Location::UNREVEALED),
            hunters: Vec::new(),
        }
    }

    /// Set the quarry.
    #[must_use]
    pub fn with_quarry(mut self, quarry: PlayerConfig) -> Self {
        self.quarry = quarry;
        self
    }

    /// Add a hunter (turn order follows insertion order).
    #[must_use]
    pub fn with_hunter(mut self, hunter: PlayerConfig) -> Self {
        self.hunters.push(hunter);
        self
    }

    /// All players, quarry first.
    pub fn players(&self) -> impl Iterator<Item = &PlayerConfig> {
        std::iter::once(&self.quarry).chain(self.hunters.iter())
    }

    /// Number of players including the quarry.
    #[must_use]
    pub fn player_count(&self) -> usize {
        1 + self.hunters.len()
    }

    /// Check every construction invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds.is_empty() {
            return Err(ConfigError::EmptyRounds);
        }
        if self.network.is_empty() {
            return Err(ConfigError::EmptyNetwork);
        }
        if !self.quarry.colour.is_quarry() {
            return Err(ConfigError::QuarryColour(self.quarry.colour));
        }
        if self.hunters.is_empty() {
            return Err(ConfigError::NoHunters);
        }

        let mut locations = FxHashSet::default();
        for player in self.players() {
            if !locations.insert(player.location) {
                return Err(ConfigError::DuplicateLocation(player.location));
            }
        }

        let mut colours = FxHashSet::default();
        for player in self.players() {
            if !colours.insert(player.colour) {
                return Err(ConfigError::DuplicateColour(player.colour));
            }
        }

        for player in self.players() {
            if let Some(&ticket) = Ticket::ALL.iter().find(|t| !player.tickets.has_entry(**t)) {
                return Err(ConfigError::MissingTicket {
                    colour: player.colour,
                    ticket,
                });
            }
        }

        for hunter in &self.hunters {
            if let Some(&ticket) = Ticket::ALL
                .iter()
                .find(|t| t.is_quarry_only() && hunter.tickets.count(**t) > 0)
            {
                return Err(ConfigError::HunterSpecialTicket {
                    colour: hunter.colour,
                    ticket,
                });
            }
        }

        Ok(())
    }
}
