//! Observable game state.
//!
//! Actors and spectators are handed a `GameView`, never the `GameState`
//! itself. The view answers only public questions: the quarry's location is
//! its last revealed one, and there is no way to ask for another player's
//! legal moves.

use std::fmt;

use im::Vector;

use super::player::Colour;
use super::state::GameState;
use super::ticket::Ticket;
use crate::network::{Location, Network};
use crate::rules::Winners;

/// Read-only, redacted window onto a `GameState`.
#[derive(Clone, Copy)]
pub struct GameView<'a> {
    state: &'a GameState,
}

impl<'a> GameView<'a> {
    pub(crate) fn new(state: &'a GameState) -> Self {
        Self { state }
    }

    /// Player colours in turn order (quarry first).
    #[must_use]
    pub fn players(&self) -> Vec<Colour> {
        self.state.players()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.state.player_count()
    }

    /// Colour of the player to move next.
    #[must_use]
    pub fn current_player(&self) -> Colour {
        self.state.current_player()
    }

    /// Hunters' true locations; the quarry's last-known one.
    #[must_use]
    pub fn player_location(&self, colour: Colour) -> Option<Location> {
        self.state.player_location(colour)
    }

    #[must_use]
    pub fn player_tickets(&self, colour: Colour, ticket: Ticket) -> Option<u32> {
        self.state.player_tickets(colour, ticket)
    }

    #[must_use]
    pub fn quarry_last_known(&self) -> Location {
        self.state.quarry_last_known()
    }

    #[must_use]
    pub fn rounds(&self) -> &'a Vector<bool> {
        self.state.rounds()
    }

    #[must_use]
    pub fn round_count(&self) -> usize {
        self.state.round_count()
    }

    #[must_use]
    pub fn current_round(&self) -> usize {
        self.state.current_round()
    }

    #[must_use]
    pub fn is_reveal_round(&self, round: usize) -> bool {
        self.state.is_reveal_round(round)
    }

    #[must_use]
    pub fn network(&self) -> &'a Network {
        self.state.network()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Winning colours, empty while the game continues.
    #[must_use]
    pub fn winners(&self) -> Winners {
        self.state.winners()
    }
}

/// Public locations and inventories only.
impl fmt::Debug for GameView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let players: Vec<_> = self
            .players()
            .into_iter()
            .map(|colour| {
                let tickets: Vec<_> = Ticket::ALL
                    .iter()
                    .map(|&t| (t, self.player_tickets(colour, t).unwrap_or(0)))
                    .collect();
                (colour, self.player_location(colour), tickets)
            })
            .collect();

        f.debug_struct("GameView")
            .field("current_round", &self.current_round())
            .field("round_count", &self.round_count())
            .field("current_player", &self.current_player())
            .field("players", &players)
            .finish()
    }
}
