//! Move application.
//!
//! `GameState::apply` is the only mutator of game state. A move is checked
//! against the legal-move set before anything changes; once it passes,
//! application cannot fail.
//!
//! ## Turn order
//!
//! The turn pointer advances before the move's effects are applied, then:
//! - `Pass` changes nothing else
//! - a hunter's ticket moves the hunter and hands the spent ticket to the
//!   quarry
//! - a quarry ticket moves the quarry, updates the public location on reveal
//!   rounds, and starts the next round
//! - a double spends the double ticket, reports both legs, then applies each
//!   leg as a quarry ticket move

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::visibility::{report_double, report_single};
use super::win::Outcome;
use crate::core::state::QUARRY_INDEX;
use crate::core::{Colour, DoubleMove, GameState, Move, Ticket, TicketMove};
use crate::error::MoveError;
use crate::observer::{EventSink, GameEvent};

/// What happens after a move has been applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// A hunter moves next; the host should ask it for a move.
    AwaitingHunter(Colour),
    /// Play is back with the quarry.
    RotationComplete,
    /// The game ended.
    GameOver(Outcome),
}

impl TurnOutcome {
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        matches!(self, TurnOutcome::GameOver(_))
    }
}

impl GameState {
    /// Apply a move for the current player.
    ///
    /// Fails without touching the state if the game is already over or the
    /// move is not in `legal_moves(current_player)`.
    #[instrument(level = "debug", skip(self, sink), fields(round = self.current_round))]
    pub fn apply<S>(&mut self, mv: Move, sink: &mut S) -> Result<TurnOutcome, MoveError>
    where
        S: EventSink + ?Sized,
    {
        if self.is_over() {
            warn!(%mv, "rejected move after game over");
            return Err(MoveError::GameOver);
        }

        let colour = self.current_player();
        if !self.legal_moves(colour).contains(&mv) {
            warn!(%mv, %colour, "rejected illegal move");
            return Err(MoveError::Illegal { mv, colour });
        }

        let acting = self.current_player;
        self.current_player = (self.current_player + 1) % self.players.len();

        match mv {
            Move::Pass { .. } => self.emit(sink, GameEvent::MoveMade(mv)),
            Move::Ticket(ticket) => self.apply_ticket(acting, ticket, sink),
            Move::Double(double) => self.apply_double(double, sink),
        }

        Ok(self.finish_turn(sink))
    }

    fn apply_ticket<S>(&mut self, index: usize, mv: TicketMove, sink: &mut S)
    where
        S: EventSink + ?Sized,
    {
        let player = &mut self.players[index];
        player.set_location(mv.destination);
        player.remove_ticket(mv.ticket);

        if index != QUARRY_INDEX {
            self.players[QUARRY_INDEX].add_ticket(mv.ticket);
            self.emit(sink, GameEvent::MoveMade(mv.into()));
            return;
        }

        let reveal = self.is_reveal_round(self.current_round);
        if reveal {
            self.quarry_last_known = mv.destination;
        }
        let reported = report_single(mv, reveal, self.quarry_last_known);

        self.current_round += 1;
        debug!(round = self.current_round, reveal, "quarry moved");
        self.emit(sink, GameEvent::RoundStarted(self.current_round));
        self.emit(sink, GameEvent::MoveMade(reported.into()));
    }

    fn apply_double<S>(&mut self, mv: DoubleMove, sink: &mut S)
    where
        S: EventSink + ?Sized,
    {
        let reported = report_double(
            mv,
            self.is_reveal_round(self.current_round),
            self.is_reveal_round(self.current_round + 1),
            self.quarry_last_known,
        );

        self.players[QUARRY_INDEX].remove_ticket(Ticket::Double);
        self.emit(sink, GameEvent::MoveMade(reported.into()));

        self.apply_ticket(QUARRY_INDEX, mv.first, sink);
        self.apply_ticket(QUARRY_INDEX, mv.second, sink);
    }

    fn finish_turn<S>(&mut self, sink: &mut S) -> TurnOutcome
    where
        S: EventSink + ?Sized,
    {
        if let Some(outcome) = self.outcome() {
            let winners = outcome.winners(self);
            info!(reason = ?outcome.reason, ?winners, "game over");
            self.emit(sink, GameEvent::GameOver(winners));
            return TurnOutcome::GameOver(outcome);
        }

        let next = self.current_player();
        if next.is_hunter() {
            return TurnOutcome::AwaitingHunter(next);
        }

        self.emit(sink, GameEvent::RotationComplete);
        TurnOutcome::RotationComplete
    }

    fn emit<S>(&self, sink: &mut S, event: GameEvent)
    where
        S: EventSink + ?Sized,
    {
        debug!(?event, "emit");
        sink.emit(self, &event);
    }
}
