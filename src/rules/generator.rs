//! Legal move generation.
//!
//! Pure functions of the current state: nothing here mutates. The win
//! evaluator reuses the same generator, so "stuck" always means exactly
//! "the generator offers no real move".

use smallvec::SmallVec;
use tracing::trace;

use crate::core::{Colour, GameState, Move, MoveSet, Player, Ticket, TicketMove};
use crate::network::Location;

/// Single-step candidates. Rarely more than a dozen.
pub type TicketMoves = SmallVec<[TicketMove; 12]>;

/// Every legal move for `colour` in the current state.
///
/// - Hunters with no real option get exactly `{Pass}`.
/// - The quarry never passes; an empty set means it is stuck.
/// - A colour that is not in the game gets the empty set.
#[must_use]
pub fn legal_moves(state: &GameState, colour: Colour) -> MoveSet {
    let mut moves = MoveSet::default();
    let Some(player) = state.player(colour) else {
        return moves;
    };

    let singles = ticket_moves(state, player, player.location());
    let can_double = player.is_quarry()
        && player.has_tickets(Ticket::Double, 1)
        && state.has_round_after_current();

    for first in &singles {
        moves.insert(Move::Ticket(*first));

        if can_double {
            for second in ticket_moves(state, player, first.destination) {
                if affords_double(player, first, &second) {
                    moves.insert(Move::double(colour, *first, second));
                }
            }
        }
    }

    if player.is_hunter() && moves.is_empty() {
        moves.insert(Move::pass(colour));
    }

    trace!(%colour, count = moves.len(), "generated legal moves");
    moves
}

/// Single ticket moves `player` could make from `origin`.
///
/// An edge is offered with its own ticket kind if the player holds one,
/// and again with a secret ticket if the player holds one. Destinations
/// occupied by a hunter are never offered, to either side.
#[must_use]
pub fn ticket_moves(state: &GameState, player: &Player, origin: Location) -> TicketMoves {
    let mut moves = TicketMoves::new();

    for edge in state.network().edges_from(origin) {
        if state.is_occupied_by_hunter(edge.destination) {
            continue;
        }

        let kind = Ticket::from_transport(edge.transport);
        let candidates = [kind, Ticket::Secret];
        for ticket in candidates {
            let mv = TicketMove::new(player.colour(), ticket, edge.destination);
            if player.has_tickets(ticket, 1) && !moves.contains(&mv) {
                moves.push(mv);
            }
        }
    }

    moves
}

/// Same-kind doubles need two tickets of that kind; mixed doubles need one
/// of each, which the single-step check already guarantees.
fn affords_double(player: &Player, first: &TicketMove, second: &TicketMove) -> bool {
    first.ticket != second.ticket || player.has_tickets(first.ticket, 2)
}

impl GameState {
    /// Every legal move for `colour`. See [`legal_moves`].
    #[must_use]
    pub fn legal_moves(&self, colour: Colour) -> MoveSet {
        legal_moves(self, colour)
    }
}
