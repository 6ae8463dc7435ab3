//! Player decision-making.
//!
//! The engine never decides moves itself. Each seat is driven by a
//! `PlayerActor` that is shown the observable state, its own true location,
//! and its legal moves, and must return one of those moves.
//!
//! Two reference actors are provided:
//! - `RandomPlayer`: uniform choice with a seeded, forkable RNG
//! - `FirstMovePlayer`: always the smallest move in `Move`'s ordering

mod random;

pub use random::RandomPlayer;

use crate::core::{GameView, Move, MoveSet};
use crate::network::Location;

/// Chooses moves for one seat.
pub trait PlayerActor {
    /// Pick one move from `moves`.
    ///
    /// `view` is the observable state: the quarry's location in it is the
    /// last-known one. `location` is this player's true location.
    /// Returning a move outside `moves` makes the host reject the turn.
    fn choose_move(&mut self, view: GameView<'_>, location: Location, moves: &MoveSet) -> Move;
}

/// Legal moves in a stable order, so actors behave identically across runs.
#[must_use]
pub fn sorted_moves(moves: &MoveSet) -> Vec<Move> {
    let mut sorted: Vec<Move> = moves.iter().copied().collect();
    sorted.sort_unstable();
    sorted
}

/// Always plays the smallest legal move.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstMovePlayer;

impl PlayerActor for FirstMovePlayer {
    fn choose_move(&mut self, view: GameView<'_>, _location: Location, moves: &MoveSet) -> Move {
        sorted_moves(moves)
            .first()
            .copied()
            .unwrap_or(Move::pass(view.current_player()))
    }
}

impl<F> PlayerActor for F
where
    F: FnMut(GameView<'_>, Location, &MoveSet) -> Move,
{
    fn choose_move(&mut self, view: GameView<'_>, location: Location, moves: &MoveSet) -> Move {
        self(view, location, moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Colour, Ticket};

    #[test]
    fn test_sorted_moves_is_stable() {
        let moves: MoveSet = [
            Move::ticket(Colour::Black, Ticket::Bus, Location(3)),
            Move::ticket(Colour::Black, Ticket::Taxi, Location(9)),
            Move::ticket(Colour::Black, Ticket::Taxi, Location(2)),
        ]
        .into_iter()
        .collect();

        let sorted = sorted_moves(&moves);
        assert_eq!(
            sorted,
            vec![
                Move::ticket(Colour::Black, Ticket::Taxi, Location(2)),
                Move::ticket(Colour::Black, Ticket::Taxi, Location(9)),
                Move::ticket(Colour::Black, Ticket::Bus, Location(3)),
            ]
        );
    }
}
