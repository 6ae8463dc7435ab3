//! Move representation.
//!
//! Moves are value objects with structural equality:
//! - `Pass` - a hunter with no real option
//! - `Ticket` - spend one ticket to travel one edge
//! - `Double` - the quarry spends a double ticket and makes two ticket moves
//!
//! The same types carry both the true moves players submit and the
//! redacted moves observers are told about.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::player::Colour;
use super::ticket::Ticket;
use crate::network::Location;

/// A single ticket spend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TicketMove {
    pub colour: Colour,
    pub ticket: Ticket,
    pub destination: Location,
}

impl TicketMove {
    #[must_use]
    pub const fn new(colour: Colour, ticket: Ticket, destination: Location) -> Self {
        Self {
            colour,
            ticket,
            destination,
        }
    }

    /// Same ticket, different reported destination.
    #[must_use]
    pub const fn reported_at(self, destination: Location) -> Self {
        Self {
            destination,
            ..self
        }
    }
}

/// Two ticket moves made in one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DoubleMove {
    pub colour: Colour,
    pub first: TicketMove,
    pub second: TicketMove,
}

impl DoubleMove {
    #[must_use]
    pub const fn new(colour: Colour, first: TicketMove, second: TicketMove) -> Self {
        Self {
            colour,
            first,
            second,
        }
    }

    /// Final destination of the double move.
    #[must_use]
    pub const fn final_destination(&self) -> Location {
        self.second.destination
    }

    /// True when both legs use the same ticket kind.
    #[must_use]
    pub fn is_same_kind(&self) -> bool {
        self.first.ticket == self.second.ticket
    }
}

/// A complete move.
///
/// ## Example
///
/// ```
/// use pursuit_engine::core::{Colour, Move, Ticket};
/// use pursuit_engine::network::Location;
///
/// let a = Move::ticket(Colour::Red, Ticket::Bus, Location(7));
/// let b = Move::ticket(Colour::Red, Ticket::Bus, Location(7));
/// assert_eq!(a, b);
/// assert_eq!(a.colour(), Colour::Red);
/// assert!(!a.is_pass());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Move {
    Pass { colour: Colour },
    Ticket(TicketMove),
    Double(DoubleMove),
}

impl Move {
    #[must_use]
    pub const fn pass(colour: Colour) -> Self {
        Move::Pass { colour }
    }

    #[must_use]
    pub const fn ticket(colour: Colour, ticket: Ticket, destination: Location) -> Self {
        Move::Ticket(TicketMove::new(colour, ticket, destination))
    }

    #[must_use]
    pub const fn double(colour: Colour, first: TicketMove, second: TicketMove) -> Self {
        Move::Double(DoubleMove::new(colour, first, second))
    }

    /// The player making the move.
    #[must_use]
    pub const fn colour(&self) -> Colour {
        match self {
            Move::Pass { colour } => *colour,
            Move::Ticket(mv) => mv.colour,
            Move::Double(mv) => mv.colour,
        }
    }

    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Move::Pass { .. })
    }

    /// Where the player ends up, if the move goes anywhere.
    #[must_use]
    pub const fn destination(&self) -> Option<Location> {
        match self {
            Move::Pass { .. } => None,
            Move::Ticket(mv) => Some(mv.destination),
            Move::Double(mv) => Some(mv.second.destination),
        }
    }
}

impl From<TicketMove> for Move {
    fn from(mv: TicketMove) -> Self {
        Move::Ticket(mv)
    }
}

impl From<DoubleMove> for Move {
    fn from(mv: DoubleMove) -> Self {
        Move::Double(mv)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Pass { colour } => write!(f, "{colour} passes"),
            Move::Ticket(mv) => write!(f, "{} {} -> {}", mv.colour, mv.ticket, mv.destination),
            Move::Double(mv) => write!(
                f,
                "{} double: {} -> {}, {} -> {}",
                mv.colour, mv.first.ticket, mv.first.destination, mv.second.ticket, mv.second.destination
            ),
        }
    }
}

/// Set of legal moves. Order is irrelevant.
pub type MoveSet = FxHashSet<Move>;

/// True if the set is exactly `{Pass}`.
#[must_use]
pub fn is_pass_only(moves: &MoveSet) -> bool {
    moves.len() == 1 && moves.iter().all(Move::is_pass)
}
