//! Player identity and per-player state.
//!
//! ## Colour
//!
//! Players are identified by colour. `Black` is always the quarry; every
//! other colour is a hunter.
//!
//! ## Player
//!
//! Role, location and ticket inventory for one participant. Players are owned
//! by `GameState` and only mutated by move application.

use serde::{Deserialize, Serialize};

use super::ticket::{Ticket, Tickets};
use crate::network::Location;

/// Player colour (identity).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Colour {
    Black,
    Blue,
    Green,
    Red,
    White,
    Yellow,
}

impl Colour {
    /// The quarry's colour.
    pub const QUARRY: Colour = Colour::Black;

    /// Hunter colours, in their conventional seating order.
    pub const HUNTERS: [Colour; 5] = [
        Colour::Blue,
        Colour::Green,
        Colour::Red,
        Colour::White,
        Colour::Yellow,
    ];

    /// Role implied by the colour.
    #[must_use]
    pub const fn role(self) -> Role {
        match self {
            Colour::Black => Role::Quarry,
            _ => Role::Hunter,
        }
    }

    #[must_use]
    pub const fn is_quarry(self) -> bool {
        matches!(self, Colour::Black)
    }

    #[must_use]
    pub const fn is_hunter(self) -> bool {
        !self.is_quarry()
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Colour::Black => "Black",
            Colour::Blue => "Blue",
            Colour::Green => "Green",
            Colour::Red => "Red",
            Colour::White => "White",
            Colour::Yellow => "Yellow",
        };
        f.write_str(name)
    }
}

/// Which side a player is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// The single hidden, evasive player.
    Quarry,
    /// A pursuer.
    Hunter,
}

/// Starting configuration for one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub colour: Colour,
    pub location: Location,
    pub tickets: Tickets,
}

impl PlayerConfig {
    /// Create a config with an empty ticket inventory.
    ///
    /// Note that an inventory must name every ticket kind to pass validation;
    /// use `with_tickets(Tickets::zeroed()...)` or the convenience
    /// constructors below.
    pub fn new(colour: Colour, location: Location) -> Self {
        Self {
            colour,
            location,
            tickets: Tickets::new(),
        }
    }

    /// Set the ticket inventory.
    #[must_use]
    pub fn with_tickets(mut self, tickets: Tickets) -> Self {
        self.tickets = tickets;
        self
    }

    /// Set a single ticket count.
    #[must_use]
    pub fn with_ticket(mut self, ticket: Ticket, count: u32) -> Self {
        self.tickets.set(ticket, count);
        self
    }

    /// Standard hunter allowance: 11 taxi, 8 bus, 4 underground.
    pub fn hunter(colour: Colour, location: Location) -> Self {
        Self::new(colour, location).with_tickets(
            Tickets::zeroed()
                .with(Ticket::Taxi, 11)
                .with(Ticket::Bus, 8)
                .with(Ticket::Underground, 4),
        )
    }

    /// Standard quarry allowance: 4 taxi, 3 bus, 3 underground,
    /// 2 double and one secret ticket per hunter.
    pub fn quarry(location: Location, hunter_count: u32) -> Self {
        Self::new(Colour::QUARRY, location).with_tickets(
            Tickets::zeroed()
                .with(Ticket::Taxi, 4)
                .with(Ticket::Bus, 3)
                .with(Ticket::Underground, 3)
                .with(Ticket::Double, 2)
                .with(Ticket::Secret, hunter_count),
        )
    }
}

/// Live state of one participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    colour: Colour,
    location: Location,
    tickets: Tickets,
}

impl Player {
    /// Create a player from a (validated) config.
    #[must_use]
    pub fn from_config(config: &PlayerConfig) -> Self {
        Self {
            colour: config.colour,
            location: config.location,
            tickets: config.tickets.clone(),
        }
    }

    #[must_use]
    pub fn colour(&self) -> Colour {
        self.colour
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.colour.role()
    }

    #[must_use]
    pub fn is_quarry(&self) -> bool {
        self.colour.is_quarry()
    }

    #[must_use]
    pub fn is_hunter(&self) -> bool {
        self.colour.is_hunter()
    }

    /// True location. For the quarry this is hidden information.
    #[must_use]
    pub fn location(&self) -> Location {
        self.location
    }

    #[must_use]
    pub fn tickets(&self) -> &Tickets {
        &self.tickets
    }

    /// True if at least `amount` of the ticket kind are held.
    #[must_use]
    pub fn has_tickets(&self, ticket: Ticket, amount: u32) -> bool {
        self.tickets.has(ticket, amount)
    }

    pub(crate) fn set_location(&mut self, location: Location) {
        self.location = location;
    }

    pub(crate) fn add_ticket(&mut self, ticket: Ticket) {
        self.tickets.add(ticket);
    }

    pub(crate) fn remove_ticket(&mut self, ticket: Ticket) {
        self.tickets.remove(ticket);
    }
}
