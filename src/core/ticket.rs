//! Transport kinds, ticket kinds, and per-player ticket inventories.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Edge label in the transport network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Transport {
    Taxi,
    Bus,
    Underground,
    /// Boat routes. Only travellable on a secret ticket.
    Ferry,
}

impl Transport {
    /// All transport kinds.
    pub const ALL: [Transport; 4] = [
        Transport::Taxi,
        Transport::Bus,
        Transport::Underground,
        Transport::Ferry,
    ];
}

/// Ticket kinds a player can hold.
///
/// The three ordinary tickets map one-to-one onto transport kinds.
/// `Secret` rides any edge without disclosing the transport used;
/// `Double` lets the quarry chain two ticket moves in one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ticket {
    Taxi,
    Bus,
    Underground,
    Secret,
    Double,
}

impl Ticket {
    /// Every ticket kind. A player's inventory must name each of them.
    pub const ALL: [Ticket; 5] = [
        Ticket::Taxi,
        Ticket::Bus,
        Ticket::Underground,
        Ticket::Secret,
        Ticket::Double,
    ];

    /// Ticket needed to travel an edge of the given transport.
    #[must_use]
    pub const fn from_transport(transport: Transport) -> Self {
        match transport {
            Transport::Taxi => Ticket::Taxi,
            Transport::Bus => Ticket::Bus,
            Transport::Underground => Ticket::Underground,
            Transport::Ferry => Ticket::Secret,
        }
    }

    /// Tickets hunters are never allowed to hold.
    #[must_use]
    pub const fn is_quarry_only(self) -> bool {
        matches!(self, Ticket::Secret | Ticket::Double)
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Ticket::Taxi => "taxi",
            Ticket::Bus => "bus",
            Ticket::Underground => "underground",
            Ticket::Secret => "secret",
            Ticket::Double => "double",
        };
        f.write_str(name)
    }
}

/// Ticket counts for one player.
///
/// Counts are never negative: spending is only ever done for moves the
/// generator produced, and the generator checks availability first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tickets {
    counts: FxHashMap<Ticket, u32>,
}

impl Tickets {
    /// Create an empty inventory (no entries at all).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inventory with an explicit zero for every ticket kind.
    #[must_use]
    pub fn zeroed() -> Self {
        let mut tickets = Self::new();
        for ticket in Ticket::ALL {
            tickets.set(ticket, 0);
        }
        tickets
    }

    /// Set a count (builder pattern).
    #[must_use]
    pub fn with(mut self, ticket: Ticket, count: u32) -> Self {
        self.set(ticket, count);
        self
    }

    /// Set a count.
    pub fn set(&mut self, ticket: Ticket, count: u32) {
        self.counts.insert(ticket, count);
    }

    /// Count of a ticket kind (missing entries count as zero).
    #[must_use]
    pub fn count(&self, ticket: Ticket) -> u32 {
        self.counts.get(&ticket).copied().unwrap_or(0)
    }

    /// True if there is an entry (possibly zero) for the ticket kind.
    #[must_use]
    pub fn has_entry(&self, ticket: Ticket) -> bool {
        self.counts.contains_key(&ticket)
    }

    /// True if at least `amount` tickets of the kind are held.
    #[must_use]
    pub fn has(&self, ticket: Ticket, amount: u32) -> bool {
        self.count(ticket) >= amount
    }

    /// Add one ticket.
    pub fn add(&mut self, ticket: Ticket) {
        *self.counts.entry(ticket).or_insert(0) += 1;
    }

    /// Remove one ticket, saturating at zero.
    pub fn remove(&mut self, ticket: Ticket) {
        let count = self.counts.entry(ticket).or_insert(0);
        debug_assert!(*count > 0, "spent a {ticket} ticket that was not held");
        *count = count.saturating_sub(1);
    }
}

impl FromIterator<(Ticket, u32)> for Tickets {
    fn from_iter<I: IntoIterator<Item = (Ticket, u32)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}
