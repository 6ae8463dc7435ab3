//! Transport network: locations joined by typed edges.
//!
//! The engine only ever asks one question of the network: "which edges leave
//! this location?". Everything else (map files, coordinates, rendering) is a
//! host concern.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::ticket::Transport;

/// A location on the board.
///
/// Locations are opaque identifiers. `Location(0)` is reserved as the
/// "never revealed" sentinel for the quarry's public location, so real maps
/// number their stations from 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location(pub u32);

impl Location {
    /// Sentinel reported for the quarry before its first reveal.
    pub const UNREVEALED: Location = Location(0);

    /// Create a new location.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw location number.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// True for the never-revealed sentinel.
    #[must_use]
    pub const fn is_unrevealed(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An outgoing connection from a location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Where the edge leads.
    pub destination: Location,
    /// How the edge is travelled.
    pub transport: Transport,
}

impl Edge {
    /// Create a new edge.
    #[must_use]
    pub const fn new(destination: Location, transport: Transport) -> Self {
        Self {
            destination,
            transport,
        }
    }
}

/// Edge list for a single location.
/// Most stations have at most a handful of connections.
pub type EdgeList = SmallVec<[Edge; 6]>;

/// Immutable-once-built transport graph.
///
/// ## Example
///
/// ```
/// use pursuit_engine::network::{Location, Network};
/// use pursuit_engine::core::Transport;
///
/// let network = Network::new()
///     .with_connection(Location(1), Location(2), Transport::Taxi)
///     .with_connection(Location(2), Location(3), Transport::Bus);
///
/// assert_eq!(network.edges_from(Location(2)).len(), 2);
/// assert!(network.edges_from(Location(99)).is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    adjacency: FxHashMap<Location, EdgeList>,
}

impl Network {
    /// Create an empty network.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location with no edges (no-op if it already exists).
    pub fn add_location(&mut self, location: Location) {
        self.adjacency.entry(location).or_default();
    }

    /// Add a one-way edge.
    pub fn add_edge(&mut self, from: Location, to: Location, transport: Transport) {
        self.add_location(to);
        self.adjacency
            .entry(from)
            .or_default()
            .push(Edge::new(to, transport));
    }

    /// Add a two-way connection (the normal case on a board).
    pub fn add_connection(&mut self, a: Location, b: Location, transport: Transport) {
        self.add_edge(a, b, transport);
        self.add_edge(b, a, transport);
    }

    /// Add a location (builder pattern).
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.add_location(location);
        self
    }

    /// Add a two-way connection (builder pattern).
    #[must_use]
    pub fn with_connection(mut self, a: Location, b: Location, transport: Transport) -> Self {
        self.add_connection(a, b, transport);
        self
    }

    /// Edges leaving `location`. Unknown locations have no edges.
    #[must_use]
    pub fn edges_from(&self, location: Location) -> &[Edge] {
        self.adjacency
            .get(&location)
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
    }

    /// Check whether a location is part of the network.
    #[must_use]
    pub fn contains(&self, location: Location) -> bool {
        self.adjacency.contains_key(&location)
    }

    /// Number of locations.
    #[must_use]
    pub fn location_count(&self) -> usize {
        self.adjacency.len()
    }

    /// True if the network has no locations at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterate over all locations (unordered).
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.adjacency.keys().copied()
    }
}
