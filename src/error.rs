//! Error types.
//!
//! Every failure is detected before any state is mutated, so a returned error
//! always leaves the game exactly as it was.

use thiserror::Error;

use crate::core::{Colour, Move, Ticket};
use crate::network::Location;

/// Rejected game setup. The game instance is never created.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("the round schedule cannot be empty")]
    EmptyRounds,
    #[error("the transport network cannot be empty")]
    EmptyNetwork,
    #[error("at least one hunter is required")]
    NoHunters,
    #[error("the quarry must be {}, got {0}", Colour::QUARRY)]
    QuarryColour(Colour),
    #[error("two players share the colour {0}")]
    DuplicateColour(Colour),
    #[error("two players start at {0}")]
    DuplicateLocation(Location),
    #[error("{colour} has no entry for {ticket} tickets")]
    MissingTicket { colour: Colour, ticket: Ticket },
    #[error("hunter {colour} holds {ticket} tickets")]
    HunterSpecialTicket { colour: Colour, ticket: Ticket },
    #[error("expected {expected} player actors, got {actual}")]
    ActorCount { expected: usize, actual: usize },
}

/// Rejected move submission.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("{mv} is not a legal move for {colour}")]
    Illegal { mv: Move, colour: Colour },
    #[error("the game is already over")]
    GameOver,
}

/// Rejected spectator (un)registration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SpectatorError {
    #[error("spectator is already registered")]
    AlreadyRegistered,
    #[error("spectator was never registered")]
    NotRegistered,
}

/// Any error surfaced by the `Game` host.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error(transparent)]
    Spectator(#[from] SpectatorError),
}
