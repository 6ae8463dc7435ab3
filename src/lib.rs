//! # pursuit-engine
//!
//! Rule engine for hidden-movement pursuit board games: one hidden quarry
//! is chased by several hunters across a transport network of taxi, bus,
//! underground and ferry connections.
//!
//! ## Design Principles
//!
//! 1. **One owner of state**: `GameState` holds players, round schedule,
//!    turn pointer and the quarry's last-known location. Only
//!    `GameState::apply` mutates it.
//!
//! 2. **Pure rules**: move generation and win evaluation are functions of
//!    the state. "Stuck" means exactly "the generator offers nothing".
//!
//! 3. **Validate, then mutate**: every error is detected before any change,
//!    so there is never anything to roll back.
//!
//! ## Hidden Information
//!
//! The quarry's true location only becomes public on reveal rounds.
//! Observers receive redacted moves; the ticket used is always reported,
//! which is why secret tickets exist.
//!
//! ## Modules
//!
//! - `core`: tickets, players, moves, configuration, state, RNG
//! - `network`: locations and typed edges
//! - `rules`: move generation, visibility, move application, win conditions
//! - `observer`: events, event sinks, spectators
//! - `actors`: the `PlayerActor` trait and reference actors
//! - `game`: the host loop tying state, actors and spectators together

pub mod core;
pub mod network;
pub mod rules;
pub mod observer;
pub mod actors;
pub mod game;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Colour, Role, Ticket, Tickets, Transport,
    Player, PlayerConfig, GameConfig,
    Move, MoveSet, TicketMove, DoubleMove,
    GameState, GameView, NOT_STARTED,
    GameRng, GameRngState,
};

pub use crate::network::{Edge, Location, Network};

pub use crate::rules::{legal_moves, Outcome, TurnOutcome, WinReason, Winners};

pub use crate::observer::{EventLog, EventSink, GameEvent, NullSink, Spectator, Spectators};

pub use crate::actors::{FirstMovePlayer, PlayerActor, RandomPlayer};

pub use crate::game::Game;

pub use crate::error::{ConfigError, GameError, MoveError, SpectatorError};
