//! Core data model: tickets, players, moves, configuration, state and its
//! redacted view, RNG.
//!
//! This module holds the value types every other module builds on. Rules
//! (move generation, application, win evaluation) live in `rules`.

pub mod ticket;
pub mod player;
pub mod moves;
pub mod config;
pub mod state;
pub mod rng;
pub mod view;

pub use ticket::{Ticket, Tickets, Transport};
pub use player::{Colour, Player, PlayerConfig, Role};
pub use moves::{is_pass_only, DoubleMove, Move, MoveSet, TicketMove};
pub use config::GameConfig;
pub use state::{GameState, NOT_STARTED};
pub use rng::{GameRng, GameRngState};
pub use view::GameView;
