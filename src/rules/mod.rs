//! Game rules.
//!
//! - `generator`: legal moves for any player
//! - `visibility`: how quarry moves are reported to observers
//! - `turn`: move application and turn advancement
//! - `win`: terminal-state detection
//!
//! Generation and evaluation are pure functions of `GameState`; only
//! `GameState::apply` mutates.

pub mod generator;
pub mod visibility;
pub mod turn;
pub mod win;

pub use generator::{legal_moves, ticket_moves, TicketMoves};
pub use turn::TurnOutcome;
pub use visibility::{report_double, report_single};
pub use win::{is_over, outcome, winners, Outcome, WinReason, Winners};
