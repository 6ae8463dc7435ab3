//! Observer side of the engine.
//!
//! Move application reports what happened through an `EventSink`. The
//! `Game` host forwards those events to its registered `Spectator`s; tests
//! and look-ahead code can use a plain `Vec<GameEvent>` or `NullSink`.

pub mod event;
pub mod spectator;

pub use event::{EventSink, GameEvent, NullSink};
pub use spectator::{EventLog, Spectator, Spectators};
