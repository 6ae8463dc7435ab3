//! Events emitted by move application.
//!
//! Per applied move the order is:
//! 1. `MoveMade` with the reported move (for a double, the reported double
//!    followed by each leg's own events)
//! 2. `RoundStarted` once per quarry ticket spend, just before that leg's
//!    `MoveMade`
//! 3. `RotationComplete` or `GameOver`, unless a hunter moves next

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Move};
use crate::rules::Winners;

/// Something observers are told about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A move was made. Quarry moves are in their reported (redacted) form.
    MoveMade(Move),
    /// The quarry spent a ticket; carries the new round number.
    RoundStarted(usize),
    /// Play has returned to the quarry.
    RotationComplete,
    /// The game ended.
    GameOver(Winners),
}

/// Receiver for events as they happen.
///
/// `state` is the live state at the moment of emission, so a listener sees
/// intermediate states during a double move.
pub trait EventSink {
    fn emit(&mut self, state: &GameState, event: &GameEvent);
}

/// Collects events, ignoring the state.
impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, _state: &GameState, event: &GameEvent) {
        self.push(event.clone());
    }
}

/// Discards every event. Useful for look-ahead on a cloned state.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _state: &GameState, _event: &GameEvent) {}
}
