//! Spectators: passive listeners registered on a `Game`.
//!
//! Spectators are shared (`Rc`) so the host can keep a handle to the same
//! listener it registered. Identity is pointer identity: registering the
//! same `Rc` twice is an error, as is unregistering one that was never
//! registered.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;

use super::event::{EventSink, GameEvent};
use crate::core::{GameState, GameView, Move};
use crate::error::SpectatorError;
use crate::rules::Winners;

/// Listener for game events. Every method defaults to a no-op.
///
/// `view` reflects the game at the moment of the event, so during a double
/// move it shows the state between the two legs.
pub trait Spectator {
    fn on_move_made(&self, _view: GameView<'_>, _mv: &Move) {}

    fn on_round_started(&self, _view: GameView<'_>, _round: usize) {}

    fn on_rotation_complete(&self, _view: GameView<'_>) {}

    fn on_game_over(&self, _view: GameView<'_>, _winners: &Winners) {}
}

fn same_spectator(a: &Rc<dyn Spectator>, b: &Rc<dyn Spectator>) -> bool {
    std::ptr::eq(Rc::as_ptr(a) as *const (), Rc::as_ptr(b) as *const ())
}

/// Registered spectators, notified in registration order.
#[derive(Clone, Default)]
pub struct Spectators {
    registered: Vec<Rc<dyn Spectator>>,
}

impl Spectators {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a spectator.
    pub fn register(&mut self, spectator: Rc<dyn Spectator>) -> Result<(), SpectatorError> {
        if self.contains(&spectator) {
            warn!("rejected duplicate spectator registration");
            return Err(SpectatorError::AlreadyRegistered);
        }
        self.registered.push(spectator);
        Ok(())
    }

    /// Unregister a previously registered spectator.
    pub fn unregister(&mut self, spectator: &Rc<dyn Spectator>) -> Result<(), SpectatorError> {
        let Some(index) = self
            .registered
            .iter()
            .position(|s| same_spectator(s, spectator))
        else {
            warn!("rejected unregistration of unknown spectator");
            return Err(SpectatorError::NotRegistered);
        };
        self.registered.remove(index);
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, spectator: &Rc<dyn Spectator>) -> bool {
        self.registered.iter().any(|s| same_spectator(s, spectator))
    }

    /// Registered spectators (read-only).
    #[must_use]
    pub fn as_slice(&self) -> &[Rc<dyn Spectator>] {
        &self.registered
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.registered.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }
}

impl std::fmt::Debug for Spectators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spectators")
            .field("count", &self.registered.len())
            .finish()
    }
}

impl EventSink for Spectators {
    fn emit(&mut self, state: &GameState, event: &GameEvent) {
        let view = state.view();
        for spectator in &self.registered {
            match event {
                GameEvent::MoveMade(mv) => spectator.on_move_made(view, mv),
                GameEvent::RoundStarted(round) => spectator.on_round_started(view, *round),
                GameEvent::RotationComplete => spectator.on_rotation_complete(view),
                GameEvent::GameOver(winners) => spectator.on_game_over(view, winners),
            }
        }
    }
}

/// Spectator that records every event it sees.
///
/// ```
/// use std::rc::Rc;
/// use pursuit_engine::observer::{EventLog, Spectators};
///
/// let log = Rc::new(EventLog::new());
/// let mut spectators = Spectators::new();
/// spectators.register(log.clone()).unwrap();
/// assert!(log.events().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct EventLog {
    events: RefCell<Vec<GameEvent>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    fn record(&self, event: GameEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl Spectator for EventLog {
    fn on_move_made(&self, _view: GameView<'_>, mv: &Move) {
        self.record(GameEvent::MoveMade(*mv));
    }

    fn on_round_started(&self, _view: GameView<'_>, round: usize) {
        self.record(GameEvent::RoundStarted(round));
    }

    fn on_rotation_complete(&self, _view: GameView<'_>) {
        self.record(GameEvent::RotationComplete);
    }

    fn on_game_over(&self, _view: GameView<'_>, winners: &Winners) {
        self.record(GameEvent::GameOver(winners.clone()));
    }
}
