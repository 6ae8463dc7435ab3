//! Game host: one `GameState`, one actor per seat, and the spectators.
//!
//! The host runs the request/response protocol: compute the current
//! player's legal moves, ask its actor for one, apply it, and forward every
//! event to the registered spectators. Nothing changes between computing the
//! legal moves and applying the actor's answer.

use std::rc::Rc;

use tracing::{debug, info, instrument};

use crate::actors::PlayerActor;
use crate::core::{GameConfig, GameState, Move};
use crate::error::{ConfigError, GameError, MoveError, SpectatorError};
use crate::observer::{Spectator, Spectators};
use crate::rules::{Outcome, TurnOutcome};

/// A running game with its actors and spectators.
pub struct Game {
    state: GameState,
    /// Indexed like the player list: quarry first.
    actors: Vec<Box<dyn PlayerActor>>,
    spectators: Spectators,
}

impl Game {
    /// Validate the configuration and seat one actor per player
    /// (quarry first, then hunters in configuration order).
    pub fn new(config: GameConfig, actors: Vec<Box<dyn PlayerActor>>) -> Result<Self, ConfigError> {
        let expected = config.player_count();
        if actors.len() != expected {
            return Err(ConfigError::ActorCount {
                expected,
                actual: actors.len(),
            });
        }

        let state = GameState::new(config)?;
        debug!(players = ?state.players(), rounds = state.round_count(), "game created");

        Ok(Self {
            state,
            actors,
            spectators: Spectators::new(),
        })
    }

    /// Full game state, for the host. Actors and spectators only ever get
    /// its redacted `GameState::view`.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    // === Spectators ===

    /// Register a spectator. The same `Rc` may not be registered twice.
    pub fn register_spectator(&mut self, spectator: Rc<dyn Spectator>) -> Result<(), SpectatorError> {
        self.spectators.register(spectator)
    }

    /// Unregister a previously registered spectator.
    pub fn unregister_spectator(&mut self, spectator: &Rc<dyn Spectator>) -> Result<(), SpectatorError> {
        self.spectators.unregister(spectator)
    }

    /// Registered spectators, in notification order.
    #[must_use]
    pub fn spectators(&self) -> &[Rc<dyn Spectator>] {
        self.spectators.as_slice()
    }

    // === Play ===

    /// Apply a move for the current player and notify spectators.
    ///
    /// For hosts that collect moves themselves instead of through actors.
    pub fn submit(&mut self, mv: Move) -> Result<TurnOutcome, MoveError> {
        self.state.apply(mv, &mut self.spectators)
    }

    /// Play one rotation: the quarry's move, then every hunter's move,
    /// stopping early if the game ends.
    ///
    /// Fails with `MoveError::GameOver` if called on a finished game, and
    /// with `MoveError::Illegal` if an actor answers with a move outside its
    /// legal set (the state is left as it was before that move).
    #[instrument(skip(self), fields(round = self.state.current_round()))]
    pub fn start_rotate(&mut self) -> Result<TurnOutcome, GameError> {
        if self.state.is_over() {
            return Err(MoveError::GameOver.into());
        }

        loop {
            let seat = self.state.current_player;
            let colour = self.state.current_player();
            let moves = self.state.legal_moves(colour);
            let location = self.state.players[seat].location();

            let mv = self.actors[seat].choose_move(self.state.view(), location, &moves);
            debug!(%colour, %mv, "actor chose move");

            match self.state.apply(mv, &mut self.spectators)? {
                TurnOutcome::AwaitingHunter(_) => continue,
                outcome => return Ok(outcome),
            }
        }
    }

    /// Play rotations until the game ends.
    pub fn play(&mut self) -> Result<Outcome, GameError> {
        loop {
            if let TurnOutcome::GameOver(outcome) = self.start_rotate()? {
                info!(reason = ?outcome.reason, rounds = self.state.current_round(), "game finished");
                return Ok(outcome);
            }
        }
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("actors", &self.actors.len())
            .field("spectators", &self.spectators)
            .finish()
    }
}
