//! Win condition evaluation.
//!
//! `outcome` is the single source of truth. `is_over` and `winners` are both
//! derived from it, so they cannot disagree about whether the game ended.
//!
//! Conditions, checked in order:
//! 1. a hunter stands on the quarry's true location (hunters win)
//! 2. the quarry is due to move and the schedule is exhausted (quarry wins)
//! 3. no hunter has anything but `Pass` (quarry wins)
//! 4. the quarry is due to move and has no legal move (hunters win)

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::generator::legal_moves;
use crate::core::state::QUARRY_INDEX;
use crate::core::{is_pass_only, Colour, GameState, Role};

/// Colours of the winning side. Empty while the game is running.
pub type Winners = FxHashSet<Colour>;

/// Why the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// A hunter reached the quarry.
    Captured,
    /// The quarry survived every round in the schedule.
    RoundLimit,
    /// No hunter can move.
    HuntersStuck,
    /// The quarry cannot move on its turn.
    QuarryStuck,
}

impl WinReason {
    /// Side that wins for this reason.
    #[must_use]
    pub const fn winning_role(self) -> Role {
        match self {
            WinReason::Captured | WinReason::QuarryStuck => Role::Hunter,
            WinReason::RoundLimit | WinReason::HuntersStuck => Role::Quarry,
        }
    }
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    pub reason: WinReason,
}

impl Outcome {
    #[must_use]
    pub const fn new(reason: WinReason) -> Self {
        Self { reason }
    }

    #[must_use]
    pub const fn winning_role(&self) -> Role {
        self.reason.winning_role()
    }

    /// Colours on the winning side.
    #[must_use]
    pub fn winners(&self, state: &GameState) -> Winners {
        match self.winning_role() {
            Role::Quarry => std::iter::once(Colour::QUARRY).collect(),
            Role::Hunter => state.hunters().map(|h| h.colour()).collect(),
        }
    }
}

/// Evaluate the state. `None` while the game continues.
#[must_use]
pub fn outcome(state: &GameState) -> Option<Outcome> {
    let quarry = state.quarry();
    if state.is_occupied_by_hunter(quarry.location()) {
        return Some(Outcome::new(WinReason::Captured));
    }

    let quarry_to_move = state.current_player == QUARRY_INDEX;
    if quarry_to_move && state.current_round() >= state.round_count() {
        return Some(Outcome::new(WinReason::RoundLimit));
    }

    if state
        .hunters()
        .all(|h| is_pass_only(&legal_moves(state, h.colour())))
    {
        return Some(Outcome::new(WinReason::HuntersStuck));
    }

    if quarry_to_move && legal_moves(state, quarry.colour()).is_empty() {
        return Some(Outcome::new(WinReason::QuarryStuck));
    }

    None
}

/// True once the game has ended.
#[must_use]
pub fn is_over(state: &GameState) -> bool {
    outcome(state).is_some()
}

/// Winning colours, or the empty set while the game continues.
#[must_use]
pub fn winners(state: &GameState) -> Winners {
    outcome(state)
        .map(|o| o.winners(state))
        .unwrap_or_default()
}

impl GameState {
    /// See [`outcome`].
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        outcome(self)
    }

    /// See [`is_over`].
    #[must_use]
    pub fn is_over(&self) -> bool {
        is_over(self)
    }

    /// See [`winners`].
    #[must_use]
    pub fn winners(&self) -> Winners {
        winners(self)
    }
}
