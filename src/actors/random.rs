use super::{sorted_moves, PlayerActor};
use crate::core::{GameRng, GameRngState, GameView, Move, MoveSet};
use crate::network::Location;

/// Picks uniformly among the legal moves.
///
/// Moves are sorted before choosing, so the same seed and the same game
/// always produce the same choices.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// One actor per seat, each on its own fork of a table-wide seed.
    #[must_use]
    pub fn table(seed: u64, seats: usize) -> Vec<Self> {
        let mut table = GameRng::new(seed);
        (0..seats).map(|_| Self::from_rng(table.fork())).collect()
    }

    /// Checkpoint of the RNG, to resume the same choice sequence later.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn from_rng_state(state: &GameRngState) -> Self {
        Self::from_rng(GameRng::from_state(state))
    }
}

impl PlayerActor for RandomPlayer {
    fn choose_move(&mut self, view: GameView<'_>, _location: Location, moves: &MoveSet) -> Move {
        let sorted = sorted_moves(moves);
        self.rng
            .choose(&sorted)
            .copied()
            .unwrap_or(Move::pass(view.current_player()))
    }
}
