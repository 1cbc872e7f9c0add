//! Move selection for the computer player.
//!
//! The strategy is a single-ply heuristic: take a capture if one is on offer,
//! otherwise make any simple move. It never looks further ahead than the
//! current legal-move list.
use crate::engine::{Move, RulesEngine};
use crate::error::SelectMoveError;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{instrument, trace};

/// Something that can pick a move for the side to play.
pub trait MoveSelector {
    /// Chooses one of `rules.legal_moves()`.
    ///
    /// # Errors
    /// Returns `SelectMoveError::NoMovesAvailable` when the side to move has no legal move.
    fn select_move(&mut self, rules: &dyn RulesEngine) -> Result<Move, SelectMoveError>;
}

/// Splits `moves` into captures (two-square jumps) and simple one-square moves.
///
/// Both halves keep the order the moves had in `moves`.
pub fn partition_moves(moves: &[Move]) -> (Vec<Move>, Vec<Move>) {
    moves.iter().copied().partition(|mv| mv.is_jump())
}

/// Picks a random capture when any exist, otherwise a random simple move.
///
/// The random source is supplied by the caller, so a seeded generator makes
/// the selector fully reproducible.
///
/// # Examples
/// ```
/// use checkers::engine::Game;
/// use checkers::heuristics::{CapturePrioritySelector, MoveSelector};
///
/// let game = Game::new();
/// let mut selector = CapturePrioritySelector::seeded(7);
/// let mv = selector.select_move(&game).unwrap();
/// assert!(game.legal_moves().contains(&mv));
/// ```
#[derive(Clone, Debug)]
pub struct CapturePrioritySelector<R: Rng = SmallRng> {
    rng: R,
}

impl<R: Rng> CapturePrioritySelector<R> {
    pub fn new(rng: R) -> Self {
        CapturePrioritySelector { rng }
    }
}

impl CapturePrioritySelector<SmallRng> {
    /// A selector whose choices are fixed by `seed`.
    pub fn seeded(seed: u64) -> Self {
        CapturePrioritySelector::new(SmallRng::seed_from_u64(seed))
    }

    /// A selector seeded from the operating system, for interactive play.
    pub fn from_entropy() -> Self {
        CapturePrioritySelector::new(SmallRng::from_entropy())
    }
}

impl<R: Rng> MoveSelector for CapturePrioritySelector<R> {
    #[instrument(skip_all, fields(player = %rules.current_player()))]
    fn select_move(&mut self, rules: &dyn RulesEngine) -> Result<Move, SelectMoveError> {
        let legal = rules.legal_moves();
        let (captures, simple_moves) = partition_moves(&legal);
        trace!(
            captures = captures.len(),
            simple_moves = simple_moves.len(),
            "partitioned legal moves"
        );

        let pool = if captures.is_empty() {
            &simple_moves
        } else {
            &captures
        };

        let chosen = pool
            .choose(&mut self.rng)
            .copied()
            .ok_or(SelectMoveError::NoMovesAvailable)?;
        trace!(%chosen, "selected move");
        Ok(chosen)
    }
}
