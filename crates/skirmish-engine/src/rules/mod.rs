//! Rule set abstraction.
//!
//! This module provides the [`RuleSet`] trait, the seam between the
//! selection session and the piece rules. The session never inspects piece
//! kinds itself; it asks the active rule set for candidates and hands
//! committed chains back to it.

mod skirmish;

pub use skirmish::SkirmishRules;

use crate::{apply, Action, Board, Effect, PieceId};

/// Trait for implementing a set of piece rules.
///
/// # Example
///
/// ```
/// use skirmish_engine::rules::RuleSet;
/// use skirmish_engine::SkirmishRules;
/// use skirmish_core::Coord;
///
/// let board = SkirmishRules.initial_board();
/// let pawn = board.piece_at(Coord::from_algebraic("e2").unwrap()).unwrap();
/// let actions = SkirmishRules.candidates(&board, pawn, &[]);
/// assert_eq!(actions.len(), 1);
/// ```
pub trait RuleSet {
    /// Returns the starting board for these rules.
    fn initial_board(&self) -> Board;

    /// Generates the actions `piece` may choose next, given the actions
    /// already chosen this turn. Must not depend on anything but its inputs.
    fn candidates(&self, board: &Board, piece: PieceId, chain: &[Action]) -> Vec<Action>;

    /// Applies a finished chain to the board.
    ///
    /// # Panics
    ///
    /// May panic if the chain was not produced by [`candidates`](RuleSet::candidates)
    /// on this board.
    fn apply(&self, board: &mut Board, chain: &[Action]) -> Vec<Effect> {
        apply::apply_chain(board, chain)
    }
}
