//! The skirmish rule set.

use super::RuleSet;
use crate::{movegen, Action, Board, PieceId};

/// Skirmish piece rules.
///
/// - Pawns advance one cell, or vault over adjacent diagonal pieces and may
///   keep vaulting until they capture or confirm
/// - Bishops slide diagonally and swap with the first friendly blocker
/// - Knights smash onto their landing cell, pushing neighbours outward
/// - Queens slide in eight directions or spin-attack every neighbour
/// - Castles and kings do not move
#[derive(Debug, Clone, Copy, Default)]
pub struct SkirmishRules;

impl RuleSet for SkirmishRules {
    fn initial_board(&self) -> Board {
        Board::startpos()
    }

    fn candidates(&self, board: &Board, piece: PieceId, chain: &[Action]) -> Vec<Action> {
        movegen::candidates(board, piece, chain)
    }
}
