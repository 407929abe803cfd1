//! Pawn actions: advance, vault and confirm.

use super::{target, Mover, Target};
use crate::{Action, Board};

pub(crate) fn generate_pawn_actions(
    board: &Board,
    mover: &Mover,
    chain: &[Action],
    actions: &mut Vec<Action>,
) {
    let dy = mover.owner.forward();

    // Advance is only the opening step of a turn.
    if chain.is_empty() {
        if let Some(front) = mover.origin.offset(0, dy) {
            match target(board, mover.owner, front) {
                Target::Empty => actions.push(Action::advance(mover.id, mover.origin, front, None)),
                Target::Enemy(victim) => {
                    actions.push(Action::advance(mover.id, mover.origin, front, Some(victim)))
                }
                Target::Friend(_) => {}
            }
        }
    }

    // Vault over any adjacent diagonal-forward piece.
    for dx in [-1, 1] {
        let (Some(over), Some(landing)) = (
            mover.origin.offset(dx, dy),
            mover.origin.offset(dx * 2, dy * 2),
        ) else {
            continue;
        };
        if board.is_empty_at(over) {
            continue;
        }
        match target(board, mover.owner, landing) {
            Target::Empty => actions.push(Action::vault(mover.id, mover.origin, landing, None)),
            Target::Enemy(victim) => {
                actions.push(Action::vault(mover.id, mover.origin, landing, Some(victim)))
            }
            Target::Friend(_) => {}
        }
    }

    if !chain.is_empty() {
        actions.push(Action::confirm(mover.id, mover.origin));
    }
}
