//! Queen actions: spin attack plus eight-way slides.

use super::{generate_slides, FriendlyBlocker, Mover, AROUND};
use crate::{Action, Board, Victim};

pub(crate) fn generate_queen_actions(board: &Board, mover: &Mover, actions: &mut Vec<Action>) {
    // Spin attack hits every neighbour, friend or foe.
    let victims: Vec<Victim> = AROUND
        .iter()
        .filter_map(|&(dx, dy)| mover.origin.offset(dx, dy))
        .filter_map(|at| board.piece_at(at).map(|piece| Victim { piece, at }))
        .collect();
    if !victims.is_empty() {
        actions.push(Action::spin_attack(mover.id, mover.origin, victims));
    }

    generate_slides(board, mover, &AROUND, FriendlyBlocker::Stop, actions);
}
