//! Applying a committed chain of actions to the board.
//!
//! Actions are applied strictly in the order they were chosen, and each one
//! uses the coordinates it recorded at generation time. Nothing here checks
//! legality: an action that was never offered, or one whose snapshot no
//! longer matches the board, is a programming error and panics.

use crate::{Action, ActionKind, Board, Effect};
use tracing::trace;

/// Applies every action of `chain` in order and returns the resulting board
/// changes in the same order.
///
/// # Panics
///
/// Panics if an action's recorded cells do not match the board, or if the
/// board invariants fail afterwards.
pub fn apply_chain(board: &mut Board, chain: &[Action]) -> Vec<Effect> {
    let mut effects = Vec::new();
    for action in chain {
        apply_action(board, action, &mut effects);
    }
    board.check_invariants();
    effects
}

fn apply_action(board: &mut Board, action: &Action, effects: &mut Vec<Effect>) {
    match action.kind() {
        ActionKind::Swap { partner } => {
            board.swap(action.piece(), action.from(), *partner, action.to());
            effects.push(Effect::Swap {
                piece: action.piece(),
                partner: *partner,
                from: action.from(),
                to: action.to(),
            });
        }
        ActionKind::Smash { pushes } => {
            move_and_capture(board, action, effects);
            for push in pushes {
                // Skip a push whose piece has gone or whose target filled up.
                if board.piece_at(push.from) != Some(push.piece) || !board.is_empty_at(push.to) {
                    trace!(piece = %push.piece, from = %push.from, to = %push.to, "push dropped");
                    continue;
                }
                board.relocate(push.piece, push.from, push.to);
                effects.push(Effect::Push {
                    piece: push.piece,
                    from: push.from,
                    to: push.to,
                });
            }
        }
        ActionKind::Advance
        | ActionKind::Vault
        | ActionKind::Confirm
        | ActionKind::Goto
        | ActionKind::SpinAttack => move_and_capture(board, action, effects),
    }
}

/// Vacates the origin, removes every victim and occupies the destination.
/// Actions that stay put (confirm, spin attack) only capture.
fn move_and_capture(board: &mut Board, action: &Action, effects: &mut Vec<Effect>) {
    assert_eq!(
        board.piece_at(action.from()),
        Some(action.piece()),
        "piece {} is not on its recorded origin {}",
        action.piece(),
        action.from()
    );

    let captured: Vec<Effect> = action
        .victims()
        .iter()
        .map(|victim| {
            let piece = board.evict(victim.piece, victim.at);
            Effect::Capture {
                piece: piece.id,
                owner: piece.owner,
                kind: piece.kind,
                at: victim.at,
            }
        })
        .collect();

    if action.from() != action.to() {
        board.relocate(action.piece(), action.from(), action.to());
        effects.push(Effect::Move {
            piece: action.piece(),
            from: action.from(),
            to: action.to(),
        });
    }
    effects.extend(captured);
}
