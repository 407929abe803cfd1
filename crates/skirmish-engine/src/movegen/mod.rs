//! Candidate generation.
//!
//! Given a piece and the actions already chosen this turn, produce every
//! action the player may pick next. Generation only reads the board; the
//! chosen actions are applied later by [`crate::apply`].

mod bishop;
mod knight;
mod pawn;
mod queen;

use crate::{Action, Board, PieceId, Victim};
use skirmish_core::{Coord, PieceKind, Player};

/// The eight king-step directions, orthogonals first.
pub(crate) const AROUND: [(i8, i8); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (1, -1),
    (1, 1),
    (-1, -1),
    (-1, 1),
];

/// The four diagonal directions.
pub(crate) const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Returns the cell the piece acts from: the destination of the last chained
/// action, or the piece's live cell when nothing has been chosen yet.
pub fn current_position(board: &Board, piece: PieceId, chain: &[Action]) -> Option<Coord> {
    match chain.last() {
        Some(last) => Some(last.to()),
        None => board.coord_of(piece),
    }
}

/// Generates every candidate action for `piece` given the actions already
/// chosen this turn.
///
/// Returns an empty list if the piece is no longer on the board. Output
/// order is deterministic for a given board and chain.
pub fn candidates(board: &Board, piece: PieceId, chain: &[Action]) -> Vec<Action> {
    let mut actions = Vec::new();
    let (Some(p), Some(origin)) = (board.piece(piece), current_position(board, piece, chain))
    else {
        return actions;
    };
    let mover = Mover {
        id: piece,
        owner: p.owner,
        origin,
    };

    match p.kind {
        PieceKind::Pawn => pawn::generate_pawn_actions(board, &mover, chain, &mut actions),
        PieceKind::Bishop => bishop::generate_bishop_actions(board, &mover, &mut actions),
        PieceKind::Knight => knight::generate_knight_actions(board, &mover, &mut actions),
        PieceKind::Queen => queen::generate_queen_actions(board, &mover, &mut actions),
        // Movement for these two kinds is not defined yet.
        PieceKind::Castle | PieceKind::King => {}
    }

    actions
}

/// The piece being moved and where it acts from.
pub(crate) struct Mover {
    pub id: PieceId,
    pub owner: Player,
    pub origin: Coord,
}

/// What occupies a target cell, from the mover's point of view.
pub(crate) enum Target {
    Empty,
    Enemy(Victim),
    Friend(PieceId),
}

pub(crate) fn target(board: &Board, owner: Player, at: Coord) -> Target {
    match board.occupant(at) {
        None => Target::Empty,
        Some(p) if p.owner != owner => Target::Enemy(Victim { piece: p.id, at }),
        Some(p) => Target::Friend(p.id),
    }
}

/// How a slide treats the first friendly piece it runs into.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum FriendlyBlocker {
    Swap,
    Stop,
}

/// Walks outward along each direction offering a terminal goto on every
/// empty cell and stopping at the first occupied one. An enemy blocker is
/// offered as a capture; a friendly blocker is offered as a swap or ignored.
pub(crate) fn generate_slides(
    board: &Board,
    mover: &Mover,
    directions: &[(i8, i8)],
    friendly: FriendlyBlocker,
    actions: &mut Vec<Action>,
) {
    for &(dx, dy) in directions {
        let mut next = mover.origin.offset(dx, dy);
        while let Some(cell) = next {
            match target(board, mover.owner, cell) {
                Target::Empty => actions.push(Action::goto(mover.id, mover.origin, cell, None)),
                Target::Enemy(victim) => {
                    actions.push(Action::goto(mover.id, mover.origin, cell, Some(victim)));
                    break;
                }
                Target::Friend(partner) => {
                    if friendly == FriendlyBlocker::Swap {
                        actions.push(Action::swap(mover.id, mover.origin, partner, cell));
                    }
                    break;
                }
            }
            next = cell.offset(dx, dy);
        }
    }
}
