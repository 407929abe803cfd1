//! Bishop actions: diagonal slides, captures and swaps.

use super::{generate_slides, FriendlyBlocker, Mover, DIAGONALS};
use crate::{Action, Board};

pub(crate) fn generate_bishop_actions(board: &Board, mover: &Mover, actions: &mut Vec<Action>) {
    generate_slides(board, mover, &DIAGONALS, FriendlyBlocker::Swap, actions);
}

#[cfg(test)]
mod tests {
    use crate::movegen::candidates;
    use crate::{ActionKind, Board};
    use skirmish_core::{Coord, Layout};

    fn c(s: &str) -> Coord {
        Coord::from_algebraic(s).unwrap()
    }

    #[test]
    fn bishop_in_startpos_can_only_swap() {
        let board = Board::startpos();
        let bishop = board.piece_at(c("c1")).unwrap();
        let actions = candidates(&board, bishop, &[]);
        assert_eq!(actions.len(), 2);
        assert!(actions
            .iter()
            .all(|a| matches!(a.kind(), ActionKind::Swap { .. }) && a.is_terminal()));
        let mut targets: Vec<Coord> = actions.iter().map(|a| a.to()).collect();
        targets.sort();
        assert_eq!(targets, vec![c("b2"), c("d2")]);
    }

    #[test]
    fn slide_stops_at_blockers() {
        // Bishop d4, enemy f6, friend b2, open toward a7 and g1.
        let board = Board::from_layout(&Layout::parse("8/8/5p2/8/3B4/8/1P6/8 0").unwrap());
        let bishop = board.piece_at(c("d4")).unwrap();
        let actions = candidates(&board, bishop, &[]);

        let gotos: Vec<Coord> = actions
            .iter()
            .filter(|a| a.kind() == &ActionKind::Goto && !a.is_capture())
            .map(|a| a.to())
            .collect();
        for cell in ["c3", "c5", "b6", "a7", "e3", "f2", "g1", "e5"] {
            assert!(gotos.contains(&c(cell)), "missing goto {cell}");
        }
        assert_eq!(gotos.len(), 8);

        let capture = actions.iter().find(|a| a.is_capture()).unwrap();
        assert_eq!(capture.to(), c("f6"));
        assert_eq!(capture.victims()[0].at, c("f6"));
        assert!(actions.iter().all(|a| a.to() != c("g7")));

        let swap = actions
            .iter()
            .find(|a| matches!(a.kind(), ActionKind::Swap { .. }))
            .unwrap();
        assert_eq!(swap.to(), c("b2"));
        assert!(actions.iter().all(|a| a.to() != c("a1")));
    }

    #[test]
    fn distant_enemy_is_captured_not_swapped() {
        let board = Board::from_layout(&Layout::parse("7p/8/8/8/8/8/8/B7 0").unwrap());
        let bishop = board.piece_at(c("a1")).unwrap();
        let actions = candidates(&board, bishop, &[]);
        assert_eq!(actions.len(), 7);
        let last = actions.last().unwrap();
        assert_eq!(last.to(), c("h8"));
        assert_eq!(last.kind(), &ActionKind::Goto);
        assert!(last.is_capture());
    }
}
