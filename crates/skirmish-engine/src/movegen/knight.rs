//! Knight actions: smash landings that push neighbours outward.

use super::{target, Mover, Target, AROUND};
use crate::{Action, Board, Push};
use skirmish_core::Coord;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, -1),
    (2, 1),
    (-1, 2),
    (1, 2),
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (1, -2),
];

pub(crate) fn generate_knight_actions(board: &Board, mover: &Mover, actions: &mut Vec<Action>) {
    for (dx, dy) in KNIGHT_OFFSETS {
        let Some(landing) = mover.origin.offset(dx, dy) else {
            continue;
        };
        let victim = match target(board, mover.owner, landing) {
            Target::Empty => None,
            Target::Enemy(victim) => Some(victim),
            Target::Friend(_) => continue,
        };
        let pushes = pushes_around(board, landing);
        actions.push(Action::smash(mover.id, mover.origin, landing, victim, pushes));
    }
}

/// Every piece adjacent to `landing` whose next cell outward is on the board
/// and empty, paired with that cell.
fn pushes_around(board: &Board, landing: Coord) -> Vec<Push> {
    let mut pushes = Vec::new();
    for (dx, dy) in AROUND {
        let Some(from) = landing.offset(dx, dy) else {
            continue;
        };
        let Some(piece) = board.piece_at(from) else {
            continue;
        };
        if let Some(to) = from.offset(dx, dy).filter(|&to| board.is_empty_at(to)) {
            pushes.push(Push { piece, from, to });
        }
    }
    pushes
}

#[cfg(test)]
mod tests {
    use crate::movegen::candidates;
    use crate::{ActionKind, Board, Push};
    use skirmish_core::{Coord, Layout};

    fn c(s: &str) -> Coord {
        Coord::from_algebraic(s).unwrap()
    }

    #[test]
    fn startpos_knight_has_two_smashes() {
        let board = Board::startpos();
        let knight = board.piece_at(c("b1")).unwrap();
        let actions = candidates(&board, knight, &[]);
        let mut landings: Vec<Coord> = actions.iter().map(|a| a.to()).collect();
        landings.sort();
        assert_eq!(landings, vec![c("a3"), c("c3")]);
        assert!(actions.iter().all(|a| a.is_terminal()));
    }

    #[test]
    fn smash_on_enemy_captures_and_schedules_pushes() {
        // Knight d4 lands on f5 (enemy). Neighbours: e6 (push to d7),
        // g5 (push to h5), f4 (blocked by f3).
        let board =
            Board::from_layout(&Layout::parse("8/8/4p3/5pp1/3N1P2/5P2/8/8 0").unwrap());
        let knight = board.piece_at(c("d4")).unwrap();
        let smash = candidates(&board, knight, &[])
            .into_iter()
            .find(|a| a.to() == c("f5"))
            .unwrap();

        assert!(matches!(smash.kind(), ActionKind::Smash { .. }));
        assert_eq!(smash.victims().len(), 1);
        assert_eq!(smash.victims()[0].at, c("f5"));

        let pushes = smash.pushes();
        assert_eq!(pushes.len(), 2);
        assert!(pushes.contains(&Push {
            piece: board.piece_at(c("g5")).unwrap(),
            from: c("g5"),
            to: c("h5"),
        }));
        assert!(pushes.contains(&Push {
            piece: board.piece_at(c("e6")).unwrap(),
            from: c("e6"),
            to: c("d7"),
        }));
    }

    #[test]
    fn friendly_landing_is_illegal() {
        let board = Board::from_layout(&Layout::parse("8/8/8/8/8/2P5/8/1N6 0").unwrap());
        let knight = board.piece_at(c("b1")).unwrap();
        let landings: Vec<Coord> = candidates(&board, knight, &[])
            .iter()
            .map(|a| a.to())
            .collect();
        assert_eq!(landings.len(), 2);
        assert!(!landings.contains(&c("c3")));
    }

    #[test]
    fn pieces_at_the_edge_are_not_pushed() {
        // Landing on b3 next to a3: the cell past a3 is off the board.
        let board = Board::from_layout(&Layout::parse("8/8/8/8/8/p7/8/2N5 0").unwrap());
        let knight = board.piece_at(c("c1")).unwrap();
        let smash = candidates(&board, knight, &[])
            .into_iter()
            .find(|a| a.to() == c("b3"))
            .unwrap();
        assert!(smash.pushes().is_empty());
        assert!(!smash.is_capture());
    }
}
