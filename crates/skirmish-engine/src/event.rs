//! Outbound notifications for the presentation layer.

use crate::{Action, PieceId, PieceState};
use serde::{Deserialize, Serialize};
use skirmish_core::{Coord, PieceKind, Player};

/// One board change, reported in the order it was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    /// A piece moved to an empty cell.
    Move {
        piece: PieceId,
        from: Coord,
        to: Coord,
    },
    /// A piece was removed from the board for good.
    Capture {
        piece: PieceId,
        owner: Player,
        kind: PieceKind,
        at: Coord,
    },
    /// Two pieces traded cells.
    Swap {
        piece: PieceId,
        partner: PieceId,
        from: Coord,
        to: Coord,
    },
    /// A piece was shoved one cell by a smash.
    Push {
        piece: PieceId,
        from: Coord,
        to: Coord,
    },
}

/// Notification produced by a session in response to an inbound event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// A piece's highlight state changed.
    PieceStateChanged { piece: PieceId, state: PieceState },
    /// The set of actions offered for the selected piece changed.
    CandidatesChanged {
        piece: PieceId,
        candidates: Vec<Action>,
    },
    /// A chain was committed; effects are in apply order.
    BoardMutated { effects: Vec<Effect> },
    /// Control passed to another player.
    TurnChanged { active: Player },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    #[test]
    fn events_serialize_with_tags() {
        let mut board = Board::empty();
        let c = |s: &str| Coord::from_algebraic(s).unwrap();
        let id = board.place(Player::Player0, PieceKind::Pawn, c("a2"));

        let effect = Effect::Move {
            piece: id,
            from: c("a2"),
            to: c("a3"),
        };
        let json = serde_json::to_value(&effect).unwrap();
        assert_eq!(json["effect"], "move");
        assert_eq!(json["from"], "a2");
        assert_eq!(json["to"], "a3");

        let event = Event::TurnChanged {
            active: Player::Player1,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "turn_changed");
        assert_eq!(json["active"], "Player1");
    }
}
