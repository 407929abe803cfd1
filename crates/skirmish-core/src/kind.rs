//! Piece kinds.

use crate::Player;
use serde::{Deserialize, Serialize};

/// The six kinds of piece on a skirmish board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Bishop = 1,
    Knight = 2,
    Castle = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Castle,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns the layout character for this kind, uppercase for Player0.
    pub const fn to_layout_char(self, owner: Player) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Castle => 'c',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match owner {
            Player::Player0 => c.to_ascii_uppercase(),
            Player::Player1 => c,
        }
    }

    /// Parses a layout character into a kind and its owner.
    pub const fn from_layout_char(c: char) -> Option<(PieceKind, Player)> {
        let owner = if c.is_ascii_uppercase() {
            Player::Player0
        } else {
            Player::Player1
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight,
            'c' => PieceKind::Castle,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((kind, owner))
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Bishop => "Bishop",
            PieceKind::Knight => "Knight",
            PieceKind::Castle => "Castle",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}
