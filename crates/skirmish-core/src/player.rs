//! Player representation.

use serde::{Deserialize, Serialize};

/// The two sides of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Player {
    Player0 = 0,
    Player1 = 1,
}

impl Player {
    /// Both players in index order.
    pub const ALL: [Player; 2] = [Player::Player0, Player::Player1];

    /// Returns the other player.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Player0 => Player::Player1,
            Player::Player1 => Player::Player0,
        }
    }

    /// Returns the index (0 for Player0, 1 for Player1).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Creates a player from its index.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Player::Player0),
            1 => Some(Player::Player1),
            _ => None,
        }
    }

    /// Returns the row step a pawn of this player takes when moving
    /// forward (+1 for Player0, -1 for Player1).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Player::Player0 => 1,
            Player::Player1 => -1,
        }
    }

    /// Returns the row holding this player's back line (0 or 7).
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Player::Player0 => 0,
            Player::Player1 => 7,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Player0 => write!(f, "Player0"),
            Player::Player1 => write!(f, "Player1"),
        }
    }
}
