//! Action representation.
//!
//! An [`Action`] is one step of a turn. Every coordinate it carries is a
//! snapshot taken when the candidate was generated; the apply engine trusts
//! these snapshots instead of looking pieces up again.

use crate::PieceId;
use serde::{Deserialize, Serialize};
use skirmish_core::Coord;
use std::fmt;

/// A piece captured by an action, with the cell it stood on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Victim {
    pub piece: PieceId,
    pub at: Coord,
}

/// A piece a smash shoves one cell further from the landing square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Push {
    pub piece: PieceId,
    pub from: Coord,
    pub to: Coord,
}

/// Variant-specific part of an action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionKind {
    /// Pawn step straight ahead.
    Advance,
    /// Pawn jump over an adjacent diagonal piece.
    Vault,
    /// Ends a vault chain in place.
    Confirm,
    /// Slide to a cell, capturing whatever stood there.
    Goto,
    /// Bishop trades cells with a friendly blocker.
    Swap { partner: PieceId },
    /// Knight landing that shoves neighbours outward.
    Smash { pushes: Vec<Push> },
    /// Queen captures every adjacent piece without moving.
    SpinAttack,
}

impl ActionKind {
    /// Short lowercase name.
    pub const fn name(&self) -> &'static str {
        match self {
            ActionKind::Advance => "advance",
            ActionKind::Vault => "vault",
            ActionKind::Confirm => "confirm",
            ActionKind::Goto => "goto",
            ActionKind::Swap { .. } => "swap",
            ActionKind::Smash { .. } => "smash",
            ActionKind::SpinAttack => "spin",
        }
    }
}

/// One candidate or committed step of a turn.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    piece: PieceId,
    from: Coord,
    to: Coord,
    victims: Vec<Victim>,
    terminal: bool,
    kind: ActionKind,
}

impl Action {
    fn new(piece: PieceId, from: Coord, to: Coord, victims: Vec<Victim>, kind: ActionKind) -> Self {
        let terminal = match kind {
            ActionKind::Vault => !victims.is_empty(),
            _ => true,
        };
        Action {
            piece,
            from,
            to,
            victims,
            terminal,
            kind,
        }
    }

    pub(crate) fn advance(piece: PieceId, from: Coord, to: Coord, victim: Option<Victim>) -> Self {
        Self::new(piece, from, to, victim.into_iter().collect(), ActionKind::Advance)
    }

    pub(crate) fn vault(piece: PieceId, from: Coord, to: Coord, victim: Option<Victim>) -> Self {
        Self::new(piece, from, to, victim.into_iter().collect(), ActionKind::Vault)
    }

    pub(crate) fn confirm(piece: PieceId, at: Coord) -> Self {
        Self::new(piece, at, at, Vec::new(), ActionKind::Confirm)
    }

    pub(crate) fn goto(piece: PieceId, from: Coord, to: Coord, victim: Option<Victim>) -> Self {
        Self::new(piece, from, to, victim.into_iter().collect(), ActionKind::Goto)
    }

    pub(crate) fn swap(piece: PieceId, from: Coord, partner: PieceId, partner_at: Coord) -> Self {
        Self::new(piece, from, partner_at, Vec::new(), ActionKind::Swap { partner })
    }

    pub(crate) fn smash(
        piece: PieceId,
        from: Coord,
        to: Coord,
        victim: Option<Victim>,
        pushes: Vec<Push>,
    ) -> Self {
        Self::new(
            piece,
            from,
            to,
            victim.into_iter().collect(),
            ActionKind::Smash { pushes },
        )
    }

    pub(crate) fn spin_attack(piece: PieceId, at: Coord, victims: Vec<Victim>) -> Self {
        Self::new(piece, at, at, victims, ActionKind::SpinAttack)
    }

    /// The acting piece.
    #[inline]
    pub fn piece(&self) -> PieceId {
        self.piece
    }

    /// Where the acting piece stood when this action was generated.
    #[inline]
    pub fn from(&self) -> Coord {
        self.from
    }

    /// Where the acting piece ends up.
    #[inline]
    pub fn to(&self) -> Coord {
        self.to
    }

    /// Pieces this action captures, in generation order.
    #[inline]
    pub fn victims(&self) -> &[Victim] {
        &self.victims
    }

    /// Returns true if choosing this action ends the turn.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Returns true if this action captures anything.
    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.victims.is_empty()
    }

    #[inline]
    pub fn kind(&self) -> &ActionKind {
        &self.kind
    }

    /// Scheduled pushes; empty unless this is a smash.
    pub fn pushes(&self) -> &[Push] {
        match &self.kind {
            ActionKind::Smash { pushes } => pushes,
            _ => &[],
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.name(), self.from)?;
        if self.to != self.from {
            write!(f, "-{}", self.to)?;
        }
        if !self.victims.is_empty() {
            let cells: Vec<String> = self.victims.iter().map(|v| v.at.to_string()).collect();
            write!(f, " x{}", cells.join(","))?;
        }
        if !self.terminal {
            write!(f, " ...")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;
    use skirmish_core::{PieceKind, Player};

    fn c(s: &str) -> Coord {
        Coord::from_algebraic(s).unwrap()
    }

    fn two_pieces() -> (PieceId, PieceId) {
        let mut board = Board::empty();
        let a = board.place(Player::Player0, PieceKind::Pawn, c("a2"));
        let b = board.place(Player::Player1, PieceKind::Pawn, c("c4"));
        (a, b)
    }

    #[test]
    fn vault_is_terminal_only_when_capturing() {
        let (pawn, enemy) = two_pieces();
        let quiet = Action::vault(pawn, c("a2"), c("c4"), None);
        assert!(!quiet.is_terminal());

        let victim = Victim {
            piece: enemy,
            at: c("c4"),
        };
        let capture = Action::vault(pawn, c("a2"), c("c4"), Some(victim));
        assert!(capture.is_terminal());
        assert!(capture.is_capture());
    }

    #[test]
    fn other_kinds_are_terminal() {
        let (pawn, other) = two_pieces();
        assert!(Action::advance(pawn, c("a2"), c("a3"), None).is_terminal());
        assert!(Action::confirm(pawn, c("c4")).is_terminal());
        assert!(Action::goto(pawn, c("a2"), c("a3"), None).is_terminal());
        assert!(Action::swap(pawn, c("a2"), other, c("c4")).is_terminal());
        assert!(Action::smash(pawn, c("a2"), c("b4"), None, Vec::new()).is_terminal());
        assert!(Action::spin_attack(pawn, c("a2"), Vec::new()).is_terminal());
    }

    #[test]
    fn swap_targets_partner_cell() {
        let (pawn, other) = two_pieces();
        let swap = Action::swap(pawn, c("a2"), other, c("c4"));
        assert_eq!(swap.to(), c("c4"));
        assert_eq!(swap.kind(), &ActionKind::Swap { partner: other });
        assert!(!swap.is_capture());
    }

    #[test]
    fn display() {
        let (pawn, enemy) = two_pieces();
        let quiet = Action::vault(pawn, c("a2"), c("c4"), None);
        assert_eq!(quiet.to_string(), "vault a2-c4 ...");

        let victim = Victim {
            piece: enemy,
            at: c("c4"),
        };
        let capture = Action::goto(pawn, c("a2"), c("c4"), Some(victim));
        assert_eq!(capture.to_string(), "goto a2-c4 xc4");
        assert_eq!(Action::confirm(pawn, c("c4")).to_string(), "confirm c4");
    }

    #[test]
    fn pushes_only_on_smash() {
        let (knight, other) = two_pieces();
        let push = Push {
            piece: other,
            from: c("c4"),
            to: c("c5"),
        };
        let smash = Action::smash(knight, c("a2"), c("c3"), None, vec![push]);
        assert_eq!(smash.pushes(), &[push]);
        assert!(Action::goto(knight, c("a2"), c("a3"), None).pushes().is_empty());
    }
}
