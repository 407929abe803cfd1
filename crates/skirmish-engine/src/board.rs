//! Board state: cell occupancy plus the registry of live pieces.

use serde::{Deserialize, Serialize};
use skirmish_core::{Coord, Layout, PieceKind, Placement, Player};
use std::collections::BTreeMap;
use std::fmt;

/// Stable identity of a piece. Ids are never reused within one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(u32);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Highlight state of a piece, driven by the selection session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PieceState {
    #[default]
    Idle,
    Hovered,
    Selected,
}

/// A live piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub owner: Player,
    pub kind: PieceKind,
    pub state: PieceState,
}

/// The 8x8 board.
///
/// Each cell holds at most one piece and every registered piece sits on
/// exactly one cell. Looking a piece's cell up scans all 64 cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<PieceId>; 64],
    registry: BTreeMap<PieceId, Piece>,
    next_id: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Board {
            cells: [None; 64],
            registry: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Creates the starting board.
    pub fn startpos() -> Self {
        Self::from_layout(&Layout::startpos())
    }

    /// Creates a board holding every piece of a layout.
    pub fn from_layout(layout: &Layout) -> Self {
        let mut board = Board::empty();
        for p in &layout.placements {
            board.place(p.owner, p.kind, p.coord);
        }
        board
    }

    /// Captures this board as a layout with the given player to move.
    pub fn to_layout(&self, active: Player) -> Layout {
        let placements = Coord::all()
            .filter_map(|coord| {
                self.occupant(coord).map(|piece| Placement {
                    coord,
                    owner: piece.owner,
                    kind: piece.kind,
                })
            })
            .collect();
        Layout { placements, active }
    }

    /// Puts a new piece on `coord`, evicting whatever stood there.
    pub fn place(&mut self, owner: Player, kind: PieceKind, coord: Coord) -> PieceId {
        if let Some(existing) = self.piece_at(coord) {
            self.evict(existing, coord);
        }
        let id = PieceId(self.next_id);
        self.next_id += 1;
        self.registry.insert(
            id,
            Piece {
                id,
                owner,
                kind,
                state: PieceState::Idle,
            },
        );
        self.cells[coord.index() as usize] = Some(id);
        id
    }

    /// Returns the piece with the given id, if it is still on the board.
    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.registry.get(&id)
    }

    /// Returns the id of the piece on `coord`.
    #[inline]
    pub fn piece_at(&self, coord: Coord) -> Option<PieceId> {
        self.cells[coord.index() as usize]
    }

    /// Returns the piece on `coord`.
    #[inline]
    pub fn occupant(&self, coord: Coord) -> Option<&Piece> {
        self.piece_at(coord).and_then(|id| self.piece(id))
    }

    /// Returns true if no piece stands on `coord`.
    #[inline]
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.piece_at(coord).is_none()
    }

    /// Finds the cell holding `id` by scanning the board.
    pub fn coord_of(&self, id: PieceId) -> Option<Coord> {
        Coord::all().find(|&coord| self.piece_at(coord) == Some(id))
    }

    /// Iterates over live pieces in id order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.registry.values()
    }

    /// Returns the number of live pieces.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Returns true if the board holds no pieces.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Panics unless every registered piece occupies exactly one cell and
    /// every occupied cell names a registered piece.
    pub fn check_invariants(&self) {
        let mut seen = BTreeMap::new();
        for coord in Coord::all() {
            if let Some(id) = self.piece_at(coord) {
                assert!(
                    self.registry.contains_key(&id),
                    "cell {coord} holds unregistered piece {id}"
                );
                if let Some(other) = seen.insert(id, coord) {
                    panic!("piece {id} occupies both {other} and {coord}");
                }
            }
        }
        for id in self.registry.keys() {
            assert!(seen.contains_key(id), "piece {id} is not on the board");
        }
    }

    pub(crate) fn set_state(&mut self, id: PieceId, state: PieceState) {
        if let Some(piece) = self.registry.get_mut(&id) {
            piece.state = state;
        }
    }

    /// Moves the piece on `from` to `to`. The caller guarantees `to` is empty.
    pub(crate) fn relocate(&mut self, id: PieceId, from: Coord, to: Coord) {
        assert_eq!(
            self.piece_at(from),
            Some(id),
            "piece {id} is not on its recorded origin {from}"
        );
        self.cells[from.index() as usize] = None;
        assert!(
            self.is_empty_at(to),
            "cannot move {id} onto occupied cell {to}"
        );
        self.cells[to.index() as usize] = Some(id);
    }

    /// Exchanges the contents of two cells holding `a` and `b`.
    pub(crate) fn swap(&mut self, a: PieceId, a_at: Coord, b: PieceId, b_at: Coord) {
        assert_eq!(self.piece_at(a_at), Some(a), "piece {a} is not on {a_at}");
        assert_eq!(self.piece_at(b_at), Some(b), "piece {b} is not on {b_at}");
        self.cells.swap(a_at.index() as usize, b_at.index() as usize);
    }

    /// Removes `id` from `at` and from the registry. Removed pieces never
    /// come back.
    pub(crate) fn evict(&mut self, id: PieceId, at: Coord) -> Piece {
        assert_eq!(self.piece_at(at), Some(id), "victim {id} is not on {at}");
        self.cells[at.index() as usize] = None;
        match self.registry.remove(&id) {
            Some(piece) => piece,
            None => panic!("piece {id} is on the board but not registered"),
        }
    }
}
