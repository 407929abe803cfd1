//! Board layout notation parsing and serialization.
//!
//! A layout is written like the piece-placement field of FEN: eight
//! `/`-separated row groups starting from row 8, followed by the player to
//! move. Uppercase letters belong to Player0, lowercase to Player1.

use crate::{Coord, PieceKind, Player};
use thiserror::Error;

/// Errors that can occur when parsing layout strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid layout: expected 2 fields, got {0}")]
    InvalidFieldCount(usize),

    #[error("invalid layout: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("invalid character '{ch}' in row {row}")]
    InvalidCharacter { ch: char, row: u8 },

    #[error("row {row} has {cells} cells, expected 8")]
    InvalidRowWidth { row: u8, cells: u32 },

    #[error("invalid active player: expected '0' or '1', got '{0}'")]
    InvalidActivePlayer(String),
}

/// One piece in a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub coord: Coord,
    pub owner: Player,
    pub kind: PieceKind,
}

/// A parsed board layout.
///
/// Placements are listed in cell index order (a1, b1, ..., h8).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub placements: Vec<Placement>,
    pub active: Player,
}

impl Layout {
    /// The starting position: castle, knight, bishop, queen, king, bishop,
    /// knight, castle on each back row with a full row of pawns in front.
    pub const STARTPOS: &'static str = "cnbqkbnc/pppppppp/8/8/8/8/PPPPPPPP/CNBQKBNC 0";

    /// Parses a layout string.
    pub fn parse(layout: &str) -> Result<Self, LayoutError> {
        let fields: Vec<&str> = layout.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(LayoutError::InvalidFieldCount(fields.len()));
        }

        let mut digits = fields[1].chars();
        let active = match (digits.next().and_then(|c| c.to_digit(10)), digits.next()) {
            (Some(index), None) => Player::from_index(index as usize),
            _ => None,
        }
        .ok_or_else(|| LayoutError::InvalidActivePlayer(fields[1].to_string()))?;

        let rows: Vec<&str> = fields[0].split('/').collect();
        if rows.len() != 8 {
            return Err(LayoutError::InvalidRowCount(rows.len()));
        }

        let mut placements = Vec::new();
        for (i, group) in rows.iter().enumerate() {
            let row = 7 - i as u8;
            let mut cells = 0u32;
            for ch in group.chars() {
                if let Some(run) = ch.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    cells += run;
                } else if let Some((kind, owner)) = PieceKind::from_layout_char(ch) {
                    if let Some(coord) = Coord::new(cells as u8, row) {
                        placements.push(Placement { coord, owner, kind });
                    }
                    cells += 1;
                } else {
                    return Err(LayoutError::InvalidCharacter { ch, row: row + 1 });
                }
            }
            if cells != 8 {
                return Err(LayoutError::InvalidRowWidth {
                    row: row + 1,
                    cells,
                });
            }
        }

        placements.sort_by_key(|p| p.coord);
        Ok(Layout { placements, active })
    }

    /// Returns the starting layout.
    pub fn startpos() -> Self {
        match Self::parse(Self::STARTPOS) {
            Ok(layout) => layout,
            Err(e) => unreachable!("STARTPOS is valid: {e}"),
        }
    }

    /// Serializes this layout back to notation.
    pub fn to_notation(&self) -> String {
        let mut grid = [[None; 8]; 8];
        for p in &self.placements {
            grid[p.coord.row() as usize][p.coord.col() as usize] =
                Some(p.kind.to_layout_char(p.owner));
        }

        let mut out = String::new();
        for row in (0..8).rev() {
            let mut empty = 0;
            for cell in grid[row] {
                match cell {
                    Some(ch) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(ch);
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row > 0 {
                out.push('/');
            }
        }
        out.push(' ');
        out.push_str(&self.active.index().to_string());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(s: &str) -> Coord {
        Coord::from_algebraic(s).unwrap()
    }

    #[test]
    fn parse_startpos() {
        let layout = Layout::startpos();
        assert_eq!(layout.active, Player::Player0);
        assert_eq!(layout.placements.len(), 32);

        let at = |s: &str| layout.placements.iter().find(|p| p.coord == c(s)).copied();
        assert_eq!(
            at("a1"),
            Some(Placement {
                coord: c("a1"),
                owner: Player::Player0,
                kind: PieceKind::Castle
            })
        );
        assert_eq!(at("d1").map(|p| p.kind), Some(PieceKind::Queen));
        assert_eq!(at("e1").map(|p| p.kind), Some(PieceKind::King));
        assert_eq!(at("d8").map(|p| (p.kind, p.owner)), Some((PieceKind::Queen, Player::Player1)));
        assert_eq!(at("h7").map(|p| (p.kind, p.owner)), Some((PieceKind::Pawn, Player::Player1)));
        assert_eq!(at("e4"), None);
    }

    #[test]
    fn startpos_notation_is_stable() {
        assert_eq!(Layout::startpos().to_notation(), Layout::STARTPOS);
    }

    #[test]
    fn sparse_layout_notation() {
        let layout = Layout::parse("8/8/8/4q3/3Pp3/8/8/8 1").unwrap();
        assert_eq!(layout.active, Player::Player1);
        assert_eq!(layout.placements.len(), 3);
        assert_eq!(layout.placements[0].coord, c("d4"));
        assert_eq!(layout.to_notation(), "8/8/8/4q3/3Pp3/8/8/8 1");
    }

    #[test]
    fn invalid_field_count() {
        assert_eq!(
            Layout::parse("8/8/8/8/8/8/8/8"),
            Err(LayoutError::InvalidFieldCount(1))
        );
    }

    #[test]
    fn invalid_row_count() {
        assert_eq!(
            Layout::parse("8/8/8 0"),
            Err(LayoutError::InvalidRowCount(3))
        );
    }

    #[test]
    fn invalid_character() {
        assert_eq!(
            Layout::parse("8/8/8/8/8/8/8/R7 0"),
            Err(LayoutError::InvalidCharacter { ch: 'R', row: 1 })
        );
        assert_eq!(
            Layout::parse("8/8/8/8/8/8/8/09 0"),
            Err(LayoutError::InvalidCharacter { ch: '0', row: 1 })
        );
    }

    #[test]
    fn invalid_row_width() {
        assert_eq!(
            Layout::parse("8/8/8/8/8/8/8/7 0"),
            Err(LayoutError::InvalidRowWidth { row: 1, cells: 7 })
        );
        assert_eq!(
            Layout::parse("ppppppppp/8/8/8/8/8/8/8 0"),
            Err(LayoutError::InvalidRowWidth { row: 8, cells: 9 })
        );
    }

    #[test]
    fn invalid_active_player() {
        assert_eq!(
            Layout::parse("8/8/8/8/8/8/8/8 w"),
            Err(LayoutError::InvalidActivePlayer("w".to_string()))
        );
        for field in ["2", "+1", "01"] {
            assert_eq!(
                Layout::parse(&format!("8/8/8/8/8/8/8/8 {field}")),
                Err(LayoutError::InvalidActivePlayer(field.to_string()))
            );
        }
    }
}
