//! Text rendering of the board, candidates and outbound events.

use crate::config::{DisplayConfig, Glyphs};
use skirmish_core::{Coord, PieceKind, Player, BOARD_SIZE};
use skirmish_engine::{Action, Board, Effect, Event, PieceState};
use std::fmt::Write;

/// Render the board with the last row at the top.
///
/// Selected pieces are wrapped in brackets and hovered pieces in parentheses.
pub fn board(board: &Board, display: &DisplayConfig) -> String {
    let mut out = String::new();
    for row in (0..BOARD_SIZE).rev() {
        if display.coordinates {
            let _ = write!(out, "{} ", row + 1);
        }
        for col in 0..BOARD_SIZE {
            let Some(coord) = Coord::new(col, row) else {
                continue;
            };
            let cell = match board.occupant(coord) {
                Some(piece) => {
                    let glyph = glyph(piece.kind, piece.owner, display.glyphs);
                    match piece.state {
                        PieceState::Idle => format!(" {glyph} "),
                        PieceState::Hovered => format!("({glyph})"),
                        PieceState::Selected => format!("[{glyph}]"),
                    }
                }
                None => " . ".to_string(),
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    if display.coordinates {
        out.push_str("  ");
        for col in 0..BOARD_SIZE {
            let _ = write!(out, " {} ", (b'a' + col) as char);
        }
        out.push('\n');
    }
    out
}

/// Glyph for a piece in the configured style.
pub fn glyph(kind: PieceKind, owner: Player, glyphs: Glyphs) -> char {
    match glyphs {
        Glyphs::Letters => kind.to_layout_char(owner),
        Glyphs::Unicode => match (owner, kind) {
            (Player::Player0, PieceKind::King) => '♔',
            (Player::Player0, PieceKind::Queen) => '♕',
            (Player::Player0, PieceKind::Castle) => '♖',
            (Player::Player0, PieceKind::Bishop) => '♗',
            (Player::Player0, PieceKind::Knight) => '♘',
            (Player::Player0, PieceKind::Pawn) => '♙',
            (Player::Player1, PieceKind::King) => '♚',
            (Player::Player1, PieceKind::Queen) => '♛',
            (Player::Player1, PieceKind::Castle) => '♜',
            (Player::Player1, PieceKind::Bishop) => '♝',
            (Player::Player1, PieceKind::Knight) => '♞',
            (Player::Player1, PieceKind::Pawn) => '♟',
        },
    }
}

/// Numbered candidate listing, as accepted by `choose <n>`.
pub fn candidates(actions: &[Action]) -> String {
    if actions.is_empty() {
        return "no candidates\n".to_string();
    }
    let mut out = String::new();
    for (i, action) in actions.iter().enumerate() {
        let _ = writeln!(out, "{i:>3}  {action}");
    }
    out
}

/// One-line description of an outbound event.
pub fn event(event: &Event) -> String {
    match event {
        Event::PieceStateChanged { piece, state } => format!("piece {piece} is now {state:?}"),
        Event::CandidatesChanged { piece, candidates } => {
            format!("{} candidates for {piece}", candidates.len())
        }
        Event::BoardMutated { effects } => {
            let parts: Vec<String> = effects.iter().map(effect).collect();
            format!("board: {}", parts.join("; "))
        }
        Event::TurnChanged { active } => format!("{active} to move"),
    }
}

fn effect(effect: &Effect) -> String {
    match effect {
        Effect::Move { piece, from, to } => format!("{piece} {from}-{to}"),
        Effect::Capture {
            piece,
            owner,
            kind,
            at,
        } => format!("{piece} ({owner} {kind}) captured on {at}"),
        Effect::Swap {
            piece,
            partner,
            from,
            to,
        } => format!("{piece} {from}<->{to} with {partner}"),
        Effect::Push { piece, from, to } => format!("{piece} pushed {from}-{to}"),
    }
}
