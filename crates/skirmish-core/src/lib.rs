//! Core types for skirmish.
//!
//! This crate provides the value types shared by the rule engine and its
//! front ends:
//! - [`Coord`] for board addressing and bounds-checked offsets
//! - [`Player`] and [`PieceKind`] for piece identity
//! - [`Layout`] for reading and writing board positions as text

mod coord;
mod kind;
mod layout;
mod player;

pub use coord::{Coord, CoordError, BOARD_SIZE};
pub use kind::PieceKind;
pub use layout::{Layout, LayoutError, Placement};
pub use player::Player;
