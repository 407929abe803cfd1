//! Rule engine for skirmish, a chess variant with multi-step turns.
//!
//! This crate provides:
//! - [`Board`] - cell occupancy plus the registry of live pieces
//! - [`Action`] - one step of a turn, with every coordinate snapshotted
//! - [`movegen`] - per-kind candidate generation
//! - [`apply`] - ordered application of a committed chain
//! - [`Session`] - selection and turn management driven by inbound events
//! - [`RuleSet`] - trait tying candidate generation and application together
//!
//! # Architecture
//!
//! A turn is a chain of actions. Selecting a piece offers candidates; each
//! non-terminal choice extends the chain and offers new candidates computed
//! from the end of the chain. The board is not touched until a terminal
//! action is chosen, at which point the whole chain is applied in order and
//! the other player takes over.
//!
//! # Example
//!
//! ```
//! use skirmish_core::{Coord, Player};
//! use skirmish_engine::Session;
//!
//! let mut session = Session::new();
//! let e2 = Coord::from_algebraic("e2").unwrap();
//! session.on_select(e2);
//! let advance = session.candidates()[0].clone();
//! session.on_choose(&advance);
//! assert_eq!(session.active_player(), Player::Player1);
//! ```

mod action;
pub mod apply;
mod board;
mod event;
pub mod movegen;
pub mod rules;
mod session;

pub use action::{Action, ActionKind, Push, Victim};
pub use apply::apply_chain;
pub use board::{Board, Piece, PieceId, PieceState};
pub use event::{Effect, Event};
pub use movegen::candidates;
pub use rules::{RuleSet, SkirmishRules};
pub use session::{Phase, Selection, Session, TurnRecord};
