//! Turn and selection management.
//!
//! A [`Session`] owns the board and drives one selection episode at a time:
//! - a piece of the active player is selected and its candidates offered
//! - chosen candidates accumulate into the turn's chain
//! - a terminal choice commits the chain and passes the turn
//!
//! Inbound requests that are not legal in the current state are ignored and
//! produce no events.

use crate::rules::{RuleSet, SkirmishRules};
use crate::{Action, Board, Effect, Event, PieceId, PieceState};
use serde::Serialize;
use skirmish_core::{Coord, Layout, Player};
use tracing::{debug, trace};

/// Whether the session accepts new selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Phase {
    #[default]
    Selecting,
    Committing,
}

/// The in-progress turn of the selected piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    piece: PieceId,
    chain: Vec<Action>,
    offered: Vec<Action>,
}

impl Selection {
    /// The selected piece.
    pub fn piece(&self) -> PieceId {
        self.piece
    }

    /// Actions chosen so far this turn.
    pub fn chain(&self) -> &[Action] {
        &self.chain
    }

    /// Actions currently on offer.
    pub fn offered(&self) -> &[Action] {
        &self.offered
    }
}

/// A committed turn in session history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnRecord {
    /// The player who moved.
    pub player: Player,
    /// The chain as chosen.
    pub chain: Vec<Action>,
    /// Board changes in apply order.
    pub effects: Vec<Effect>,
}

/// A game in progress.
#[derive(Debug, Clone)]
pub struct Session<R: RuleSet = SkirmishRules> {
    rules: R,
    board: Board,
    active: Player,
    phase: Phase,
    selection: Option<Selection>,
    /// Piece currently highlighted under the pointer.
    hovered: Option<PieceId>,
    /// Last cell the pointer was over.
    pointer: Option<Coord>,
    history: Vec<TurnRecord>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session on the starting board with Player0 to move.
    pub fn new() -> Self {
        Self::with_rules(SkirmishRules)
    }

    /// Creates a session from a layout.
    pub fn from_layout(layout: &Layout) -> Self {
        Self::with_board(SkirmishRules, Board::from_layout(layout), layout.active)
    }
}

impl<R: RuleSet> Session<R> {
    /// Creates a session on the rule set's initial board with Player0 to move.
    pub fn with_rules(rules: R) -> Self {
        let board = rules.initial_board();
        Self::with_board(rules, board, Player::Player0)
    }

    /// Creates a session on an arbitrary board.
    pub fn with_board(rules: R, board: Board, active: Player) -> Self {
        board.check_invariants();
        Session {
            rules,
            board,
            active,
            phase: Phase::Selecting,
            selection: None,
            hovered: None,
            pointer: None,
            history: Vec::new(),
        }
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player allowed to select next.
    pub fn active_player(&self) -> Player {
        self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Actions currently on offer; empty when nothing is selected.
    pub fn candidates(&self) -> &[Action] {
        self.selection
            .as_ref()
            .map(Selection::offered)
            .unwrap_or_default()
    }

    pub fn hovered(&self) -> Option<PieceId> {
        self.hovered
    }

    /// Committed turns, oldest first.
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Returns the board as a layout with the active player to move.
    pub fn to_layout(&self) -> Layout {
        self.board.to_layout(self.active)
    }

    /// The pointer moved over `coord`.
    pub fn on_hover(&mut self, coord: Coord) -> Vec<Event> {
        self.pointer = Some(coord);
        let mut events = Vec::new();
        self.refresh_hover(&mut events);
        events
    }

    /// The pointer left the board.
    pub fn on_leave(&mut self) -> Vec<Event> {
        self.pointer = None;
        let mut events = Vec::new();
        self.refresh_hover(&mut events);
        events
    }

    /// Selects the piece on `coord` and offers its first candidates.
    pub fn on_select(&mut self, coord: Coord) -> Vec<Event> {
        let mut events = Vec::new();
        let Some(piece) = self.board.piece_at(coord).filter(|&id| self.can_engage(id)) else {
            trace!(%coord, "select ignored");
            return events;
        };

        if let Some(other) = self.hovered.take().filter(|&h| h != piece) {
            self.set_state(other, PieceState::Idle, &mut events);
        }
        self.set_state(piece, PieceState::Selected, &mut events);

        let offered = self.rules.candidates(&self.board, piece, &[]);
        debug!(%piece, %coord, candidates = offered.len(), "piece selected");
        events.push(Event::CandidatesChanged {
            piece,
            candidates: offered.clone(),
        });
        self.selection = Some(Selection {
            piece,
            chain: Vec::new(),
            offered,
        });
        events
    }

    /// Chooses one of the offered candidates.
    ///
    /// A terminal choice commits the whole chain and passes the turn; any
    /// other choice extends the chain and offers a fresh set of candidates.
    pub fn on_choose(&mut self, action: &Action) -> Vec<Event> {
        let Some(selection) = self.selection.as_mut() else {
            trace!(%action, "choose ignored: nothing selected");
            return Vec::new();
        };
        if self.phase != Phase::Selecting || !selection.offered.contains(action) {
            trace!(%action, "choose ignored: not on offer");
            return Vec::new();
        }

        selection.chain.push(action.clone());
        if action.is_terminal() {
            return self.commit();
        }

        selection.offered = self
            .rules
            .candidates(&self.board, selection.piece, &selection.chain);
        debug!(
            piece = %selection.piece,
            chain = selection.chain.len(),
            candidates = selection.offered.len(),
            "chain extended"
        );
        vec![Event::CandidatesChanged {
            piece: selection.piece,
            candidates: selection.offered.clone(),
        }]
    }

    /// Drops the current selection without touching the board.
    pub fn on_cancel(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        let Some(selection) = self.selection.take() else {
            trace!("cancel ignored: nothing selected");
            return events;
        };
        debug!(piece = %selection.piece, chain = selection.chain.len(), "selection cancelled");
        self.release(selection.piece, &mut events);
        self.refresh_hover(&mut events);
        events
    }

    fn commit(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        let Some(selection) = self.selection.take() else {
            return events;
        };

        self.phase = Phase::Committing;
        self.release(selection.piece, &mut events);
        let effects = self.rules.apply(&mut self.board, &selection.chain);
        debug!(
            player = %self.active,
            piece = %selection.piece,
            actions = selection.chain.len(),
            effects = effects.len(),
            "chain committed"
        );
        events.push(Event::BoardMutated {
            effects: effects.clone(),
        });
        self.history.push(TurnRecord {
            player: self.active,
            chain: selection.chain,
            effects,
        });

        self.active = self.active.opponent();
        self.phase = Phase::Selecting;
        debug!(active = %self.active, "turn passed");
        events.push(Event::TurnChanged {
            active: self.active,
        });

        self.refresh_hover(&mut events);
        events
    }

    /// Returns the selected piece to idle and withdraws its candidates.
    fn release(&mut self, piece: PieceId, events: &mut Vec<Event>) {
        self.set_state(piece, PieceState::Idle, events);
        events.push(Event::CandidatesChanged {
            piece,
            candidates: Vec::new(),
        });
    }

    /// Returns true if `piece` may be hovered or selected right now.
    fn can_engage(&self, piece: PieceId) -> bool {
        self.selection.is_none()
            && self.phase == Phase::Selecting
            && self
                .board
                .piece(piece)
                .is_some_and(|p| p.owner == self.active && p.state != PieceState::Selected)
    }

    /// Highlights the engageable piece under the pointer, if any, and clears
    /// the previous highlight.
    fn refresh_hover(&mut self, events: &mut Vec<Event>) {
        let target = self
            .pointer
            .and_then(|coord| self.board.piece_at(coord))
            .filter(|&id| self.can_engage(id));
        if target == self.hovered {
            return;
        }
        if let Some(old) = self.hovered.take() {
            if self.board.piece(old).is_some_and(|p| p.state == PieceState::Hovered) {
                self.set_state(old, PieceState::Idle, events);
            }
        }
        if let Some(new) = target {
            self.set_state(new, PieceState::Hovered, events);
            self.hovered = Some(new);
        }
    }

    fn set_state(&mut self, piece: PieceId, state: PieceState, events: &mut Vec<Event>) {
        if self.board.piece(piece).is_some_and(|p| p.state != state) {
            self.board.set_state(piece, state);
            events.push(Event::PieceStateChanged { piece, state });
        }
    }
}
