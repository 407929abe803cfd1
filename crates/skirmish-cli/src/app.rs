//! Command dispatch between the input loop and a session.

use crate::command::{Command, HELP};
use crate::config::DisplayConfig;
use crate::render;
use skirmish_engine::{Event, Session};
use std::io::{self, Write};

/// Whether the input loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A session plus the output settings of the front end.
pub struct App {
    session: Session,
    display: DisplayConfig,
    json: bool,
}

impl App {
    pub fn new(session: Session, display: DisplayConfig, json: bool) -> Self {
        App {
            session,
            display,
            json,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run one command, writing any output to `out`.
    pub fn handle(&mut self, command: Command, out: &mut impl Write) -> io::Result<Flow> {
        let events = match command {
            Command::Hover(coord) => self.session.on_hover(coord),
            Command::Leave => self.session.on_leave(),
            Command::Select(coord) => {
                let events = self.session.on_select(coord);
                if events.is_empty() {
                    writeln!(out, "cannot select {coord}")?;
                }
                events
            }
            Command::Choose(index) => match self.session.candidates().get(index).cloned() {
                Some(action) => self.session.on_choose(&action),
                None => {
                    writeln!(out, "no candidate {index}")?;
                    Vec::new()
                }
            },
            Command::Cancel => self.session.on_cancel(),
            Command::Board => {
                write!(out, "{}", render::board(self.session.board(), &self.display))?;
                Vec::new()
            }
            Command::Moves => {
                write!(out, "{}", render::candidates(self.session.candidates()))?;
                Vec::new()
            }
            Command::Layout => {
                writeln!(out, "{}", self.session.to_layout().to_notation())?;
                Vec::new()
            }
            Command::Help => {
                writeln!(out, "{HELP}")?;
                Vec::new()
            }
            Command::Quit => return Ok(Flow::Quit),
            Command::Empty => Vec::new(),
        };
        self.emit(&events, out)?;
        Ok(Flow::Continue)
    }

    fn emit(&self, events: &[Event], out: &mut impl Write) -> io::Result<()> {
        for event in events {
            if self.json {
                serde_json::to_writer(&mut *out, event)?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", render::event(event))?;
                if let Event::CandidatesChanged { candidates, .. } = event {
                    write!(out, "{}", render::candidates(candidates))?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_core::{Coord, Player};

    fn run(app: &mut App, line: &str) -> String {
        let mut out = Vec::new();
        let command = Command::parse(line).unwrap();
        app.handle(command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn select_and_choose_play_a_turn() {
        let mut app = App::new(Session::new(), DisplayConfig::default(), false);
        let text = run(&mut app, "select e2");
        assert!(text.contains("Selected"));
        assert!(text.contains("advance e2-e3"));

        let text = run(&mut app, "choose 0");
        assert!(text.contains("Player1 to move"));
        assert_eq!(app.session().active_player(), Player::Player1);
        assert!(app
            .session()
            .board()
            .piece_at(Coord::from_algebraic("e3").unwrap())
            .is_some());
    }

    #[test]
    fn rejected_requests_are_reported() {
        let mut app = App::new(Session::new(), DisplayConfig::default(), false);
        assert_eq!(run(&mut app, "select e7"), "cannot select e7\n");
        assert_eq!(run(&mut app, "choose 0"), "no candidate 0\n");
        assert_eq!(app.session().active_player(), Player::Player0);
    }

    #[test]
    fn json_mode_prints_one_event_per_line() {
        let mut app = App::new(Session::new(), DisplayConfig::default(), true);
        run(&mut app, "select e2");
        let text = run(&mut app, "choose 0");
        let events: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert!(events.iter().any(|e| e["event"] == "board_mutated"));
        assert_eq!(events.last().unwrap()["event"], "turn_changed");
        assert_eq!(events.last().unwrap()["active"], "Player1");
    }

    #[test]
    fn layout_and_quit() {
        let mut app = App::new(Session::new(), DisplayConfig::default(), false);
        assert_eq!(
            run(&mut app, "layout"),
            "cnbqkbnc/pppppppp/8/8/8/8/PPPPPPPP/CNBQKBNC 0\n"
        );
        let mut out = Vec::new();
        assert_eq!(app.handle(Command::Quit, &mut out).unwrap(), Flow::Quit);
    }
}
