//! Line command parsing for the text front end.

use skirmish_core::{Coord, CoordError};
use thiserror::Error;

/// Errors from parsing a command line.
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("missing argument for '{0}'")]
    MissingArgument(&'static str),
    #[error(transparent)]
    Coord(#[from] CoordError),
    #[error("not a candidate number: {0}")]
    InvalidIndex(String),
    #[error("unknown command: {0} (try 'help')")]
    Unknown(String),
}

/// Commands read from the player, one per line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Point at a cell.
    Hover(Coord),
    /// Move the pointer off the board.
    Leave,
    /// Select the piece on a cell.
    Select(Coord),
    /// Choose the numbered candidate from the last listing.
    Choose(usize),
    /// Drop the current selection.
    Cancel,
    /// Print the board.
    Board,
    /// List the offered candidates.
    Moves,
    /// Print the current layout notation.
    Layout,
    Help,
    Quit,
    /// Blank line.
    Empty,
}

impl Command {
    /// Parse one input line.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();
        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "hover" => Ok(Command::Hover(Self::coord("hover", parts.next())?)),
            "leave" => Ok(Command::Leave),
            "select" => Ok(Command::Select(Self::coord("select", parts.next())?)),
            "choose" => {
                let arg = parts.next().ok_or(CommandError::MissingArgument("choose"))?;
                arg.parse()
                    .map(Command::Choose)
                    .map_err(|_| CommandError::InvalidIndex(arg.to_string()))
            }
            "cancel" => Ok(Command::Cancel),
            "board" => Ok(Command::Board),
            "moves" => Ok(Command::Moves),
            "layout" => Ok(Command::Layout),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "" => Ok(Command::Empty),
            _ => Err(CommandError::Unknown(cmd.to_string())),
        }
    }

    fn coord(name: &'static str, arg: Option<&str>) -> Result<Coord, CommandError> {
        let arg = arg.ok_or(CommandError::MissingArgument(name))?;
        Ok(arg.parse()?)
    }
}

pub const HELP: &str = "\
commands:
  hover <cell>   point at a cell (e.g. hover e2)
  leave          move the pointer off the board
  select <cell>  select your piece on a cell
  choose <n>     choose candidate n from 'moves'
  cancel         drop the current selection
  board          print the board
  moves          list candidates for the selected piece
  layout         print the layout notation
  help           show this text
  quit           leave";

#[cfg(test)]
mod tests {
    use super::*;

    fn c(s: &str) -> Coord {
        Coord::from_algebraic(s).unwrap()
    }

    #[test]
    fn parse_simple_commands() {
        assert_eq!(Command::parse("leave").unwrap(), Command::Leave);
        assert_eq!(Command::parse("  cancel ").unwrap(), Command::Cancel);
        assert_eq!(Command::parse("board").unwrap(), Command::Board);
        assert_eq!(Command::parse("moves").unwrap(), Command::Moves);
        assert_eq!(Command::parse("layout").unwrap(), Command::Layout);
        assert_eq!(Command::parse("?").unwrap(), Command::Help);
        assert_eq!(Command::parse("exit").unwrap(), Command::Quit);
        assert_eq!(Command::parse("").unwrap(), Command::Empty);
    }

    #[test]
    fn parse_cell_arguments() {
        assert_eq!(Command::parse("hover e2").unwrap(), Command::Hover(c("e2")));
        assert_eq!(Command::parse("select h8").unwrap(), Command::Select(c("h8")));
        assert_eq!(
            Command::parse("select").unwrap_err(),
            CommandError::MissingArgument("select")
        );
        assert!(matches!(
            Command::parse("hover z9"),
            Err(CommandError::Coord(_))
        ));
    }

    #[test]
    fn parse_choose() {
        assert_eq!(Command::parse("choose 3").unwrap(), Command::Choose(3));
        assert_eq!(
            Command::parse("choose x").unwrap_err(),
            CommandError::InvalidIndex("x".to_string())
        );
        assert_eq!(
            Command::parse("choose").unwrap_err(),
            CommandError::MissingArgument("choose")
        );
    }

    #[test]
    fn unknown_command() {
        assert_eq!(
            Command::parse("castle e1").unwrap_err(),
            CommandError::Unknown("castle".to_string())
        );
    }
}
