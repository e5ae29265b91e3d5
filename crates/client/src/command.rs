//! Line-oriented command parsing for the terminal client.

use std::path::PathBuf;
use std::str::FromStr;

use game_core::{Action, Position};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Play(Action),
    /// List the legal moves, wall placements and hit targets.
    Moves,
    Board,
    Stats,
    Save(Option<PathBuf>),
    Load(Option<PathBuf>),
    /// Write the action log as JSON lines.
    Export(PathBuf),
    New,
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("`{command}` expects {expected}")]
    Arguments {
        command: &'static str,
        expected: &'static str,
    },

    #[error("`{0}` is not a row or column number")]
    Coordinate(String),
}

pub const HELP: &str = "\
commands:
  move R C     step to (R, C) or jump along your jump cells
  hit          damage surrounding walls and push an adjacent opponent
  wall R C     place a wall at (R, C); ends your actions this turn
  end          end the turn
  moves        list legal actions
  board        redraw the board
  stats        show match statistics
  save [PATH]  save a snapshot
  load [PATH]  load a snapshot
  export PATH  write the action log as JSON lines
  new          start a new game
  quit         leave";

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let head = words.next().ok_or(ParseCommandError::Empty)?;
        let args: Vec<&str> = words.collect();

        let command = match head.to_ascii_lowercase().as_str() {
            "move" | "m" => Command::Play(Action::move_to(position("move", &args)?)),
            "wall" | "w" => Command::Play(Action::place_wall(position("wall", &args)?)),
            "hit" | "h" => {
                no_args("hit", &args)?;
                Command::Play(Action::hit())
            }
            "end" | "e" => {
                no_args("end", &args)?;
                Command::Play(Action::end_turn())
            }
            "moves" => Command::Moves,
            "board" | "b" => Command::Board,
            "stats" => Command::Stats,
            "save" => Command::Save(optional_path("save", &args)?),
            "load" => Command::Load(optional_path("load", &args)?),
            "export" => match args.as_slice() {
                [path] => Command::Export(PathBuf::from(path)),
                _ => {
                    return Err(ParseCommandError::Arguments {
                        command: "export",
                        expected: "a file path",
                    });
                }
            },
            "new" => Command::New,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(ParseCommandError::Unknown(head.to_string())),
        };
        Ok(command)
    }
}

fn position(command: &'static str, args: &[&str]) -> Result<Position, ParseCommandError> {
    let [row, col] = args else {
        return Err(ParseCommandError::Arguments {
            command,
            expected: "a row and a column",
        });
    };
    Ok(Position::new(coordinate(row)?, coordinate(col)?))
}

fn coordinate(raw: &str) -> Result<i32, ParseCommandError> {
    raw.parse()
        .map_err(|_| ParseCommandError::Coordinate(raw.to_string()))
}

fn no_args(command: &'static str, args: &[&str]) -> Result<(), ParseCommandError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(ParseCommandError::Arguments {
            command,
            expected: "no arguments",
        })
    }
}

fn optional_path(
    command: &'static str,
    args: &[&str],
) -> Result<Option<PathBuf>, ParseCommandError> {
    match args {
        [] => Ok(None),
        [path] => Ok(Some(PathBuf::from(path))),
        _ => Err(ParseCommandError::Arguments {
            command,
            expected: "at most one file path",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_actions() {
        assert_eq!(
            "move 1 2".parse(),
            Ok(Command::Play(Action::move_to(Position::new(1, 2))))
        );
        assert_eq!(
            "  WALL 2 3 ".parse(),
            Ok(Command::Play(Action::place_wall(Position::new(2, 3))))
        );
        assert_eq!("hit".parse(), Ok(Command::Play(Action::hit())));
        assert_eq!("e".parse(), Ok(Command::Play(Action::end_turn())));
    }

    #[test]
    fn off_board_coordinates_reach_the_engine() {
        // Range checks belong to the rules, the parser only needs integers.
        assert_eq!(
            "move -1 9".parse(),
            Ok(Command::Play(Action::move_to(Position::new(-1, 9))))
        );
    }

    #[test]
    fn parses_session_commands() {
        assert_eq!("save".parse(), Ok(Command::Save(None)));
        assert_eq!(
            "load game.snap".parse(),
            Ok(Command::Load(Some(PathBuf::from("game.snap"))))
        );
        assert_eq!(
            "export log.jsonl".parse(),
            Ok(Command::Export(PathBuf::from("log.jsonl")))
        );
        assert_eq!("quit".parse(), Ok(Command::Quit));
    }

    #[test]
    fn reports_malformed_input() {
        assert_eq!("".parse::<Command>(), Err(ParseCommandError::Empty));
        assert_eq!(
            "fly".parse::<Command>(),
            Err(ParseCommandError::Unknown("fly".into()))
        );
        assert!(matches!(
            "move 1".parse::<Command>(),
            Err(ParseCommandError::Arguments { command: "move", .. })
        ));
        assert_eq!(
            "wall a 2".parse::<Command>(),
            Err(ParseCommandError::Coordinate("a".into()))
        );
        assert!(matches!(
            "hit now".parse::<Command>(),
            Err(ParseCommandError::Arguments { command: "hit", .. })
        ));
        assert!(matches!(
            "export".parse::<Command>(),
            Err(ParseCommandError::Arguments { command: "export", .. })
        ));
    }
}
