use std::str::FromStr;
use syncd_core::{CardId, Difficulty, GameError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command {0:?}, type `help` for a list")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("Not a card number: {0:?}")]
    BadCardId(String),
    #[error(transparent)]
    Difficulty(#[from] GameError),
}

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    Flip(CardId),
    Reset,
    Difficulty(Difficulty),
    State,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  flip N | N        turn card N face up
  reset             deal a new board
  difficulty LEVEL  switch to easy, medium or hard
  state             print the session as JSON
  help              show this list
  quit              leave the game";

fn parse_card_id(arg: &str) -> Result<CardId, CommandError> {
    arg.parse()
        .map_err(|_| CommandError::BadCardId(arg.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };
        let arg = words.next();

        Ok(match head.to_ascii_lowercase().as_str() {
            "flip" | "f" => parse_card_id(arg.ok_or(CommandError::MissingArgument("flip"))?)
                .map(Command::Flip)?,
            "reset" | "r" => Command::Reset,
            "difficulty" | "d" => {
                let level = arg.ok_or(CommandError::MissingArgument("difficulty"))?;
                Command::Difficulty(level.parse()?)
            }
            "state" | "s" => Command::State,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ if head.chars().all(|c| c.is_ascii_digit()) => Command::Flip(parse_card_id(head)?),
            _ => return Err(CommandError::Unknown(head.to_string())),
        })
    }
}
