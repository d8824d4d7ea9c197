use thiserror::Error;

use crate::{CardId, CellCount};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Alphabet has {available} unique symbols but {required} are required")]
    ConfigurationError {
        required: CellCount,
        available: CellCount,
    },
    #[error("Card index {index} is outside a board of {len} cards")]
    InvalidIndex { index: CardId, len: CellCount },
    #[error("Board shape does not match declared pair count")]
    InvalidBoardShape,
    #[error("Alphabet contains an empty symbol")]
    EmptySymbol,
    #[error("Unknown difficulty, expected one of easy, medium, hard")]
    UnknownDifficulty,
}

pub type Result<T> = core::result::Result<T, GameError>;
