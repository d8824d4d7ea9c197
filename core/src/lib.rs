#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use alphabet::*;
pub use board::*;
pub use card::*;
#[cfg(feature = "config")]
pub use config::*;
pub use error::*;
pub use generator::*;
pub use score::*;
pub use session::*;
pub use types::*;

mod alphabet;
mod board;
mod card;
#[cfg(feature = "config")]
mod config;
mod error;
mod generator;
mod score;
mod session;
mod types;

/// Grid dimensions together with the number of pairs dealt onto them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub rows: Coord,
    pub cols: Coord,
    pub pair_count: CellCount,
}

impl BoardLayout {
    pub const fn new_unchecked(rows: Coord, cols: Coord, pair_count: CellCount) -> Self {
        Self {
            rows,
            cols,
            pair_count,
        }
    }

    pub fn new(rows: Coord, cols: Coord, pair_count: CellCount) -> Result<Self> {
        if pair_count == 0 || Some(mult(rows, cols)) != pair_count.checked_mul(2) {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self::new_unchecked(rows, cols, pair_count))
    }

    pub const fn total_cards(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    pub const fn dims(&self) -> (Coord, Coord) {
        (self.rows, self.cols)
    }
}

/// Outcome of flipping a card
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Card was already face up, matched, the pair slot was full or the game is over
    Ignored,
    /// First card of a pair is now face up
    Revealed { card: CardId },
    /// Second card shares the symbol of the first, both stay face up
    Matched { first: CardId, second: CardId },
    /// Second card differs, both were turned back face down
    Mismatched { first: CardId, second: CardId },
    /// Last pair matched, the session is over
    Completed {
        first: CardId,
        second: CardId,
        attempts: u32,
        new_best: bool,
    },
}

impl FlipOutcome {
    /// Whether this outcome could have caused an update to the session
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }

    /// Whether this flip completed an attempt
    pub const fn is_attempt(self) -> bool {
        matches!(
            self,
            Self::Matched { .. } | Self::Mismatched { .. } | Self::Completed { .. }
        )
    }

    pub const fn is_match(self) -> bool {
        matches!(self, Self::Matched { .. } | Self::Completed { .. })
    }
}
