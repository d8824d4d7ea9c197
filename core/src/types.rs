use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Single grid axis used for board rows and columns.
pub type Coord = u8;

/// Count type used for card totals and pair counts.
pub type CellCount = u16;

/// Stable board position of a card, `0..N-1` in row-major order.
pub type CardId = u16;

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Named preset fixing grid dimensions and pair count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All levels, smallest board first.
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn layout(self) -> BoardLayout {
        use Difficulty::*;
        match self {
            Easy => BoardLayout::new_unchecked(3, 4, 6),
            Medium => BoardLayout::new_unchecked(4, 4, 8),
            Hard => BoardLayout::new_unchecked(4, 6, 12),
        }
    }

    pub const fn pair_count(self) -> CellCount {
        self.layout().pair_count
    }

    pub const fn name(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "easy",
            Medium => "medium",
            Hard => "hard",
        }
    }

    /// Selector text such as `easy (3×4)`.
    pub fn label(self) -> alloc::string::String {
        let layout = self.layout();
        alloc::format!("{} ({}×{})", self.name(), layout.rows, layout.cols)
    }

    /// Largest pair count among the built-in levels, the alphabet must cover it.
    pub fn max_pair_count() -> CellCount {
        Self::ALL
            .iter()
            .map(|difficulty| difficulty.pair_count())
            .max()
            .unwrap_or(0)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s))
            .ok_or(GameError::UnknownDifficulty)
    }
}
