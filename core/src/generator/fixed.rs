use alloc::vec::Vec;

use super::*;

/// Deals the same arrangement every time. `pattern[id]` is the index of the alphabet symbol placed at `id`, so
/// `[0, 0, 1, 1]` puts the first pair on cards 0 and 1.
///
/// Useful for replaying a known deal and for driving sessions in tests.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedBoardGenerator {
    pattern: Vec<CellCount>,
}

impl FixedBoardGenerator {
    pub fn new(pattern: impl Into<Vec<CellCount>>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// Pairs side by side: `0, 0, 1, 1, 2, 2, ...`.
    pub fn adjacent_pairs(pair_count: CellCount) -> Self {
        Self::new(
            (0..pair_count)
                .flat_map(|pair| [pair, pair])
                .collect::<Vec<_>>(),
        )
    }

    fn validate(&self, layout: BoardLayout) -> Result<()> {
        if self.pattern.len() != usize::from(layout.total_cards()) {
            return Err(GameError::InvalidBoardShape);
        }
        for pair in 0..layout.pair_count {
            if self.pattern.iter().filter(|&&index| index == pair).count() != 2 {
                return Err(GameError::InvalidBoardShape);
            }
        }
        Ok(())
    }
}

impl BoardGenerator for FixedBoardGenerator {
    fn generate(&mut self, layout: BoardLayout, alphabet: &Alphabet) -> Result<Board> {
        let symbols = alphabet.select(layout.pair_count)?;
        self.validate(layout)?;

        let cards = self
            .pattern
            .iter()
            .zip(0..)
            .map(|(&index, id)| Card::new(id, symbols[usize::from(index)].clone()))
            .collect();
        Board::from_cards(layout, cards)
    }
}
