use alloc::vec::Vec;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use super::*;

/// Generation strategy that takes the first `pair_count` symbols, doubles them and deals them in a uniformly random
/// order. Every deal advances the same seeded generator.
#[derive(Clone, Debug)]
pub struct ShuffledBoardGenerator {
    rng: SmallRng,
}

impl ShuffledBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl BoardGenerator for ShuffledBoardGenerator {
    fn generate(&mut self, layout: BoardLayout, alphabet: &Alphabet) -> Result<Board> {
        let symbols = alphabet.select(layout.pair_count)?;

        let mut tokens: Vec<&Symbol> = symbols.iter().flat_map(|symbol| [symbol, symbol]).collect();
        // Fisher-Yates
        tokens.shuffle(&mut self.rng);

        let cards = tokens
            .into_iter()
            .zip(0..)
            .map(|(symbol, id)| Card::new(id, symbol.clone()))
            .collect();
        log::debug!(
            "Dealt {} cards on a {}x{} grid",
            layout.total_cards(),
            layout.rows,
            layout.cols
        );

        Board::from_cards(layout, cards)
    }
}
