use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::*;

/// Stock emoji set. Two entries repeat and are dropped when it becomes an [`Alphabet`].
pub const DEFAULT_SYMBOLS: [&str; 18] = [
    "🌟", "🎯", "🎨", "🎪", "🎭", "🚀", "🌈", "⭐", "🎮", "🎲", "🎺", "🎸", "🎹", "🎤", "🎧", "🎬",
    "🎨", "🎪",
];

/// De-duplicated, order-preserving set of symbols boards are drawn from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<Symbol>,
}

impl Alphabet {
    /// Builds an alphabet able to serve every built-in difficulty.
    pub fn new<I, S>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        Self::with_min_unique(symbols, Difficulty::max_pair_count())
    }

    /// Builds an alphabet that must hold at least `required` unique symbols.
    pub fn with_min_unique<I, S>(symbols: I, required: CellCount) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        let mut seen = BTreeSet::new();
        let mut unique = Vec::new();

        for symbol in symbols {
            let symbol: Symbol = symbol.into();
            if symbol.as_str().trim().is_empty() {
                return Err(GameError::EmptySymbol);
            }
            if seen.insert(symbol.clone()) {
                unique.push(symbol);
            } else {
                log::debug!("Dropping duplicate symbol {}", symbol);
            }
        }

        let available = CellCount::try_from(unique.len()).unwrap_or(CellCount::MAX);
        if available < required {
            return Err(GameError::ConfigurationError {
                required,
                available,
            });
        }

        Ok(Self { symbols: unique })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// First `count` symbols in alphabet order.
    pub fn select(&self, count: CellCount) -> Result<&[Symbol]> {
        self.symbols
            .get(..usize::from(count))
            .ok_or(GameError::ConfigurationError {
                required: count,
                available: CellCount::try_from(self.symbols.len()).unwrap_or(CellCount::MAX),
            })
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        let mut seen = BTreeSet::new();
        let symbols = DEFAULT_SYMBOLS
            .iter()
            .filter(|&&symbol| seen.insert(symbol))
            .map(|&symbol| Symbol::new(symbol))
            .collect();
        Self { symbols }
    }
}
