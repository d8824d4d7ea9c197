use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::*;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Game(#[from] GameError),
}

/// User-facing settings, read from TOML:
///
/// ```toml
/// difficulty = "hard"
/// symbols = ["🍎", "🍐", "🍊", ...]
/// ```
///
/// Missing keys fall back to the stock alphabet and medium difficulty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub symbols: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            symbols: DEFAULT_SYMBOLS.iter().map(|symbol| symbol.to_string()).collect(),
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(text: &str) -> core::result::Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Validated alphabet, fails if the symbols cannot fill the hardest level.
    pub fn alphabet(&self) -> Result<Alphabet> {
        Alphabet::new(self.symbols.iter().map(String::as_str))
    }
}
