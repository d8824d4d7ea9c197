use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

/// Lowest attempt count per difficulty, sessions on a custom layout share one extra slot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScores {
    levels: [Option<u32>; 3],
    custom: Option<u32>,
}

impl BestScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Best for a level, `None` selects the custom-layout slot.
    pub fn get(&self, difficulty: impl Into<Option<Difficulty>>) -> Option<u32> {
        match difficulty.into() {
            Some(difficulty) => self.levels[difficulty as usize],
            None => self.custom,
        }
    }

    /// Stores `attempts` if there is no record yet or it beats the current one. Returns whether it was stored.
    pub fn record(&mut self, difficulty: impl Into<Option<Difficulty>>, attempts: u32) -> bool {
        let slot = match difficulty.into() {
            Some(difficulty) => &mut self.levels[difficulty as usize],
            None => &mut self.custom,
        };
        match *slot {
            Some(best) if best <= attempts => false,
            _ => {
                *slot = Some(attempts);
                true
            }
        }
    }
}

/// Formats elapsed seconds as `m:ss`.
pub fn format_elapsed(seconds: u32) -> String {
    alloc::format!("{}:{:02}", seconds / 60, seconds % 60)
}
