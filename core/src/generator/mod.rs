use crate::*;
pub use fixed::*;
pub use shuffled::*;

mod fixed;
mod shuffled;

/// Deals a fresh board for a layout out of an alphabet.
pub trait BoardGenerator {
    fn generate(&mut self, layout: BoardLayout, alphabet: &Alphabet) -> Result<Board>;
}
