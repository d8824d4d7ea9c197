use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use ndarray::{Array2, ArrayView1};

use crate::*;

/// Cards laid out row-major on a `rows × cols` grid, card `id` sits at `(id / cols, id % cols)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    layout: BoardLayout,
    cards: Array2<Card>,
}

impl Board {
    /// Wraps cards already in id order. Fails unless the count matches the layout and ids are sequential.
    pub fn from_cards(layout: BoardLayout, cards: Vec<Card>) -> Result<Self> {
        let sequential = cards
            .iter()
            .zip(0..)
            .all(|(card, id): (&Card, CardId)| card.id == id);
        if !sequential {
            return Err(GameError::InvalidBoardShape);
        }

        let shape = (usize::from(layout.rows), usize::from(layout.cols));
        let cards =
            Array2::from_shape_vec(shape, cards).map_err(|_| GameError::InvalidBoardShape)?;
        Ok(Self { layout, cards })
    }

    pub fn layout(&self) -> BoardLayout {
        self.layout
    }

    pub fn dims(&self) -> (Coord, Coord) {
        self.layout.dims()
    }

    pub fn len(&self) -> CellCount {
        self.layout.total_cards()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn validate_id(&self, id: CardId) -> Result<CardId> {
        if id < self.len() {
            Ok(id)
        } else {
            Err(GameError::InvalidIndex {
                index: id,
                len: self.len(),
            })
        }
    }

    pub fn card(&self, id: CardId) -> Result<&Card> {
        let id = self.validate_id(id)?;
        Ok(&self[id])
    }

    /// Cards in id order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// One view per grid row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, Card>> {
        self.cards.outer_iter()
    }

    /// Id of the other card bearing the same symbol.
    pub fn partner_of(&self, id: CardId) -> Result<CardId> {
        let symbol = &self.card(id)?.symbol;
        self.cards()
            .find(|card| card.id != id && card.symbol == *symbol)
            .map(|card| card.id)
            .ok_or(GameError::InvalidBoardShape)
    }

    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().cloned().collect()
    }

    fn position(&self, id: CardId) -> [usize; 2] {
        let cols = usize::from(self.layout.cols);
        let id = usize::from(id);
        [id / cols, id % cols]
    }
}

impl Index<CardId> for Board {
    type Output = Card;

    fn index(&self, id: CardId) -> &Self::Output {
        &self.cards[self.position(id)]
    }
}

impl IndexMut<CardId> for Board {
    fn index_mut(&mut self, id: CardId) -> &mut Self::Output {
        let position = self.position(id);
        &mut self.cards[position]
    }
}
