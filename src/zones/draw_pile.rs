//! A player's face-down draw pile.
//!
//! Backed by `im::Vector` so cloning a game state stays O(1) and drawing
//! from the front is cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// FIFO pile of face-down cards. Draws come off the front.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawPile {
    cards: Vector<Card>,
}

impl DrawPile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove and return the front card, or `None` if the pile is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl FromIterator<Card> for DrawPile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Card>> for DrawPile {
    fn from(cards: Vec<Card>) -> Self {
        cards.into_iter().collect()
    }
}
