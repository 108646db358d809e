//! A player's hand.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Ordered cards held by a player.
///
/// Order only affects display and selection. Cards leave by index and
/// arrive at the end.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get the card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// All cards, in hand order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Append a card.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the card at `index`, shifting later cards left.
    ///
    /// Returns `None` if out of range.
    pub fn take(&mut self, index: usize) -> Option<Card> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
