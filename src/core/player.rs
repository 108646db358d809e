//! Player identification, per-player storage and the player aggregate.
//!
//! ## PlayerId
//!
//! The game always has exactly two seats: the human and the scripted
//! opponent.
//!
//! ## PlayerMap
//!
//! Per-player data storage with O(1) access, indexable by `PlayerId`.
//!
//! ## Player
//!
//! A hand plus a draw pile. A player has won once both are empty.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::Card;
use crate::rules::matching::playable_indices;
use crate::zones::{DrawPile, Hand};

/// Seat identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    Human,
    Ai,
}

impl PlayerId {
    /// Both seats, human first.
    pub const ALL: [PlayerId; 2] = [PlayerId::Human, PlayerId::Ai];

    /// Storage index (human = 0, AI = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::Human => 0,
            PlayerId::Ai => 1,
        }
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::Human => PlayerId::Ai,
            PlayerId::Ai => PlayerId::Human,
        }
    }

    /// Display name shown in labels.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PlayerId::Human => "You",
            PlayerId::Ai => "Computer",
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-player data storage.
///
/// ```
/// use colour_addict::core::{PlayerId, PlayerMap};
///
/// let mut draws: PlayerMap<u32> = PlayerMap::with_value(0);
/// draws[PlayerId::Ai] += 1;
/// assert_eq!(draws[PlayerId::Human], 0);
/// assert_eq!(draws[PlayerId::Ai], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory, called human first.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        let human = factory(PlayerId::Human);
        let ai = factory(PlayerId::Ai);
        Self::from_pair(human, ai)
    }

    /// Create a map from the human's and the AI's values.
    pub fn from_pair(human: T, ai: T) -> Self {
        Self { data: [human, ai] }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs, human first.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A seat's cards: the hand in play and the face-down reserve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    hand: Hand,
    pile: DrawPile,
}

impl Player {
    /// Create a player from a fresh pile, then draw the opening hand.
    #[must_use]
    pub fn deal(id: PlayerId, pile: Vec<Card>, hand_size: usize) -> Self {
        let mut player = Self::from_parts(id, Vec::new(), pile);
        player.draw_to_hand(hand_size);
        player
    }

    /// Create a player with an exact hand and pile (no opening draw).
    #[must_use]
    pub fn from_parts(id: PlayerId, hand: Vec<Card>, pile: Vec<Card>) -> Self {
        Self {
            id,
            hand: Hand::from(hand),
            pile: DrawPile::from(pile),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[must_use]
    pub fn pile(&self) -> &DrawPile {
        &self.pile
    }

    /// Move up to `n` cards from the pile front to the hand end.
    ///
    /// Stops silently when the pile runs out. Returns how many moved.
    pub fn draw_to_hand(&mut self, n: usize) -> usize {
        let mut drawn = 0;
        while drawn < n {
            match self.pile.draw() {
                Some(card) => {
                    self.hand.push(card);
                    drawn += 1;
                }
                None => break,
            }
        }
        drawn
    }

    /// Remove the hand card at `index`.
    pub(crate) fn take_card(&mut self, index: usize) -> Option<Card> {
        self.hand.take(index)
    }

    /// Hand indices that match at least one of `centers`.
    #[must_use]
    pub fn playable_indices(&self, centers: &[Card]) -> Vec<usize> {
        playable_indices(self.hand.cards(), centers)
    }

    /// True iff both the hand and the pile are empty.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.hand.is_empty() && self.pile.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardFactory, ColorName};

    fn cards(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| Card::new(ColorName::ALL[i % 10], ColorName::Black))
            .collect()
    }

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::Human.index(), 0);
        assert_eq!(PlayerId::Ai.index(), 1);
        assert_eq!(PlayerId::Human.opponent(), PlayerId::Ai);
        assert_eq!(format!("{}", PlayerId::Ai), "Computer");
        assert_eq!(format!("{}", PlayerId::Human), "You");
    }

    #[test]
    fn test_player_map() {
        let mut map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 * 10);
        assert_eq!(map[PlayerId::Human], 0);
        assert_eq!(map[PlayerId::Ai], 10);

        map[PlayerId::Human] = 5;
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::Human, &5), (PlayerId::Ai, &10)]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u32> = PlayerMap::new(|p| p.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    fn test_deal_draws_opening_hand() {
        let pile = CardFactory::new(3).random_cards(21);
        let first_three: Vec<_> = pile[..3].to_vec();

        let player = Player::deal(PlayerId::Human, pile, 3);

        assert_eq!(player.hand().len(), 3);
        assert_eq!(player.pile().len(), 18);
        assert_eq!(player.hand().cards(), first_three.as_slice());
    }

    #[test]
    fn test_draw_more_than_pile() {
        let mut player = Player::from_parts(PlayerId::Ai, cards(1), cards(2));

        let drawn = player.draw_to_hand(5);

        assert_eq!(drawn, 2);
        assert_eq!(player.hand().len(), 3);
        assert!(player.pile().is_empty());

        // Empty pile: no-op
        assert_eq!(player.draw_to_hand(1), 0);
        assert_eq!(player.hand().len(), 3);
    }

    #[test]
    fn test_has_won() {
        assert!(Player::from_parts(PlayerId::Human, vec![], vec![]).has_won());
        assert!(!Player::from_parts(PlayerId::Human, vec![], cards(1)).has_won());
        assert!(!Player::from_parts(PlayerId::Human, cards(1), vec![]).has_won());
        assert!(!Player::from_parts(PlayerId::Human, cards(1), cards(1)).has_won());
    }

    #[test]
    fn test_playable_indices() {
        let player = Player::from_parts(
            PlayerId::Human,
            vec![
                Card::new(ColorName::Green, ColorName::Yellow),
                Card::new(ColorName::Red, ColorName::Blue),
            ],
            vec![],
        );
        let centers = [Card::new(ColorName::Blue, ColorName::Orange)];

        assert_eq!(player.playable_indices(&centers), vec![1]);
    }
}
