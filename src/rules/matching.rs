//! The matching rule.
//!
//! Two cards match when any color of one equals any color of the other:
//! text to text, ink to ink, or crosswise. This is the only gameplay
//! predicate; every legality check reduces to it.

use crate::cards::Card;

/// Check whether two cards are compatible.
///
/// ```
/// use colour_addict::cards::{Card, ColorName};
/// use colour_addict::rules::matches;
///
/// let red_in_blue = Card::new(ColorName::Red, ColorName::Blue);
/// let blue_in_orange = Card::new(ColorName::Blue, ColorName::Orange);
/// let green_in_yellow = Card::new(ColorName::Green, ColorName::Yellow);
///
/// assert!(matches(&red_in_blue, &blue_in_orange));
/// assert!(!matches(&red_in_blue, &green_in_yellow));
/// ```
#[must_use]
pub fn matches(a: &Card, b: &Card) -> bool {
    a.text == b.text || a.ink == b.ink || a.text == b.ink || a.ink == b.text
}

/// Indices of every card in `hand` that matches at least one of `centers`.
///
/// Ascending order. Used for hinting only.
#[must_use]
pub fn playable_indices(hand: &[Card], centers: &[Card]) -> Vec<usize> {
    hand.iter()
        .enumerate()
        .filter(|(_, card)| centers.iter().any(|c| matches(card, c)))
        .map(|(i, _)| i)
        .collect()
}

/// Index of the first center `card` matches.
#[must_use]
pub fn first_matching_center(card: &Card, centers: &[Card]) -> Option<usize> {
    centers.iter().position(|c| matches(card, c))
}

/// First `(hand_index, center_index)` pair that matches, scanning the hand
/// in order and, for each card, the centers in order.
#[must_use]
pub fn first_match(hand: &[Card], centers: &[Card]) -> Option<(usize, usize)> {
    hand.iter()
        .enumerate()
        .find_map(|(i, card)| first_matching_center(card, centers).map(|c| (i, c)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::ColorName::*;

    #[test]
    fn test_each_pairing_matches() {
        let center = Card::new(Red, Blue);

        assert!(matches(&Card::new(Red, Green), &center)); // text-text
        assert!(matches(&Card::new(Green, Blue), &center)); // ink-ink
        assert!(matches(&Card::new(Blue, Green), &center)); // text-ink
        assert!(matches(&Card::new(Green, Red), &center)); // ink-text
        assert!(!matches(&Card::new(Green, Yellow), &center));
    }

    #[test]
    fn test_card_matches_itself() {
        let card = Card::new(Pink, Brown);
        assert!(matches(&card, &card));
    }

    #[test]
    fn test_playable_indices() {
        let hand = vec![
            Card::new(Green, Yellow),
            Card::new(Red, Black),
            Card::new(Grey, Grey),
            Card::new(Orange, Purple),
        ];
        let centers = vec![Card::new(Red, Blue), Card::new(Purple, Grey)];

        assert_eq!(playable_indices(&hand, &centers), vec![1, 2, 3]);
        assert!(playable_indices(&hand, &[]).is_empty());
        assert!(playable_indices(&[], &centers).is_empty());
    }

    #[test]
    fn test_first_match_scans_hand_then_centers() {
        let hand = vec![
            Card::new(Green, Yellow),
            Card::new(Purple, Red),
            Card::new(Red, Red),
        ];
        let centers = vec![Card::new(Red, Blue), Card::new(Purple, Grey)];

        // Hand card 1 is the first that matches anything; it matches
        // center 0 via ink and center 1 via text, center 0 wins.
        assert_eq!(first_match(&hand, &centers), Some((1, 0)));
        assert_eq!(first_match(&hand[..1], &centers), None);
    }

    #[test]
    fn test_first_matching_center() {
        let centers = vec![Card::new(Red, Blue), Card::new(Purple, Grey)];
        assert_eq!(first_matching_center(&Card::new(Grey, Black), &centers), Some(1));
        assert_eq!(first_matching_center(&Card::new(Black, Black), &centers), None);
    }
}
