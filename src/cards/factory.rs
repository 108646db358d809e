//! Seeded card generation.
//!
//! `CardFactory` owns two independent RNG streams derived from one seed:
//! one picks card colors, the other paints splashes. Dealing is therefore
//! reproducible from the seed alone, whatever the decoration settings.

use super::card::{Card, Splash, CARD_HEIGHT, CARD_WIDTH};
use super::color::ColorName;
use crate::core::rng::GameRng;

/// Splashes painted on each generated card.
pub const DEFAULT_SPLASH_COUNT: usize = 5;

const SPLASH_RADIUS_MIN: i32 = 8;
const SPLASH_RADIUS_MAX: i32 = 20;
const SPLASH_INSET: i32 = 10;

/// Generates cards from a seed.
#[derive(Clone, Debug)]
pub struct CardFactory {
    colors: GameRng,
    splashes: GameRng,
    splash_count: usize,
}

impl CardFactory {
    /// Create a factory with the default decoration.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let root = GameRng::new(seed);
        Self {
            colors: root.for_context("colors"),
            splashes: root.for_context("splashes"),
            splash_count: DEFAULT_SPLASH_COUNT,
        }
    }

    /// Set how many splashes each card gets.
    #[must_use]
    pub fn with_splash_count(mut self, count: usize) -> Self {
        self.splash_count = count;
        self
    }

    /// Build a card with the given colors and fresh decoration.
    pub fn create_card(&mut self, text: ColorName, ink: ColorName) -> Card {
        let splashes: Vec<Splash> = (0..self.splash_count).map(|_| self.splash()).collect();
        Card::new(text, ink).with_splashes(splashes)
    }

    /// Build a card with both colors drawn uniformly and independently.
    pub fn random_card(&mut self) -> Card {
        let text = ColorName::ALL[self.colors.gen_index(ColorName::ALL.len())];
        let ink = ColorName::ALL[self.colors.gen_index(ColorName::ALL.len())];
        self.create_card(text, ink)
    }

    /// Build `count` random cards.
    pub fn random_cards(&mut self, count: usize) -> Vec<Card> {
        (0..count).map(|_| self.random_card()).collect()
    }

    fn splash(&mut self) -> Splash {
        let radius = self.splashes.gen_range(SPLASH_RADIUS_MIN..=SPLASH_RADIUS_MAX);
        let x = self.splashes.gen_range(SPLASH_INSET..=CARD_WIDTH - SPLASH_INSET);
        let y = self.splashes.gen_range(SPLASH_INSET..=CARD_HEIGHT - SPLASH_INSET);
        let color = ColorName::ALL[self.splashes.gen_index(ColorName::ALL.len())].rgb();
        Splash { x, y, radius, color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_card_keeps_colors() {
        let mut factory = CardFactory::new(1);
        let card = factory.create_card(ColorName::Red, ColorName::Blue);

        assert_eq!(card.text, ColorName::Red);
        assert_eq!(card.ink, ColorName::Blue);
        assert_eq!(card.splashes.len(), DEFAULT_SPLASH_COUNT);
    }

    #[test]
    fn test_splashes_stay_on_card() {
        let mut factory = CardFactory::new(99);

        for card in factory.random_cards(50) {
            for s in &card.splashes {
                assert!((8..=20).contains(&s.radius));
                assert!((10..=130).contains(&s.x));
                assert!((10..=70).contains(&s.y));
                assert!(ColorName::ALL.iter().any(|c| c.rgb() == s.color));
            }
        }
    }

    #[test]
    fn test_same_seed_same_cards() {
        let a = CardFactory::new(42).random_cards(21);
        let b = CardFactory::new(42).random_cards(21);
        assert_eq!(a, b);
    }

    #[test]
    fn test_colors_independent_of_decoration() {
        let plain = CardFactory::new(42).with_splash_count(0).random_cards(21);
        let fancy = CardFactory::new(42).with_splash_count(12).random_cards(21);

        assert!(plain.iter().all(|c| c.splashes.is_empty()));
        assert!(fancy.iter().all(|c| c.splashes.len() == 12));
        assert!(plain.iter().zip(&fancy).all(|(a, b)| a.same_colors(b)));
    }

    #[test]
    fn test_random_card_covers_palette() {
        let mut factory = CardFactory::new(5).with_splash_count(0);
        let cards = factory.random_cards(400);

        for color in ColorName::ALL {
            assert!(cards.iter().any(|c| c.text == color));
            assert!(cards.iter().any(|c| c.ink == color));
        }
    }
}
