//! Card values.
//!
//! A `Card` carries two gameplay attributes, the color its name spells
//! (`text`) and the color it is printed in (`ink`), plus cosmetic splashes.
//! Splashes never take part in any rule.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::{ColorName, Rgb};

/// Card width in pixels. Splash positions are relative to the card's corner.
pub const CARD_WIDTH: i32 = 140;

/// Card height in pixels.
pub const CARD_HEIGHT: i32 = 80;

/// A decorative paint splash on a card face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Splash {
    /// Center x, relative to the card's left edge.
    pub x: i32,
    /// Center y, relative to the card's top edge.
    pub y: i32,
    pub radius: i32,
    pub color: Rgb,
}

/// An immutable playing card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The color name written on the card.
    pub text: ColorName,

    /// The color the name is printed in.
    pub ink: ColorName,

    /// Cosmetic decoration.
    pub splashes: SmallVec<[Splash; 5]>,
}

impl Card {
    /// Create an undecorated card.
    #[must_use]
    pub fn new(text: ColorName, ink: ColorName) -> Self {
        Self {
            text,
            ink,
            splashes: SmallVec::new(),
        }
    }

    /// Attach decoration.
    #[must_use]
    pub fn with_splashes(mut self, splashes: impl IntoIterator<Item = Splash>) -> Self {
        self.splashes = splashes.into_iter().collect();
        self
    }

    /// Compare gameplay attributes only, ignoring decoration.
    #[must_use]
    pub fn same_colors(&self, other: &Card) -> bool {
        self.text == other.text && self.ink == other.ink
    }

    /// Upper-case label drawn on the card face.
    #[must_use]
    pub fn label(&self) -> String {
        self.text.name().to_ascii_uppercase()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} in {}", self.text, self.ink)
    }
}
