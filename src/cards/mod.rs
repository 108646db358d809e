//! Card system: colors, card values and seeded generation.
//!
//! ## Key Types
//!
//! - `ColorName`: the ten color names, with their display palette
//! - `Card`: text color + ink color + cosmetic splashes
//! - `CardFactory`: deterministic card generation from a seed

pub mod card;
pub mod color;
pub mod factory;

pub use card::{Card, Splash, CARD_HEIGHT, CARD_WIDTH};
pub use color::{ColorName, Rgb};
pub use factory::{CardFactory, DEFAULT_SPLASH_COUNT};
