//! Colour Addict.
//!
//! - Each player starts with a 21-card pile and draws 3 into their hand
//! - One center card is open
//! - A card may be played onto a center card if they share a color, by
//!   name or by ink, crosswise included
//! - A player who can't play draws
//! - First to empty both hand and pile wins

mod game;
mod session;

pub use game::{ColourGame, ColourGameBuilder};
pub use session::Session;
