//! Card containers owned by a player.
//!
//! ## Key Types
//!
//! - `Hand`: ordered cards in play, removed by index
//! - `DrawPile`: face-down reserve, drawn from the front

pub mod draw_pile;
pub mod hand;

pub use draw_pile::DrawPile;
pub use hand::Hand;
