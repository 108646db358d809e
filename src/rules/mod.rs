//! Rules: the matching predicate, the engine trait and its errors.
//!
//! Games implement `RulesEngine` to define:
//! - Legal actions for each game state
//! - How actions modify state
//! - Which player, if any, has won

pub mod engine;
pub mod error;
pub mod matching;

pub use engine::RulesEngine;
pub use error::{IndexSlot, PlayError};
pub use matching::{first_match, first_matching_center, matches, playable_indices};
