//! The scripted opponent.
//!
//! - `OpponentPolicy`: what to do (trait)
//! - `FirstMatch`: play the first matching card, else draw
//! - `ScriptedOpponent`: when to do it, at most once per reaction interval

pub mod opponent;
pub mod policy;

pub use opponent::ScriptedOpponent;
pub use policy::{FirstMatch, OpponentPolicy};
