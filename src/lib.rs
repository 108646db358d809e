//! # colour-addict
//!
//! Colour Addict: a two-player real-time card matching game, human against a
//! scripted computer opponent.
//!
//! Every card shows a color name printed in an ink color. A card can go onto
//! a center card when any of the two cards' four colors coincide, crosswise
//! included. First to empty both hand and draw pile wins.
//!
//! ## Architecture
//!
//! - **Engine / presentation split**: all rules live behind [`RulesEngine`];
//!   the `ui` module only computes layout, resolves clicks and emits draw
//!   commands. No window or clock is touched by this crate.
//!
//! - **Caller-driven time**: the opponent is ticked with a timestamp supplied
//!   by the host loop, so games are reproducible from a seed plus a sequence
//!   of timestamped inputs.
//!
//! - **Persistent history**: every applied move is appended to an
//!   `im::Vector` on the state, which clones in O(1).
//!
//! ## Modules
//!
//! - `core`: Players, state, actions, RNG, configuration
//! - `cards`: Colors, cards and the card factory
//! - `zones`: Hand and draw pile
//! - `rules`: Matching rule, `RulesEngine` trait, errors
//! - `games`: The Colour Addict engine and game sessions
//! - `ai`: Scripted opponent
//! - `ui`: Screens, layout, input and draw commands

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod games;
pub mod ai;
pub mod ui;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, GameConfig, GameRng, GameState, GameStatus, Player, PlayerId, PlayerMap,
};

pub use crate::cards::{Card, CardFactory, ColorName, Rgb, Splash};

pub use crate::zones::{DrawPile, Hand};

pub use crate::rules::{matches, IndexSlot, PlayError, RulesEngine};

pub use crate::games::colour::{ColourGame, ColourGameBuilder, Session};

pub use crate::ai::{FirstMatch, OpponentPolicy, ScriptedOpponent};

pub use crate::ui::{App, Control, DrawCommand, Frame, InputEvent, Key, Screen, Surface};
