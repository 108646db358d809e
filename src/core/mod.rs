//! Core engine types: players, state, actions, RNG, configuration.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{
    ConfigError, GameConfig, DEFAULT_AI_REACTION_MS, DEFAULT_CENTER_SLOTS, DEFAULT_HAND_SIZE, DEFAULT_PILE_SIZE,
};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::{GameState, GameStatus};
