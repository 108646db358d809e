//! Rules engine trait.
//!
//! The engine is the only mutation path for a `GameState`. Both the human
//! input layer and the scripted opponent go through it.
//!
//! ## Implementation Notes
//!
//! - `legal_actions`: return empty if the player can't act
//! - `apply_action`: must be deterministic, and must leave the state
//!   untouched when it returns an error
//! - `apply_action` on a finished game is a no-op, not an error

use crate::core::action::Action;
use crate::core::config::GameConfig;
use crate::core::player::PlayerId;
use crate::core::state::GameState;

use super::error::PlayError;

/// Rules engine trait.
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Enumerate legal actions for a player, plays before draws.
    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action>;

    /// Apply an action to the game state.
    fn apply_action(
        &mut self,
        state: &mut GameState,
        player: PlayerId,
        action: Action,
    ) -> Result<(), PlayError>;
}
