//! Opponent decision policies.
//!
//! A policy only picks an action; timing and application are handled by
//! `ScriptedOpponent`.

use crate::core::{Action, GameState, PlayerId};
use crate::rules::first_match;

/// Policy for choosing the opponent's next action.
pub trait OpponentPolicy {
    /// Pick an action for `player`, or `None` to do nothing.
    fn select_action(&self, state: &GameState, player: PlayerId) -> Option<Action>;
}

/// Play the first card that matches, else draw.
///
/// Scans the hand in order and, for each card, the centers in order. If
/// nothing matches, draws when the pile has cards left.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstMatch;

impl OpponentPolicy for FirstMatch {
    fn select_action(&self, state: &GameState, player: PlayerId) -> Option<Action> {
        let me = state.player(player);

        if let Some((hand_index, center_index)) = first_match(me.hand().cards(), state.centers()) {
            return Some(Action::play(hand_index, center_index));
        }

        (!me.pile().is_empty()).then_some(Action::Draw)
    }
}
