//! Action representation.
//!
//! The game has exactly two moves: play a hand card onto a center slot, or
//! draw from the pile. Applied actions are kept as `ActionRecord`s in the
//! state's history for replay and debugging.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A game action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Play the hand card at `hand_index` onto center slot `center_index`.
    Play {
        hand_index: usize,
        center_index: usize,
    },
    /// Draw one card from the pile.
    Draw,
}

impl Action {
    /// Shorthand for `Action::Play`.
    #[must_use]
    pub const fn play(hand_index: usize, center_index: usize) -> Self {
        Action::Play {
            hand_index,
            center_index,
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Position in the game's action sequence, starting at 0.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, sequence: u32) -> Self {
        Self {
            player,
            action,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_shorthand() {
        assert_eq!(
            Action::play(2, 0),
            Action::Play {
                hand_index: 2,
                center_index: 0
            }
        );
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(PlayerId::Ai, Action::play(1, 0), 7);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
