//! Errors returned by engine operations.

use serde::{Deserialize, Serialize};

/// Which index an `InvalidIndex` error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexSlot {
    Hand,
    Center,
}

impl std::fmt::Display for IndexSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexSlot::Hand => f.write_str("hand"),
            IndexSlot::Center => f.write_str("center"),
        }
    }
}

/// Error when applying a play.
///
/// Both variants indicate a caller bug: the UI is expected to offer only
/// in-range, matching plays. State is never modified when an error is
/// returned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayError {
    /// A hand or center index was out of bounds.
    InvalidIndex {
        slot: IndexSlot,
        index: usize,
        len: usize,
    },
    /// The card does not match the target center. Only raised when strict
    /// plays are enabled.
    IllegalMove {
        hand_index: usize,
        center_index: usize,
    },
}

impl std::fmt::Display for PlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayError::InvalidIndex { slot, index, len } => {
                write!(f, "{} index {} out of range (len {})", slot, index, len)
            }
            PlayError::IllegalMove {
                hand_index,
                center_index,
            } => write!(
                f,
                "hand card {} does not match center {}",
                hand_index, center_index
            ),
        }
    }
}

impl std::error::Error for PlayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = PlayError::InvalidIndex {
            slot: IndexSlot::Hand,
            index: 4,
            len: 3,
        };
        assert_eq!(err.to_string(), "hand index 4 out of range (len 3)");

        let err = PlayError::IllegalMove {
            hand_index: 0,
            center_index: 1,
        };
        assert_eq!(err.to_string(), "hand card 0 does not match center 1");
    }

    #[test]
    fn test_serialization() {
        let err = PlayError::InvalidIndex {
            slot: IndexSlot::Center,
            index: 2,
            len: 1,
        };
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"type\":\"InvalidIndex\""));

        let deserialized: PlayError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }
}
