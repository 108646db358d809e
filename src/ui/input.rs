//! Input events, already translated out of whatever windowing layer produced
//! them.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Space,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Primary button pressed at a canvas position.
    PointerDown { x: i32, y: i32 },
    KeyPress(Key),
    /// Window closed.
    Quit,
}

impl InputEvent {
    #[must_use]
    pub fn click(x: i32, y: i32) -> Self {
        Self::PointerDown { x, y }
    }

    #[must_use]
    pub fn key(key: Key) -> Self {
        Self::KeyPress(key)
    }
}

/// Whether the host loop should keep running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}
