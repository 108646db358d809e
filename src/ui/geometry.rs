//! Screen geometry.
//!
//! All coordinates are pixels on a fixed 1100x700 canvas, origin top-left.

use serde::{Deserialize, Serialize};

pub const SCREEN_WIDTH: i32 = 1100;
pub const SCREEN_HEIGHT: i32 = 700;

/// Gap between adjacent cards.
pub const CARD_MARGIN: i32 = 15;

/// Top edge of the center row.
pub const CENTER_Y: i32 = 280;

/// Top edge of the human's hand.
pub const PLAYER_AREA_Y: i32 = SCREEN_HEIGHT - 250;

/// Top edge of the opponent's hand.
pub const AI_AREA_Y: i32 = 70;

/// Cards per row before a hand wraps.
pub const HAND_CARDS_PER_ROW: usize = 8;

/// An axis-aligned rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Whether the point lies inside. Right and bottom edges are exclusive.
    #[must_use]
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }

    /// Horizontal center.
    #[must_use]
    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    /// Vertical center.
    #[must_use]
    pub fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }
}
