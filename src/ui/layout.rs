//! Per-screen layout.
//!
//! A layout is computed once from the current state and then used both to
//! draw the frame and to resolve clicks, so what the player sees is exactly
//! what they can hit.

use crate::cards::{CARD_HEIGHT, CARD_WIDTH};
use crate::core::{GameState, PlayerId};

use super::geometry::{
    Rect, AI_AREA_Y, CARD_MARGIN, CENTER_Y, HAND_CARDS_PER_ROW, PLAYER_AREA_Y, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};

/// Lay `count` cards out left to right from `(start_x, y)`, wrapping after
/// `per_row` cards.
#[must_use]
pub fn layout_row(start_x: i32, y: i32, count: usize, per_row: usize, gap: i32) -> Vec<Rect> {
    (0..count)
        .map(|i| {
            let col = (i % per_row) as i32;
            let row = (i / per_row) as i32;
            Rect::new(
                start_x + col * (CARD_WIDTH + gap),
                y + row * (CARD_HEIGHT + gap),
                CARD_WIDTH,
                CARD_HEIGHT,
            )
        })
        .collect()
}

/// Main menu buttons.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuLayout {
    pub play_button: Rect,
    pub rules_button: Rect,
}

impl Default for MenuLayout {
    fn default() -> Self {
        Self {
            play_button: Rect::new(SCREEN_WIDTH / 2 - 120, 220, 240, 60),
            rules_button: Rect::new(SCREEN_WIDTH / 2 - 120, 320, 240, 60),
        }
    }
}

/// Rules screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RulesLayout {
    pub back_button: Rect,
}

impl Default for RulesLayout {
    fn default() -> Self {
        Self {
            back_button: Rect::new(40, SCREEN_HEIGHT - 80, 180, 50),
        }
    }
}

/// Game over screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverLayout {
    pub menu_button: Rect,
}

impl Default for OverLayout {
    fn default() -> Self {
        Self {
            menu_button: Rect::new(SCREEN_WIDTH / 2 - 100, 320, 200, 60),
        }
    }
}

/// What a click on the playing screen landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameHit {
    DrawButton,
    HandCard(usize),
}

/// Playing screen: one rect per visible card, plus the draw button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameLayout {
    pub centers: Vec<Rect>,
    pub ai_hand: Vec<Rect>,
    pub human_hand: Vec<Rect>,
    pub draw_button: Rect,
}

impl GameLayout {
    /// Compute the layout for the current state.
    #[must_use]
    pub fn compute(state: &GameState) -> Self {
        let slots = state.centers().len();
        let row_width = slots as i32 * CARD_WIDTH + (slots as i32 - 1) * CARD_MARGIN;
        let centers = layout_row(
            (SCREEN_WIDTH - row_width) / 2,
            CENTER_Y,
            slots,
            slots,
            CARD_MARGIN,
        );

        Self {
            centers,
            ai_hand: layout_row(
                30,
                AI_AREA_Y,
                state.player(PlayerId::Ai).hand().len(),
                HAND_CARDS_PER_ROW,
                CARD_MARGIN,
            ),
            human_hand: layout_row(
                30,
                PLAYER_AREA_Y,
                state.player(PlayerId::Human).hand().len(),
                HAND_CARDS_PER_ROW,
                CARD_MARGIN,
            ),
            draw_button: Rect::new(30, SCREEN_HEIGHT - 70, 150, 40),
        }
    }

    /// Resolve a click. The draw button takes precedence over cards.
    #[must_use]
    pub fn hit_test(&self, x: i32, y: i32) -> Option<GameHit> {
        if self.draw_button.contains(x, y) {
            return Some(GameHit::DrawButton);
        }
        self.human_hand
            .iter()
            .position(|r| r.contains(x, y))
            .map(GameHit::HandCard)
    }
}

/// Layout of whichever screen is showing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenLayout {
    Menu(MenuLayout),
    Rules(RulesLayout),
    Playing(GameLayout),
    Over(OverLayout),
}
