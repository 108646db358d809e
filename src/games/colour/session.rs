//! A running game: rules, state and the scripted opponent together.

use crate::ai::ScriptedOpponent;
use crate::core::{Action, GameConfig, GameState, PlayerId};
use crate::rules::{PlayError, RulesEngine};

use super::game::{ColourGame, ColourGameBuilder};

/// One game in progress, driven by a tick loop.
///
/// The human's moves and the opponent's ticks all go through the same
/// engine.
#[derive(Clone, Debug)]
pub struct Session {
    game: ColourGame,
    state: GameState,
    opponent: ScriptedOpponent,
}

impl Session {
    /// Deal a fresh game.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let opponent = ScriptedOpponent::from_config(&config);
        let (game, state) = ColourGameBuilder::new().config(config).build(seed);
        Self {
            game,
            state,
            opponent,
        }
    }

    /// Wrap an existing game and state.
    #[must_use]
    pub fn from_parts(game: ColourGame, state: GameState) -> Self {
        let opponent = ScriptedOpponent::from_config(game.config());
        Self {
            game,
            state,
            opponent,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn game(&self) -> &ColourGame {
        &self.game
    }

    /// Advance the opponent to time `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> Result<Option<Action>, PlayError> {
        self.opponent.tick(&mut self.game, &mut self.state, now_ms)
    }

    /// Human clicks a hand card: play it on the first center it matches.
    pub fn human_play(&mut self, hand_index: usize) -> Result<bool, PlayError> {
        self.game
            .play_first_match(&mut self.state, PlayerId::Human, hand_index)
    }

    /// Human plays a hand card onto a specific center.
    pub fn human_play_to(&mut self, hand_index: usize, center_index: usize) -> Result<(), PlayError> {
        self.game
            .play_card(&mut self.state, PlayerId::Human, hand_index, center_index)
    }

    /// Human draws one card.
    pub fn human_draw(&mut self) -> bool {
        self.game.draw_card(&mut self.state, PlayerId::Human)
    }

    /// Human hand indices that can be played right now.
    #[must_use]
    pub fn playable(&self) -> Vec<usize> {
        self.game.playable_indices(&self.state, PlayerId::Human)
    }
}
