//! Colour Addict rules.

use crate::cards::CardFactory;
use crate::core::{Action, GameConfig, GameState, Player, PlayerId};
use crate::rules::{matches, first_matching_center, IndexSlot, PlayError, RulesEngine};

/// The Colour Addict rules engine.
///
/// Holds only configuration; all game data lives in `GameState`.
#[derive(Clone, Debug, Default)]
pub struct ColourGame {
    config: GameConfig,
}

/// Builder for creating a ColourGame and a freshly dealt state.
#[derive(Clone, Debug, Default)]
pub struct ColourGameBuilder {
    config: GameConfig,
}

impl ColourGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn pile_size(mut self, size: usize) -> Self {
        self.config = self.config.with_pile_size(size);
        self
    }

    pub fn hand_size(mut self, size: usize) -> Self {
        self.config = self.config.with_hand_size(size);
        self
    }

    pub fn center_slots(mut self, slots: usize) -> Self {
        self.config = self.config.with_center_slots(slots);
        self
    }

    pub fn ai_reaction_ms(mut self, ms: u64) -> Self {
        self.config = self.config.with_ai_reaction_ms(ms);
        self
    }

    pub fn splash_count(mut self, count: usize) -> Self {
        self.config = self.config.with_splash_count(count);
        self
    }

    pub fn strict_plays(mut self) -> Self {
        self.config = self.config.with_strict_plays();
        self
    }

    /// Build the game and deal the initial state.
    ///
    /// Dealing order is fixed: center cards, then the human's pile, then
    /// the AI's pile. Each player then draws the opening hand from the
    /// front of their pile.
    pub fn build(self, seed: u64) -> (ColourGame, GameState) {
        let config = self.config;
        let mut factory = CardFactory::new(seed).with_splash_count(config.splash_count);

        let centers = factory.random_cards(config.center_slots);
        let human = Player::deal(
            PlayerId::Human,
            factory.random_cards(config.pile_size),
            config.hand_size,
        );
        let ai = Player::deal(
            PlayerId::Ai,
            factory.random_cards(config.pile_size),
            config.hand_size,
        );

        let state = GameState::from_parts(centers, human, ai);
        (ColourGame::new(config), state)
    }
}

impl ColourGame {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Play the hand card at `hand_index` onto `center_index`.
    ///
    /// The previous center card is discarded. Afterwards the acting player,
    /// then the other, is checked for a win. Ignored once the game is over.
    ///
    /// Unless strict plays are configured, the card is not checked against
    /// the center: callers are expected to offer matching cards only.
    pub fn play_card(
        &self,
        state: &mut GameState,
        player: PlayerId,
        hand_index: usize,
        center_index: usize,
    ) -> Result<(), PlayError> {
        if state.is_over() {
            return Ok(());
        }

        let hand = state.player(player).hand();
        let card = hand.get(hand_index).ok_or(PlayError::InvalidIndex {
            slot: IndexSlot::Hand,
            index: hand_index,
            len: hand.len(),
        })?;
        let center = state
            .centers()
            .get(center_index)
            .ok_or(PlayError::InvalidIndex {
                slot: IndexSlot::Center,
                index: center_index,
                len: state.centers().len(),
            })?;

        if self.config.strict_plays && !matches(card, center) {
            return Err(PlayError::IllegalMove {
                hand_index,
                center_index,
            });
        }

        if let Some(card) = state.player_mut(player).take_card(hand_index) {
            state.replace_center(center_index, card);
            state.record_action(player, Action::play(hand_index, center_index));
            Self::check_win(state, player);
        }
        Ok(())
    }

    /// Draw one card for `player`.
    ///
    /// Returns whether a card was drawn: an empty pile or a finished game
    /// make this a no-op.
    pub fn draw_card(&self, state: &mut GameState, player: PlayerId) -> bool {
        if state.is_over() {
            return false;
        }

        let drawn = state.player_mut(player).draw_to_hand(1) == 1;
        if drawn {
            state.record_action(player, Action::Draw);
        }
        drawn
    }

    /// Play the hand card at `hand_index` onto the first center it matches.
    ///
    /// This is what clicking a card does. Returns `Ok(false)` without
    /// changing anything if the card matches no center or the game is over.
    pub fn play_first_match(
        &self,
        state: &mut GameState,
        player: PlayerId,
        hand_index: usize,
    ) -> Result<bool, PlayError> {
        if state.is_over() {
            return Ok(false);
        }

        let hand = state.player(player).hand();
        let card = hand.get(hand_index).ok_or(PlayError::InvalidIndex {
            slot: IndexSlot::Hand,
            index: hand_index,
            len: hand.len(),
        })?;

        match first_matching_center(card, state.centers()) {
            Some(center_index) => {
                self.play_card(state, player, hand_index, center_index)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Hand indices of `player` that match some center.
    #[must_use]
    pub fn playable_indices(&self, state: &GameState, player: PlayerId) -> Vec<usize> {
        state.player(player).playable_indices(state.centers())
    }

    /// End the game if the acting player, or failing that the other
    /// player, has emptied both hand and pile.
    fn check_win(state: &mut GameState, acting: PlayerId) {
        if let Some(winner) = [acting, acting.opponent()]
            .into_iter()
            .find(|&p| state.player(p).has_won())
        {
            state.finish(winner);
        }
    }
}

impl RulesEngine for ColourGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        if state.is_over() {
            return vec![];
        }

        let me = state.player(player);
        let mut actions: Vec<Action> = me
            .hand()
            .iter()
            .enumerate()
            .flat_map(|(hand_index, card)| {
                state
                    .centers()
                    .iter()
                    .enumerate()
                    .filter(move |(_, center)| matches(card, center))
                    .map(move |(center_index, _)| Action::play(hand_index, center_index))
            })
            .collect();

        if !me.pile().is_empty() {
            actions.push(Action::Draw);
        }

        actions
    }

    fn apply_action(
        &mut self,
        state: &mut GameState,
        player: PlayerId,
        action: Action,
    ) -> Result<(), PlayError> {
        match action {
            Action::Play {
                hand_index,
                center_index,
            } => self.play_card(state, player, hand_index, center_index),
            Action::Draw => {
                self.draw_card(state, player);
                Ok(())
            }
        }
    }
}
