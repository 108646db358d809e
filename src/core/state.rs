//! Game state.
//!
//! ## GameState
//!
//! Everything a game needs between ticks:
//! - The open center cards
//! - Both players' hands and piles
//! - When the opponent last acted
//! - Whether the game is over, and who won
//! - The history of applied actions
//!
//! Mutation goes through the rules engine (`crate::games::colour`), which
//! is the only code that flips the status to `Over`.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{Action, ActionRecord};
use super::player::{Player, PlayerId, PlayerMap};
use crate::cards::Card;

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    Active,
    /// Terminal. No further mutation.
    Over { winner: PlayerId },
}

/// Full game state.
///
/// Uses persistent/inline data structures so cloning a state is cheap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    centers: SmallVec<[Card; 1]>,
    players: PlayerMap<Player>,
    last_ai_action: u64,
    status: GameStatus,
    history: Vector<ActionRecord>,
}

impl GameState {
    /// Assemble a state from explicit parts.
    ///
    /// The status starts `Active` regardless of the players' cards.
    ///
    /// Panics if `centers` is empty or the players' seats are wrong.
    #[must_use]
    pub fn from_parts(centers: Vec<Card>, human: Player, ai: Player) -> Self {
        assert!(!centers.is_empty(), "Must have at least 1 center card");
        assert_eq!(human.id(), PlayerId::Human, "First player must be the human");
        assert_eq!(ai.id(), PlayerId::Ai, "Second player must be the AI");

        Self {
            centers: centers.into_iter().collect(),
            players: PlayerMap::from_pair(human, ai),
            last_ai_action: 0,
            status: GameStatus::Active,
            history: Vector::new(),
        }
    }

    // === Center ===

    /// The open center cards.
    #[must_use]
    pub fn centers(&self) -> &[Card] {
        &self.centers
    }

    /// Replace a center card, returning the previous occupant.
    pub(crate) fn replace_center(&mut self, index: usize, card: Card) -> Card {
        std::mem::replace(&mut self.centers[index], card)
    }

    // === Players ===

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// Iterate over both players, human first.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players.iter()
    }

    // === Opponent timing ===

    /// Timestamp (ms) of the opponent's last decision, 0 before the first.
    #[must_use]
    pub fn last_ai_action(&self) -> u64 {
        self.last_ai_action
    }

    pub(crate) fn set_last_ai_action(&mut self, now_ms: u64) {
        self.last_ai_action = now_ms;
    }

    // === Status ===

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Over { .. })
    }

    /// The winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Over { winner } => Some(winner),
            GameStatus::Active => None,
        }
    }

    pub(crate) fn finish(&mut self, winner: PlayerId) {
        self.status = GameStatus::Over { winner };
    }

    // === Action History ===

    /// All applied actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Append an action to the history.
    pub(crate) fn record_action(&mut self, player: PlayerId, action: Action) {
        let sequence = self.history.len() as u32;
        self.history
            .push_back(ActionRecord::new(player, action, sequence));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::ColorName;

    fn state() -> GameState {
        GameState::from_parts(
            vec![Card::new(ColorName::Blue, ColorName::Orange)],
            Player::from_parts(
                PlayerId::Human,
                vec![Card::new(ColorName::Red, ColorName::Blue)],
                vec![],
            ),
            Player::from_parts(
                PlayerId::Ai,
                vec![Card::new(ColorName::Green, ColorName::Yellow)],
                vec![],
            ),
        )
    }

    #[test]
    fn test_from_parts() {
        let state = state();

        assert_eq!(state.centers().len(), 1);
        assert_eq!(state.player(PlayerId::Human).hand().len(), 1);
        assert_eq!(state.player(PlayerId::Ai).hand().len(), 1);
        assert_eq!(state.status(), GameStatus::Active);
        assert_eq!(state.last_ai_action(), 0);
        assert!(state.history().is_empty());
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_replace_center_returns_previous() {
        let mut state = state();
        let previous = state.replace_center(0, Card::new(ColorName::Pink, ColorName::Pink));

        assert_eq!(previous.text, ColorName::Blue);
        assert_eq!(state.centers()[0].text, ColorName::Pink);
    }

    #[test]
    fn test_finish() {
        let mut state = state();
        state.finish(PlayerId::Ai);

        assert!(state.is_over());
        assert_eq!(state.winner(), Some(PlayerId::Ai));
    }

    #[test]
    fn test_record_action_sequences() {
        let mut state = state();
        state.record_action(PlayerId::Human, Action::Draw);
        state.record_action(PlayerId::Ai, Action::play(0, 0));

        let seqs: Vec<_> = state.history().iter().map(|r| r.sequence).collect();
        assert_eq!(seqs, vec![0, 1]);
        assert_eq!(state.history()[1].player, PlayerId::Ai);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = state();
        let snapshot = state.clone();

        state.record_action(PlayerId::Human, Action::Draw);
        state.finish(PlayerId::Human);

        assert!(snapshot.history().is_empty());
        assert!(!snapshot.is_over());
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 center card")]
    fn test_no_centers() {
        let s = state();
        let _ = GameState::from_parts(
            vec![],
            s.player(PlayerId::Human).clone(),
            s.player(PlayerId::Ai).clone(),
        );
    }
}
