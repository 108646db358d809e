//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{GameConfig, PlayerId};
use crate::games::colour::Session;

use super::py_core::{PyAction, PyCard, PyPlayerId};

/// A game against the scripted computer opponent.
///
/// The caller owns the clock: pass the current time in milliseconds to
/// `tick` once per frame.
#[pyclass(name = "Game")]
pub struct PyGame {
    session: Session,
}

#[pymethods]
impl PyGame {
    /// Deal a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic dealing
    /// - center_slots: Number of open center cards
    /// - pile_size: Cards dealt to each player
    /// - hand_size: Cards drawn into each hand at the start
    /// - ai_reaction_ms: Minimum time between computer moves
    /// - strict_plays: Reject plays that don't match the center
    ///
    /// Raises ValueError if center_slots is 0.
    #[new]
    #[pyo3(signature = (
        seed = 42,
        center_slots = 1,
        pile_size = 21,
        hand_size = 3,
        ai_reaction_ms = 2000,
        strict_plays = false
    ))]
    fn new(
        seed: u64,
        center_slots: usize,
        pile_size: usize,
        hand_size: usize,
        ai_reaction_ms: u64,
        strict_plays: bool,
    ) -> PyResult<Self> {
        let config = GameConfig {
            center_slots,
            pile_size,
            hand_size,
            ai_reaction_ms,
            strict_plays,
            ..GameConfig::default()
        };
        config
            .validate()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self {
            session: Session::new(config, seed),
        })
    }

    /// Let the computer act if its reaction time has passed.
    ///
    /// Returns the action it took, if any.
    fn tick(&mut self, now_ms: u64) -> PyResult<Option<PyAction>> {
        Ok(self.session.tick(now_ms)?.map(PyAction))
    }

    /// Play a hand card onto the first center it matches.
    ///
    /// Returns False if it matches none.
    fn play(&mut self, hand_index: usize) -> PyResult<bool> {
        Ok(self.session.human_play(hand_index)?)
    }

    /// Play a hand card onto a specific center.
    fn play_to(&mut self, hand_index: usize, center_index: usize) -> PyResult<()> {
        Ok(self.session.human_play_to(hand_index, center_index)?)
    }

    /// Draw one card. Returns False if the pile was empty.
    fn draw(&mut self) -> bool {
        self.session.human_draw()
    }

    /// The human's hand.
    fn hand(&self) -> Vec<PyCard> {
        self.session
            .state()
            .player(PlayerId::Human)
            .hand()
            .iter()
            .cloned()
            .map(PyCard)
            .collect()
    }

    fn centers(&self) -> Vec<PyCard> {
        self.session
            .state()
            .centers()
            .iter()
            .cloned()
            .map(PyCard)
            .collect()
    }

    fn pile_count(&self, player: &PyPlayerId) -> usize {
        self.session.state().player(player.0).pile().len()
    }

    fn hand_count(&self, player: &PyPlayerId) -> usize {
        self.session.state().player(player.0).hand().len()
    }

    /// Hand indices that match some center right now.
    fn playable(&self) -> Vec<usize> {
        self.session.playable()
    }

    #[getter]
    fn is_over(&self) -> bool {
        self.session.state().is_over()
    }

    #[getter]
    fn winner(&self) -> Option<PyPlayerId> {
        self.session.state().winner().map(PyPlayerId)
    }

    /// Number of moves made so far by both players.
    #[getter]
    fn move_count(&self) -> usize {
        self.session.state().history().len()
    }

    fn __repr__(&self) -> String {
        let state = self.session.state();
        let status = match state.winner() {
            Some(p) => format!("won by {p}"),
            None => "ongoing".to_string(),
        };
        format!(
            "Game(hand={}, computer_hand={}, status={})",
            state.player(PlayerId::Human).hand().len(),
            state.player(PlayerId::Ai).hand().len(),
            status
        )
    }
}
