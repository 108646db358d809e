//! Core type bindings for Python.

use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

use crate::cards::Card;
use crate::core::{Action, PlayerId};
use crate::rules::PlayError;

impl From<PlayError> for PyErr {
    fn from(err: PlayError) -> Self {
        match err {
            PlayError::InvalidIndex { .. } => PyIndexError::new_err(err.to_string()),
            PlayError::IllegalMove { .. } => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Python wrapper for PlayerId.
#[pyclass(name = "PlayerId")]
#[derive(Clone, Debug)]
pub struct PyPlayerId(pub PlayerId);

#[pymethods]
impl PyPlayerId {
    #[classattr]
    #[pyo3(name = "HUMAN")]
    fn human() -> Self {
        Self(PlayerId::Human)
    }

    #[classattr]
    #[pyo3(name = "AI")]
    fn ai() -> Self {
        Self(PlayerId::Ai)
    }

    /// Seat index (0 = human, 1 = computer).
    fn index(&self) -> usize {
        self.0.index()
    }

    /// Display name, "You" or "Computer".
    #[getter]
    fn name(&self) -> &'static str {
        self.0.name()
    }

    fn __repr__(&self) -> String {
        format!("PlayerId.{}", if self.0 == PlayerId::Human { "HUMAN" } else { "AI" })
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.index() as u64
    }
}

/// Python wrapper for a card.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Color name written on the card.
    #[getter]
    fn text(&self) -> &'static str {
        self.0.text.name()
    }

    /// Color the name is printed in.
    #[getter]
    fn ink(&self) -> &'static str {
        self.0.ink.name()
    }

    #[getter]
    fn label(&self) -> String {
        self.0.label()
    }

    /// Decoration as `(x, y, radius, (r, g, b))` tuples.
    #[getter]
    fn splashes(&self) -> Vec<(i32, i32, i32, (u8, u8, u8))> {
        self.0
            .splashes
            .iter()
            .map(|s| (s.x, s.y, s.radius, (s.color.0, s.color.1, s.color.2)))
            .collect()
    }

    fn __repr__(&self) -> String {
        format!("Card({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for Action.
#[pyclass(name = "Action")]
#[derive(Clone, Debug)]
pub struct PyAction(pub Action);

#[pymethods]
impl PyAction {
    /// "play" or "draw".
    #[getter]
    fn kind(&self) -> &'static str {
        match self.0 {
            Action::Play { .. } => "play",
            Action::Draw => "draw",
        }
    }

    #[getter]
    fn hand_index(&self) -> Option<usize> {
        match self.0 {
            Action::Play { hand_index, .. } => Some(hand_index),
            Action::Draw => None,
        }
    }

    #[getter]
    fn center_index(&self) -> Option<usize> {
        match self.0 {
            Action::Play { center_index, .. } => Some(center_index),
            Action::Draw => None,
        }
    }

    fn __repr__(&self) -> String {
        match self.0 {
            Action::Play {
                hand_index,
                center_index,
            } => format!("Action.play({hand_index}, {center_index})"),
            Action::Draw => "Action.draw()".to_string(),
        }
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
