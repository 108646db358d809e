//! Backend-neutral drawing.
//!
//! Screens emit a flat list of [`DrawCommand`]s into a [`Surface`]. A real
//! window backend rasterizes them; [`Frame`] just collects them, which is
//! what tests inspect.

use crate::cards::{Card, Rgb};

use super::geometry::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontSize {
    /// Screen titles and the in-game header.
    Title,
    /// Card labels and menu buttons.
    Large,
    /// Status lines, rules text, in-game buttons.
    Body,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    /// `x` is the left edge.
    Left,
    /// `x` is the horizontal center.
    Center,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCommand {
    /// Fill the whole canvas.
    Clear(Rgb),
    Text {
        x: i32,
        y: i32,
        text: String,
        color: Rgb,
        size: FontSize,
        align: Align,
    },
    /// Rounded button with a centered label.
    Button {
        rect: Rect,
        label: String,
        size: FontSize,
    },
    /// Face-up card: white body, splashes, uppercase label in the ink color.
    Card { rect: Rect, card: Card },
    /// Face-down card.
    CardBack { rect: Rect },
}

pub trait Surface {
    fn draw(&mut self, command: DrawCommand);
}

/// Records commands in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All text drawn this frame, in order. Buttons contribute their labels.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            DrawCommand::Button { label, .. } => Some(label.as_str()),
            _ => None,
        })
    }

    /// Face-up cards drawn this frame.
    pub fn cards(&self) -> impl Iterator<Item = (&Rect, &Card)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Card { rect, card } => Some((rect, card)),
            _ => None,
        })
    }

    #[must_use]
    pub fn card_backs(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::CardBack { .. }))
            .count()
    }
}

impl Surface for Frame {
    fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}
