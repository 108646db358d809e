//! Presentation: screens, layout, hit testing and draw commands.
//!
//! Windowing and rasterization are left to the host; this module only turns
//! state into [`DrawCommand`]s and input events into engine calls.

pub mod app;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod render;

pub use app::{rules_text, winner_message, App, Screen, TITLE};
pub use geometry::{Rect, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use input::{Control, InputEvent, Key};
pub use layout::{GameHit, GameLayout, ScreenLayout};
pub use render::{Align, DrawCommand, FontSize, Frame, Surface};
