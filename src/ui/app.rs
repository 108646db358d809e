//! Screen state machine.
//!
//! The host loop feeds [`App`] input events and the current time once per
//! frame, then asks it to render. Nothing here touches a window or a clock.

use crate::cards::Rgb;
use crate::core::{GameConfig, PlayerId};
use crate::games::colour::Session;
use crate::rules::PlayError;

use super::geometry::{Rect, AI_AREA_Y, PLAYER_AREA_Y, SCREEN_HEIGHT, SCREEN_WIDTH};
use super::input::{Control, InputEvent, Key};
use super::layout::{GameHit, GameLayout, MenuLayout, OverLayout, RulesLayout, ScreenLayout};
use super::render::{Align, DrawCommand, FontSize, Surface};

pub const TITLE: &str = "Colour Addict";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Nav {
    NewGame,
    Rules,
    Menu,
}

/// Which screen is showing. The game session lives inside the screens that
/// need it.
#[derive(Clone, Debug)]
pub enum Screen {
    Menu,
    Rules,
    Playing(Session),
    Over(Session),
}

impl Screen {
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            Screen::Playing(s) | Screen::Over(s) => Some(s),
            Screen::Menu | Screen::Rules => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct App {
    config: GameConfig,
    seed: u64,
    games_started: u64,
    screen: Screen,
    layout: ScreenLayout,
}

impl App {
    /// Start on the main menu. Game `n` is dealt with `seed + n`.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            games_started: 0,
            screen: Screen::Menu,
            layout: ScreenLayout::Menu(MenuLayout::default()),
        }
    }

    /// Jump straight into a game already in progress.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.screen = Screen::Playing(session);
        self.relayout();
        self
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Handle one input event.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<Control, PlayError> {
        if event == InputEvent::Quit {
            return Ok(Control::Exit);
        }
        let clicked = |rect: Rect| match event {
            InputEvent::PointerDown { x, y } => rect.contains(x, y),
            _ => false,
        };

        let nav = match (&mut self.screen, &self.layout) {
            (Screen::Menu, ScreenLayout::Menu(menu)) => {
                if clicked(menu.play_button) {
                    Some(Nav::NewGame)
                } else if clicked(menu.rules_button) {
                    Some(Nav::Rules)
                } else {
                    None
                }
            }
            (Screen::Rules, ScreenLayout::Rules(rules)) => {
                clicked(rules.back_button).then_some(Nav::Menu)
            }
            (Screen::Over(_), ScreenLayout::Over(over)) => {
                clicked(over.menu_button).then_some(Nav::Menu)
            }
            (Screen::Playing(session), ScreenLayout::Playing(layout)) => {
                if !session.state().is_over() {
                    match event {
                        InputEvent::PointerDown { x, y } => match layout.hit_test(x, y) {
                            Some(GameHit::DrawButton) => {
                                session.human_draw();
                            }
                            Some(GameHit::HandCard(i)) => {
                                session.human_play(i)?;
                            }
                            None => {}
                        },
                        InputEvent::KeyPress(Key::Space) => {
                            session.human_draw();
                        }
                        _ => {}
                    }
                }
                None
            }
            _ => None,
        };

        match nav {
            Some(Nav::NewGame) => self.start_game(),
            Some(Nav::Rules) => self.screen = Screen::Rules,
            Some(Nav::Menu) => self.screen = Screen::Menu,
            None => {}
        }
        self.relayout();
        Ok(Control::Continue)
    }

    /// Advance time. Runs the opponent while playing and switches to the
    /// Over screen once the game has a winner.
    pub fn tick(&mut self, now_ms: u64) -> Result<(), PlayError> {
        let Screen::Playing(session) = &mut self.screen else {
            return Ok(());
        };
        session.tick(now_ms)?;

        if session.state().is_over() {
            let screen = std::mem::replace(&mut self.screen, Screen::Menu);
            if let Screen::Playing(session) = screen {
                self.screen = Screen::Over(session);
            }
        }
        self.relayout();
        Ok(())
    }

    /// Draw the current screen.
    pub fn render<S: Surface>(&self, surface: &mut S) {
        surface.draw(DrawCommand::Clear(Rgb::YELLOW_BG));

        match (&self.screen, &self.layout) {
            (Screen::Menu, ScreenLayout::Menu(menu)) => {
                surface.draw(centered_text(80, TITLE, FontSize::Title));
                surface.draw(button(menu.play_button, "Play", FontSize::Large));
                surface.draw(button(menu.rules_button, "Rules", FontSize::Large));
            }
            (Screen::Rules, ScreenLayout::Rules(rules)) => {
                surface.draw(centered_text(40, "Rules", FontSize::Title));
                for (i, line) in rules_text(&self.config).into_iter().enumerate() {
                    surface.draw(DrawCommand::Text {
                        x: 80,
                        y: 120 + i as i32 * 32,
                        text: line,
                        color: Rgb::DARK,
                        size: FontSize::Body,
                        align: Align::Left,
                    });
                }
                surface.draw(button(rules.back_button, "Back", FontSize::Large));
            }
            (Screen::Playing(session), ScreenLayout::Playing(layout)) => {
                render_game(session, layout, surface);
            }
            (Screen::Over(session), ScreenLayout::Over(over)) => {
                let message = session
                    .state()
                    .winner()
                    .map(winner_message)
                    .unwrap_or_default();
                surface.draw(centered_text(200, message, FontSize::Title));
                surface.draw(button(over.menu_button, "Main menu", FontSize::Large));
            }
            _ => {}
        }
    }

    fn start_game(&mut self) {
        let seed = self.seed.wrapping_add(self.games_started);
        self.games_started += 1;
        self.screen = Screen::Playing(Session::new(self.config.clone(), seed));
    }

    fn relayout(&mut self) {
        self.layout = match &self.screen {
            Screen::Menu => ScreenLayout::Menu(MenuLayout::default()),
            Screen::Rules => ScreenLayout::Rules(RulesLayout::default()),
            Screen::Playing(session) => ScreenLayout::Playing(GameLayout::compute(session.state())),
            Screen::Over(_) => ScreenLayout::Over(OverLayout::default()),
        };
    }
}

/// Text shown on the Over screen.
#[must_use]
pub fn winner_message(winner: PlayerId) -> &'static str {
    match winner {
        PlayerId::Human => "You win!",
        PlayerId::Ai => "Computer wins!",
    }
}

/// Rules screen lines, reflecting the active configuration.
#[must_use]
pub fn rules_text(config: &GameConfig) -> Vec<String> {
    let centers = if config.center_slots == 1 {
        "- One center card is open.".to_string()
    } else {
        format!("- {} center cards are open.", config.center_slots)
    };
    let delay = if config.ai_reaction_ms % 1000 == 0 {
        format!("{}", config.ai_reaction_ms / 1000)
    } else {
        format!("{:.1}", config.ai_reaction_ms as f64 / 1000.0)
    };

    vec![
        format!("- Both player and computer have {} cards.", config.pile_size),
        centers,
        "- Match by color or text. Cross-match allowed.".to_string(),
        "- If you can't play, click DRAW to draw from your pile.".to_string(),
        "- First to empty all cards wins.".to_string(),
        format!("- Computer reacts with {delay} sec delay."),
    ]
}

fn render_game<S: Surface>(session: &Session, layout: &GameLayout, surface: &mut S) {
    let state = session.state();
    let ai = state.player(PlayerId::Ai);
    let human = state.player(PlayerId::Human);

    surface.draw(centered_text(10, TITLE, FontSize::Title));

    for (rect, card) in layout.centers.iter().zip(state.centers()) {
        surface.draw(DrawCommand::Card {
            rect: *rect,
            card: card.clone(),
        });
    }

    surface.draw(label(
        AI_AREA_Y - 30,
        format!(
            "{}: {} in hand | {} in pile",
            PlayerId::Ai,
            ai.hand().len(),
            ai.pile().len()
        ),
    ));
    for rect in &layout.ai_hand {
        surface.draw(DrawCommand::CardBack { rect: *rect });
    }

    surface.draw(label(
        PLAYER_AREA_Y - 35,
        format!(
            "{}: {} in hand | {} in pile",
            PlayerId::Human,
            human.hand().len(),
            human.pile().len()
        ),
    ));
    for (rect, card) in layout.human_hand.iter().zip(human.hand().iter()) {
        surface.draw(DrawCommand::Card {
            rect: *rect,
            card: card.clone(),
        });
    }

    surface.draw(button(layout.draw_button, "Draw", FontSize::Body));
    surface.draw(DrawCommand::Text {
        x: 200,
        y: SCREEN_HEIGHT - 65,
        text: format!("Playable now: {}", session.playable().len()),
        color: Rgb::DARK,
        size: FontSize::Body,
        align: Align::Left,
    });
}

fn centered_text(y: i32, text: impl Into<String>, size: FontSize) -> DrawCommand {
    DrawCommand::Text {
        x: SCREEN_WIDTH / 2,
        y,
        text: text.into(),
        color: Rgb::DARK,
        size,
        align: Align::Center,
    }
}

fn label(y: i32, text: String) -> DrawCommand {
    DrawCommand::Text {
        x: 30,
        y,
        text,
        color: Rgb::DARK,
        size: FontSize::Body,
        align: Align::Left,
    }
}

fn button(rect: Rect, label: &str, size: FontSize) -> DrawCommand {
    DrawCommand::Button {
        rect,
        label: label.to_string(),
        size,
    }
}
