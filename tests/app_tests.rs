//! Screen flow driven purely by input events and synthetic time.

use colour_addict::core::{GameConfig, PlayerId};
use colour_addict::ui::{
    App, Control, DrawCommand, Frame, InputEvent, Key, Rect, Screen, ScreenLayout,
};

fn click(app: &mut App, rect: Rect) -> Control {
    app.handle_event(InputEvent::click(rect.center_x(), rect.center_y()))
        .unwrap()
}

fn menu_play(app: &App) -> Rect {
    match app.layout() {
        ScreenLayout::Menu(menu) => menu.play_button,
        other => panic!("expected menu, got {other:?}"),
    }
}

/// Play a whole game from the menu: the human clicks the first playable
/// card or draws, the opponent ticks every 100 ms of synthetic time.
#[test]
fn test_full_game_from_menu() {
    let config = GameConfig::new().with_ai_reaction_ms(100);
    let mut app = App::new(config, 31);
    let play = menu_play(&app);
    click(&mut app, play);

    let mut now = 0;
    for _ in 0..5_000 {
        if !matches!(app.screen(), Screen::Playing(_)) {
            break;
        }
        now += 100;
        app.tick(now).unwrap();

        let (layout, session) = match (app.layout(), app.screen()) {
            (ScreenLayout::Playing(layout), Screen::Playing(session)) => {
                (layout.clone(), session.clone())
            }
            _ => break,
        };
        match session.playable().first() {
            Some(&i) => {
                click(&mut app, layout.human_hand[i]);
            }
            None => {
                app.handle_event(InputEvent::key(Key::Space)).unwrap();
            }
        }
    }

    // A stalemate is possible once both piles run dry; only check the
    // over screen when someone actually won.
    if let Screen::Over(session) = app.screen() {
        let winner = session.state().winner().unwrap();
        let mut frame = Frame::new();
        app.render(&mut frame);
        let expected = match winner {
            PlayerId::Human => "You win!",
            PlayerId::Ai => "Computer wins!",
        };
        assert!(frame.texts().any(|t| t == expected));
    }
}

#[test]
fn test_frame_starts_with_background() {
    let mut app = App::new(GameConfig::default(), 1);
    let play = menu_play(&app);
    click(&mut app, play);

    let mut frame = Frame::new();
    app.render(&mut frame);

    assert!(matches!(frame.commands[0], DrawCommand::Clear(_)));
    assert!(frame.texts().any(|t| t.starts_with("Playable now: ")));
}

#[test]
fn test_clicks_outside_buttons_do_nothing() {
    let mut app = App::new(GameConfig::default(), 1);

    assert_eq!(click(&mut app, Rect::new(0, 0, 2, 2)), Control::Continue);
    assert!(matches!(app.screen(), Screen::Menu));

    app.handle_event(InputEvent::key(Key::Other)).unwrap();
    assert!(matches!(app.screen(), Screen::Menu));
}

#[test]
fn test_ticks_outside_game_are_ignored() {
    let mut app = App::new(GameConfig::default(), 1);
    app.tick(10_000).unwrap();
    assert!(matches!(app.screen(), Screen::Menu));
}
