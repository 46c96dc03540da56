//! End-to-end key handling against a real audio driver.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;
use strictly_guess::{Effect, FixedTarget, MaxRange, SoundCue};
use strictly_guess_tui::runner::drain_audio;
use strictly_guess_tui::{App, AudioDriver, Difficulty, SilentPlayer};

fn press(app: &mut App, code: KeyCode) -> Vec<Effect> {
    app.handle_key(KeyEvent::from(code))
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn app(max: u32, target: u32) -> App {
    App::new(MaxRange::new(max).unwrap(), true, Box::new(FixedTarget(target)))
}

#[tokio::test]
async fn test_guess_until_win_with_audio() {
    let (mut driver, mut rx) = AudioDriver::new(Arc::new(SilentPlayer), Duration::from_secs(3));
    let mut app = app(100, 50);

    type_text(&mut app, "60");
    let effects = press(&mut app, KeyCode::Enter);
    assert_eq!(effects, [Effect::PlaySound(SoundCue::CloseSound)]);
    assert!(app.session().is_playing());
    driver.execute(effects);

    // Input is locked until the cue finishes.
    type_text(&mut app, "50");
    assert_eq!(app.input(), "");

    while driver.is_busy() {
        drain_audio(&mut app, &mut driver, &mut rx);
        tokio::task::yield_now().await;
    }
    assert!(!app.session().is_playing());

    type_text(&mut app, "50");
    let effects = press(&mut app, KeyCode::Enter);
    assert_eq!(effects, [Effect::PlaySound(SoundCue::CorrectSound)]);
    assert!(app.session().is_won());
    assert_eq!(app.session().attempts(), 2);
    assert_eq!(
        app.session().headline(),
        "You found the number 50 in 2 attempts!"
    );
}

#[test]
fn test_non_numeric_input_rejected() {
    let mut app = app(10, 5);
    type_text(&mut app, "abc");
    assert!(press(&mut app, KeyCode::Enter).is_empty());
    assert_eq!(
        app.input_error().map(ToString::to_string),
        Some("Please enter a valid number between 1 and 10".to_string())
    );
    assert_eq!(app.session().attempts(), 0);
}

#[test]
fn test_out_of_range_input_rejected() {
    let mut app = app(10, 5);
    type_text(&mut app, "11");
    press(&mut app, KeyCode::Enter);
    assert!(app.input_error().is_some());
    assert!(app.session().history().is_empty());
}

#[test]
fn test_new_game_stops_playing_sound() {
    let mut app = app(10, 5);
    type_text(&mut app, "1");
    press(&mut app, KeyCode::Enter);
    assert!(app.session().is_playing());

    let effects = app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
    assert_eq!(effects, [Effect::StopSound]);
    assert!(!app.session().is_playing());
    assert_eq!(app.session().attempts(), 0);
    assert_eq!(app.session().range().get(), 10);
}

#[test]
fn test_difficulty_change_restarts() {
    let mut app = app(10, 5);
    type_text(&mut app, "3");
    press(&mut app, KeyCode::Enter);
    app.sound_finished();

    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.difficulty(), Some(Difficulty::Hard));
    assert_eq!(app.session().range().get(), 1000);
    assert_eq!(app.session().attempts(), 0);
    assert!(app.session().history().is_empty());
}

#[test]
fn test_muted_app_never_plays() {
    let mut app = App::new(MaxRange::new(10).unwrap(), false, Box::new(FixedTarget(5)));
    type_text(&mut app, "2");
    assert!(press(&mut app, KeyCode::Enter).is_empty());
    assert!(!app.session().is_playing());

    type_text(&mut app, "5");
    press(&mut app, KeyCode::Enter);
    assert!(app.session().is_won());
}

#[test]
fn test_audio_unavailable_unlocks_input() {
    let mut app = app(10, 5);
    app.audio_unavailable();
    type_text(&mut app, "2");
    assert!(press(&mut app, KeyCode::Enter).is_empty());
    type_text(&mut app, "3");
    assert_eq!(app.input(), "3");
}
