//! Application state and input handling.
//!
//! `App` is the input boundary: it owns the text being typed, validates it,
//! and only forwards well-formed guesses to the [`GameSession`]. Everything
//! here is synchronous so it can be tested without a terminal.

use crate::difficulty::Difficulty;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use strictly_guess::{Effect, GameSession, InputError, MaxRange, TargetSource, parse_guess};
use tracing::{debug, info, instrument, warn};

/// Longest input the guess field accepts.
const MAX_INPUT_LEN: usize = 12;

/// Main application state.
pub struct App {
    session: GameSession,
    source: Box<dyn TargetSource + Send>,
    difficulty: Option<Difficulty>,
    input: String,
    input_error: Option<InputError>,
    show_instructions: bool,
    should_quit: bool,
}

impl App {
    /// Creates the application and starts the first game.
    #[instrument(skip(source))]
    pub fn new(range: MaxRange, audio: bool, mut source: Box<dyn TargetSource + Send>) -> Self {
        let mut session = GameSession::start(range, &mut source);
        if !audio {
            session = session.without_audio();
        }
        Self {
            session,
            source,
            difficulty: Difficulty::from_max(range.get()),
            input: String::new(),
            input_error: None,
            show_instructions: false,
            should_quit: false,
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Selected preset, `None` for a custom range.
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Text in the guess field.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Inline validation error for the guess field.
    pub fn input_error(&self) -> Option<&InputError> {
        self.input_error.as_ref()
    }

    /// Whether the instructions panel is open.
    pub fn show_instructions(&self) -> bool {
        self.show_instructions
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether pressing Enter would do anything.
    pub fn submit_enabled(&self) -> bool {
        self.session.can_submit() && !self.input.trim().is_empty()
    }

    /// Handles a key press and returns effects for the audio adapter.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                Vec::new()
            }
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Esc if self.show_instructions => {
                self.show_instructions = false;
                Vec::new()
            }
            KeyCode::Esc => {
                self.should_quit = true;
                Vec::new()
            }
            KeyCode::Char('?') | KeyCode::F(1) => {
                self.toggle_instructions();
                Vec::new()
            }
            KeyCode::Tab => self.select_difficulty(self.next_difficulty(true)),
            KeyCode::BackTab => self.select_difficulty(self.next_difficulty(false)),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.backspace();
                Vec::new()
            }
            KeyCode::Char(c) if !ctrl => {
                self.type_char(c);
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    /// Appends a character to the guess field, clearing any error.
    pub fn type_char(&mut self, c: char) {
        if !self.session.can_submit() || self.input.chars().count() >= MAX_INPUT_LEN {
            return;
        }
        self.input.push(c);
        self.input_error = None;
    }

    /// Deletes the last character, clearing any error.
    pub fn backspace(&mut self) {
        self.input.pop();
        self.input_error = None;
    }

    /// Validates the field and submits it.
    ///
    /// Ignored while a sound plays, after a win, or with an empty field,
    /// like a disabled submit button.
    #[instrument(skip(self), fields(input = %self.input))]
    pub fn submit(&mut self) -> Vec<Effect> {
        if !self.submit_enabled() {
            debug!("Submit disabled");
            return Vec::new();
        }

        let guess = match parse_guess(&self.input, self.session.range()) {
            Ok(guess) => guess,
            Err(e) => {
                debug!(error = %e, "Input rejected");
                self.input_error = Some(e);
                return Vec::new();
            }
        };

        match self.session.submit(guess) {
            Ok(report) => {
                self.input.clear();
                if report.won() {
                    info!(attempts = self.session.attempts(), "Player won");
                }
                report.effects
            }
            Err(e) => {
                warn!(error = %e, "Guess refused by session");
                Vec::new()
            }
        }
    }

    /// Starts a new game with the current range.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) -> Vec<Effect> {
        let range = self.session.range();
        self.restart(range)
    }

    /// Switches preset and restarts.
    #[instrument(skip(self))]
    pub fn select_difficulty(&mut self, difficulty: Difficulty) -> Vec<Effect> {
        info!(%difficulty, "Difficulty changed");
        self.difficulty = Some(difficulty);
        self.restart(difficulty.range())
    }

    /// Opens or closes the instructions panel.
    pub fn toggle_instructions(&mut self) {
        self.show_instructions = !self.show_instructions;
    }

    /// The audio adapter reported the current sound has ended.
    pub fn sound_finished(&mut self) {
        self.session.sound_finished();
    }

    /// The audio backend failed to start.
    pub fn audio_unavailable(&mut self) {
        self.session.audio_unavailable();
    }

    fn restart(&mut self, range: MaxRange) -> Vec<Effect> {
        self.input.clear();
        self.input_error = None;
        self.session.restart(range, &mut self.source)
    }

    fn next_difficulty(&self, forward: bool) -> Difficulty {
        match (self.difficulty, forward) {
            (Some(d), true) => d.next(),
            (Some(d), false) => d.previous(),
            (None, _) => Difficulty::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_guess::{FixedTarget, SoundCue};

    fn app(max: u32, target: u32) -> App {
        App::new(MaxRange::new(max).unwrap(), true, Box::new(FixedTarget(target)))
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.type_char(c);
        }
    }

    #[test]
    fn test_typing_clears_error() {
        let mut app = app(10, 5);
        type_str(&mut app, "abc");
        assert!(app.submit().is_empty());
        assert!(app.input_error().is_some());

        app.backspace();
        assert!(app.input_error().is_none());
    }

    #[test]
    fn test_enter_submits_guess() {
        let mut app = app(10, 5);
        type_str(&mut app, "4");
        let effects = app.handle_key(KeyEvent::from(KeyCode::Enter));
        assert_eq!(effects, [Effect::PlaySound(SoundCue::CloseSound)]);
        assert_eq!(app.input(), "");
        assert_eq!(app.session().attempts(), 1);
    }

    #[test]
    fn test_typing_blocked_while_playing() {
        let mut app = app(10, 5);
        type_str(&mut app, "4");
        app.submit();
        type_str(&mut app, "3");
        assert_eq!(app.input(), "");

        app.sound_finished();
        type_str(&mut app, "3");
        assert_eq!(app.input(), "3");
    }

    #[test]
    fn test_empty_submit_ignored() {
        let mut app = app(10, 5);
        assert!(!app.submit_enabled());
        assert!(app.submit().is_empty());
        assert!(app.input_error().is_none());
    }

    #[test]
    fn test_tab_cycles_difficulty() {
        let mut app = app(10, 5);
        assert_eq!(app.difficulty(), Some(Difficulty::Easy));
        app.handle_key(KeyEvent::from(KeyCode::Tab));
        assert_eq!(app.difficulty(), Some(Difficulty::Medium));
        assert_eq!(app.session().range().get(), 100);
    }

    #[test]
    fn test_escape_closes_help_before_quitting() {
        let mut app = app(10, 5);
        app.handle_key(KeyEvent::from(KeyCode::Char('?')));
        assert!(app.show_instructions());
        app.handle_key(KeyEvent::from(KeyCode::Esc));
        assert!(!app.show_instructions());
        assert!(!app.should_quit());
        app.handle_key(KeyEvent::from(KeyCode::Esc));
        assert!(app.should_quit());
    }
}
