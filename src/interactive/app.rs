//! TUI application state and logic

use crate::core::Rejection;
use crate::dictionary::Dictionary;
use crate::game::{Game, Session, Submission};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info};

/// Application state
pub struct App<'a, D: Dictionary> {
    pub game: Game<'a, D>,
    pub session: Session,
    pub rng: StdRng,
    /// Pending input, cleared after every submission attempt
    pub input_buffer: String,
    pub messages: Vec<Message>,
    /// Rejection currently shown as an alert
    pub alert: Option<Rejection>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, D: Dictionary> App<'a, D> {
    /// Start the app on a freshly picked root
    pub fn new(game: Game<'a, D>, mut rng: StdRng) -> Self {
        let session = game.start(&mut rng);
        let mut app = Self {
            game,
            session,
            rng,
            input_buffer: String::new(),
            messages: Vec::new(),
            alert: None,
            should_quit: false,
        };
        app.add_message(
            "Make words from the letters of the root word.",
            MessageStyle::Info,
        );
        app
    }

    /// Submit whatever is in the input buffer
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.game.submit(&mut self.session, &input) {
            Ok(Submission::Accepted(word)) => {
                self.add_message(
                    &format!("{} accepted!", word.to_uppercase()),
                    MessageStyle::Success,
                );
            }
            Ok(Submission::Ignored) => {}
            Err(_) => {
                // One-shot: the alert owns the rejection until dismissed
                self.alert = self.session.take_rejection();
                if let Some(title) = self.alert.as_ref().map(Rejection::title) {
                    self.add_message(title, MessageStyle::Error);
                }
            }
        }
    }

    /// Start a new round
    pub fn restart(&mut self) {
        self.game.restart(&mut self.session, &mut self.rng);
        self.input_buffer.clear();
        self.alert = None;
        self.messages.clear();
        self.add_message(
            &format!("New game! Root word: {}", self.session.root().to_uppercase()),
            MessageStyle::Info,
        );
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // Any key closes the alert, and does nothing else
        if self.alert.is_some() {
            self.dismiss_alert();
            return;
        }

        match key.code {
            KeyCode::Char('r') if ctrl => self.restart(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) if !ctrl => self.input_buffer.push(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: Dictionary>(app: App<'_, D>) -> Result<()> {
    info!(root = %app.session.root(), "Starting TUI");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "TUI exited with error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, D: Dictionary>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, D>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordSet;
    use rand::SeedableRng;

    fn press(app: &mut App<'_, &WordSet>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App<'_, &WordSet>, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_word(app: &mut App<'_, &WordSet>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn make_app<'a>(dict: &'a WordSet, roots: &'a [String]) -> App<'a, &'a WordSet> {
        App::new(Game::new(dict, roots), StdRng::seed_from_u64(9))
    }

    #[test]
    fn typing_and_submitting_accepts_word() {
        let dict = WordSet::new(["silk", "worm"]);
        let roots = vec!["silkworm".to_string()];
        let mut app = make_app(&dict, &roots);

        type_word(&mut app, "silk");
        assert_eq!(app.session.accepted(), ["silk"]);
        assert!(app.input_buffer.is_empty());
        assert!(app.alert.is_none());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn rejection_shows_alert_until_any_key() {
        let dict = WordSet::new(["silk"]);
        let roots = vec!["silkworm".to_string()];
        let mut app = make_app(&dict, &roots);

        type_word(&mut app, "zzz");
        assert!(matches!(app.alert, Some(Rejection::NotPossible { .. })));
        assert!(app.input_buffer.is_empty());
        assert!(app.session.rejection().is_none());

        // Dismissing key is swallowed
        press(&mut app, KeyCode::Char('x'));
        assert!(app.alert.is_none());
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn empty_enter_does_nothing() {
        let dict = WordSet::new(["silk"]);
        let roots = vec!["silkworm".to_string()];
        let mut app = make_app(&dict, &roots);
        let messages = app.messages.len();

        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);
        assert!(app.alert.is_none());
        assert!(app.session.accepted().is_empty());
        assert_eq!(app.messages.len(), messages);
    }

    #[test]
    fn backspace_edits_input() {
        let dict = WordSet::new(["silk"]);
        let roots = vec!["silkworm".to_string()];
        let mut app = make_app(&dict, &roots);

        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "s");
    }

    #[test]
    fn ctrl_r_restarts() {
        let dict = WordSet::new(["silk"]);
        let roots = vec!["silkworm".to_string()];
        let mut app = make_app(&dict, &roots);

        type_word(&mut app, "silk");
        press(&mut app, KeyCode::Char('s'));
        ctrl(&mut app, 'r');

        assert_eq!(app.session.root(), "silkworm");
        assert!(app.session.accepted().is_empty());
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn quit_keys() {
        let dict = WordSet::new(["silk"]);
        let roots = vec!["silkworm".to_string()];

        let mut app = make_app(&dict, &roots);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = make_app(&dict, &roots);
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let dict = WordSet::new(["silk"]);
        let roots = vec!["silkworm".to_string()];
        let mut app = make_app(&dict, &roots);

        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
