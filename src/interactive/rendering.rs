//! TUI rendering with ratatui
//!
//! Layout for the word game screen.

use super::app::{App, MessageStyle};
use crate::dictionary::Dictionary;
use crate::output::formatters::{length_badge, spaced_letters};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<D: Dictionary>(f: &mut Frame, app: &App<'_, D>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Root word
            Constraint::Length(3), // Input
            Constraint::Min(6),    // Words and messages
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_root(f, app, chunks[0]);
    render_input(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Accepted words
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[2]);

    render_words(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_status(f, app, chunks[3]);

    if app.alert.is_some() {
        render_alert(f, app);
    }
}

fn render_root<D: Dictionary>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let header = Paragraph::new(spaced_letters(app.session.root()))
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" 🔤 WORD SCRAMBLE ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_input<D: Dictionary>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let content = if app.input_buffer.is_empty() {
        Line::from(Span::styled(
            "Enter your word",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(app.input_buffer.as_str())
    };

    let input = Paragraph::new(content)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(" Your Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_words<D: Dictionary>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .accepted()
        .iter()
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    length_badge(word.chars().count()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(" "),
                Span::raw(word.clone()),
            ]))
        })
        .collect();

    let title = format!(" Words ({}) ", app.session.accepted().len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(list, area);
}

fn render_messages<D: Dictionary>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<D: Dictionary>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let help_text = if app.alert.is_some() {
        "Any key: Dismiss"
    } else {
        "Enter: Submit | Ctrl+R: Restart game | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_alert<D: Dictionary>(f: &mut Frame, app: &App<'_, D>) {
    let Some(ref rejection) = app.alert else {
        return;
    };

    let area = centered(f.area(), 50, 7);
    let body = Paragraph::new(vec![
        Line::from(rejection.message()),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(format!(" {} ", rejection.title()))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Red)),
    );

    f.render_widget(Clear, area);
    f.render_widget(body, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordSet;
    use crate::game::Game;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn submit(app: &mut App<'_, &WordSet>, word: &str) {
        for c in word.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    }

    #[test]
    fn renders_root_and_words() {
        let dict = WordSet::new(["silk", "worm"]);
        let roots = vec!["silkworm".to_string()];
        let mut app = App::new(Game::new(&dict, &roots), StdRng::seed_from_u64(1));
        submit(&mut app, "silk");

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("S I L K W O R M"));
        assert!(text.contains("silk"));
        assert!(text.contains("Words (1)"));
    }

    #[test]
    fn renders_alert() {
        let dict = WordSet::new(["silk"]);
        let roots = vec!["silkworm".to_string()];
        let mut app = App::new(Game::new(&dict, &roots), StdRng::seed_from_u64(1));
        submit(&mut app, "lirk");

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Not a real word"));
        assert!(text.contains("Any key: Dismiss"));
    }

    #[test]
    fn centered_fits_inside() {
        let outer = Rect::new(0, 0, 80, 20);
        let inner = centered(outer, 50, 7);
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 7);
        assert!(inner.x > 0 && inner.right() < outer.right());
        assert!(inner.y > 0 && inner.bottom() < outer.bottom());
    }
}
