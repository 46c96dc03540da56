//! Stateless UI rendering for the guessing game.

use crate::app::App;
use crate::difficulty::Difficulty;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};
use strictly_guess::{GameSession, GuessEntry, HeatBand, Rgb};
use strum::IntoEnumIterator;

fn instructions(max: u32) -> [String; 6] {
    [
        format!("The game has selected a random number between 1 and {}", max),
        "Type your guess and press Enter to submit".to_string(),
        "Listen to the bell: more rings mean you're getting closer!".to_string(),
        "Watch the bar to see if you're hot or cold".to_string(),
        "Your previous guesses are shown in the history list".to_string(),
        "Try to find the number in as few attempts as possible".to_string(),
    ]
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let session = app.session();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Difficulty
            Constraint::Length(2), // Headline
            Constraint::Length(4), // Input
            Constraint::Length(5), // Feedback
            Constraint::Length(1), // Attempts
            Constraint::Min(3),    // History
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title_style = if session.is_won() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let title = Paragraph::new(session.title())
        .style(title_style.add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    draw_difficulty(frame, chunks[1], app.difficulty(), session);

    let headline = Paragraph::new(session.headline())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(headline, chunks[2]);

    draw_input(frame, chunks[3], app);

    if session.attempts() > 0 {
        draw_feedback(frame, chunks[4], session);
    }

    let attempts = Paragraph::new(format!("Attempts: {}", session.attempts()))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(attempts, chunks[5]);

    draw_history(frame, chunks[6], session);

    let help = Paragraph::new("Enter: guess | Tab: difficulty | Ctrl-N: new game | ?: help | Esc: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[7]);

    if app.show_instructions() {
        draw_instructions(frame, area, session.range().get());
    }
}

fn draw_difficulty(frame: &mut Frame, area: Rect, selected: Option<Difficulty>, session: &GameSession) {
    let mut spans: Vec<Span> = Vec::new();
    for d in Difficulty::iter() {
        let style = if Some(d) == selected {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", d.label()), style));
        spans.push(Span::raw(" "));
    }
    if selected.is_none() {
        spans.push(Span::styled(
            format!(" Custom ({}) ", session.range()),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn draw_input(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(center_rect(area, 44, 4));

    let (text, style) = if session.is_playing() {
        ("Playing...".to_string(), Style::default().fg(Color::DarkGray))
    } else if session.is_won() {
        (String::new(), Style::default().fg(Color::DarkGray))
    } else if app.input().is_empty() {
        (
            format!("Enter a number between 1 and {}", session.range().get()),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (app.input().to_string(), Style::default().fg(Color::White))
    };

    let border = if app.submit_enabled() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let input = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(border).title(" Guess "));
    frame.render_widget(input, rows[0]);

    if let Some(error) = app.input_error() {
        let line = Paragraph::new(error.to_string())
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(line, rows[1]);
    }
}

fn draw_feedback(frame: &mut Frame, area: Rect, session: &GameSession) {
    let feedback = session.feedback();
    let proximity = session.proximity();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Message
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Scale
            Constraint::Length(1), // Playing indicator
        ])
        .split(center_rect(area, 50, 4));

    let message = Paragraph::new(feedback.message.text())
        .style(Style::default().fg(rgb(feedback.color)).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(message, rows[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(rgb(feedback.color)).bg(Color::DarkGray))
        .ratio(proximity.ratio())
        .label(proximity.to_string());
    frame.render_widget(gauge, rows[1]);

    let scale = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);
    frame.render_widget(
        Paragraph::new("Cold").style(Style::default().fg(Color::Red)),
        scale[0],
    );
    frame.render_widget(
        Paragraph::new("Hot")
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Right),
        scale[1],
    );

    if session.is_playing() {
        let playing = Paragraph::new("♪ Playing sound...")
            .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::ITALIC))
            .alignment(Alignment::Center);
        frame.render_widget(playing, rows[3]);
    }
}

fn draw_history(frame: &mut Frame, area: Rect, session: &GameSession) {
    let block = Block::default().borders(Borders::ALL).title(" Guess History ");

    if session.history().is_empty() {
        let empty = Paragraph::new("No guesses yet. Start guessing!")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = session.history().all().map(history_item).collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn history_item(entry: &GuessEntry) -> ListItem<'static> {
    let band = HeatBand::of(entry);
    let color = match band {
        HeatBand::Found => Color::Green,
        HeatBand::Scorching => Color::LightGreen,
        HeatBand::Warm => Color::Yellow,
        HeatBand::Tepid => Color::LightRed,
        HeatBand::Cold => Color::Red,
    };
    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{:>6}", entry.value()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(format!("{:<10}", entry.direction().label()), Style::default().fg(color)),
        Span::styled(format!("{:>7}", entry.proximity()), Style::default().fg(color)),
    ]))
}

fn draw_instructions(frame: &mut Frame, area: Rect, max: u32) {
    let lines: Vec<Line> = instructions(max)
        .into_iter()
        .map(|text| Line::from(format!("• {}", text)))
        .collect();
    let popup = center_rect(area, 70, lines.len() as u16 + 4);

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" How to Play ")
                .title_bottom(" Esc or ? to close "),
        );
    frame.render_widget(Clear, popup);
    frame.render_widget(panel, popup);
}

fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use strictly_guess::{FixedTarget, MaxRange};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_empty_history_placeholder() {
        let app = App::new(MaxRange::new(10).unwrap(), false, Box::new(FixedTarget(5)));
        let screen = render(&app);
        assert!(screen.contains("No guesses yet. Start guessing!"));
        assert!(screen.contains("Attempts: 0"));
        assert!(screen.contains("Guess the Number"));
    }

    #[test]
    fn test_feedback_after_guess() {
        let mut app = App::new(MaxRange::new(10).unwrap(), false, Box::new(FixedTarget(5)));
        app.type_char('4');
        app.submit();
        let screen = render(&app);
        assert!(screen.contains("Too Low"));
        assert!(screen.contains("90.0%"));
        assert!(screen.contains("Attempts: 1"));
    }

    #[test]
    fn test_instructions_popup() {
        let mut app = App::new(MaxRange::new(100).unwrap(), false, Box::new(FixedTarget(5)));
        app.toggle_instructions();
        let screen = render(&app);
        assert!(screen.contains("How to Play"));
        assert!(screen.contains("between 1 and 100"));
    }
}
