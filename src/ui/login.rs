//! Sign-in screen shown until the session check succeeds.

use figlet_rs::FIGfont;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::config::{APP_SUBTITLE, APP_TITLE};

/// Figlet rendering of the first word of the title, or nothing when the
/// bundled font cannot be loaded.
fn banner_lines() -> Vec<Line<'static>> {
    let word = APP_TITLE.split_whitespace().next().unwrap_or(APP_TITLE);
    let figure = FIGfont::standard().ok().and_then(|font| font.convert(word).map(|fig| fig.to_string()));
    match figure {
        Some(text) => text
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Cyan))))
            .collect(),
        None => Vec::new(),
    }
}

pub fn draw_login(f: &mut Frame, app: &App, area: Rect) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .title(" Sign in ");
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let banner = banner_lines();
    let chunks = Layout::default()
        .margin(1)
        .constraints([
            Constraint::Length(banner.len() as u16),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    f.render_widget(Paragraph::new(banner).alignment(Alignment::Center), chunks[0]);
    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(APP_TITLE, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(APP_SUBTITLE, Style::default().fg(Color::Gray))),
        ])
        .alignment(Alignment::Center),
        chunks[1],
    );

    let mut lines = Vec::new();
    if app.session.checking {
        let dots = ".".repeat((app.ui.tick_count / 10 % 4) as usize);
        lines.push(Line::from(Span::styled(
            format!("Checking session{}", dots),
            Style::default().fg(Color::Yellow),
        )));
    } else {
        lines.push(Line::from("Sign in with Discord in your browser:"));
        lines.push(Line::from(Span::styled(
            app.login_url(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from("[Enter] Paste session cookie | [r] Retry | [q] Quit"));
    }
    if let Some(notice) = &app.session.notice {
        lines.push(Line::from(""));
        for line in notice.split('\n') {
            lines.push(Line::from(Span::styled(line.to_string(), Style::default().fg(Color::Red))));
        }
    }
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: false }),
        chunks[2],
    );
}
