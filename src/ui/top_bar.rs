use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::App;
use crate::config::APP_TITLE;
use crate::state::Section;

pub fn draw_top_bar(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(APP_TITLE.len() as u16 + 4),
            Constraint::Min(0),
            Constraint::Length(18),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(
            APP_TITLE,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .block(Block::default().borders(Borders::ALL)),
        chunks[0],
    );

    let titles: Vec<Line> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, s)| Line::from(format!("F{} {}", i + 1, s.label())))
        .collect();
    let selected = Section::ALL.iter().position(|s| *s == app.ui.section).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD))
        .divider("|");
    f.render_widget(tabs, chunks[1]);

    f.render_widget(
        Paragraph::new(Span::styled("Logout ^L", Style::default().fg(Color::Red)))
            .block(Block::default().borders(Borders::ALL)),
        chunks[2],
    );
}
