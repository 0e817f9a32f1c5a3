use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::state::UsersFocus;

fn tags(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

pub fn draw_users(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);
    let users = &mut app.users;

    let items: Vec<ListItem> = users
        .users
        .iter()
        .map(|u| {
            ListItem::new(Line::from(vec![
                Span::raw(u.display_name()),
                Span::styled(format!("  {}", u.status), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();
    let title = if users.loading {
        "Users (loading...)".to_string()
    } else {
        format!("Users ({})", users.users.len())
    };
    let list_color = if users.focus == UsersFocus::List { Color::Cyan } else { Color::Gray };
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title).border_style(Style::default().fg(list_color)))
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, chunks[0], &mut users.list_state);

    let Some(user) = users.selected.as_ref() else {
        let mut lines = vec![Line::from("Select a user.")];
        if let Some(notice) = &users.notice {
            lines.extend(notice.split('\n').map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Red)))));
        }
        f.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }).block(Block::default().borders(Borders::ALL).title("Detail")),
            chunks[1],
        );
        return;
    };

    let detail_chunks = Layout::default()
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(chunks[1]);

    let roles: Vec<Span> = user
        .roles
        .iter()
        .map(|r| Span::styled(format!("[{}] ", r.label()), Style::default().fg(Color::Magenta)))
        .collect();
    let mut lines = vec![
        Line::from(Span::styled(user.display_name(), Style::default().add_modifier(Modifier::BOLD))),
        Line::from(format!("Discord ID  {}", user.discord_id)),
        Line::from(format!("Status      {}", if user.status.is_empty() { "-" } else { user.status.as_str() })),
        Line::from(format!("Skills      {}", tags(&user.skills))),
        Line::from(format!("Rhythm      {}", tags(&user.rhythm_games))),
        Line::from(roles),
    ];
    if let Some(notice) = &users.notice {
        lines.push(Line::from(Span::styled(notice.lines().next().unwrap_or("").to_string(), Style::default().fg(Color::Red))));
    }
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(Block::default().borders(Borders::ALL).title("Detail")),
        detail_chunks[0],
    );

    let events: Vec<ListItem> = user
        .events
        .iter()
        .map(|e| ListItem::new(format!("{}  [{}]", e.title, e.kind.label())))
        .collect();
    let events_color = if users.focus == UsersFocus::Events { Color::Cyan } else { Color::Gray };
    let list = List::new(events)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Events ({})", user.events.len()))
                .border_style(Style::default().fg(events_color)),
        )
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, detail_chunks[1], &mut users.events_state);
}
