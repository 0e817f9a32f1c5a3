use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::state::me::{RHYTHM_OPTIONS, SKILL_OPTIONS, STATUS_OPTIONS};
use crate::state::MeFocus;
use crate::ui::time_format::format_timestamp_to_local;

/// One row of options; the cursor is shown only on the focused row.
fn option_row<'a>(options: &[&'a str], is_on: impl Fn(&str) -> bool, cursor: Option<usize>, radio: bool) -> Line<'a> {
    let mut spans = Vec::new();
    for (i, option) in options.iter().copied().enumerate() {
        let on = is_on(option);
        let mark = match (radio, on) {
            (true, true) => "(*)",
            (true, false) => "( )",
            (false, true) => "[x]",
            (false, false) => "[ ]",
        };
        let mut style = if on { Style::default().fg(Color::Green) } else { Style::default() };
        if cursor == Some(i) {
            style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(format!("{} {}", mark, option), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

fn row_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { Color::Cyan } else { Color::Gray };
    Block::default().borders(Borders::ALL).title(title).border_style(Style::default().fg(color))
}

pub fn draw_me(f: &mut Frame, app: &mut App, area: Rect) {
    let me = &mut app.me;
    let Some(user) = me.user.as_ref() else {
        let mut lines = vec![Line::from(if me.loading { "Loading profile..." } else { "No profile loaded. [r] Reload" })];
        if let Some(notice) = &me.notice {
            lines.extend(notice.split('\n').map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Red)))));
        }
        f.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }).block(Block::default().borders(Borders::ALL).title("Me")),
            area,
        );
        return;
    };

    let chunks = Layout::default()
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .split(area);

    let mut header = vec![
        Span::styled(user.display_name(), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!("  ({})", user.discord_id), Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
    ];
    for role in &user.roles {
        header.push(Span::styled(format!("[{}]", role.label()), Style::default().fg(Color::Magenta)));
        header.push(Span::raw(" "));
    }
    let notice = match &me.notice {
        Some(n) if n == "Profile updated" => Line::from(Span::styled(n.clone(), Style::default().fg(Color::Green))),
        Some(n) => Line::from(Span::styled(n.lines().next().unwrap_or("").to_string(), Style::default().fg(Color::Red))),
        None if me.loading => Line::from(Span::styled("Refreshing...", Style::default().fg(Color::Yellow))),
        None => Line::from(""),
    };
    f.render_widget(
        Paragraph::new(vec![Line::from(header), notice]).block(Block::default().borders(Borders::ALL).title("Me")),
        chunks[0],
    );

    let cursor_for = |focus: MeFocus| if me.focus == focus { Some(me.cursor) } else { None };
    let status = me.status.clone();
    f.render_widget(
        Paragraph::new(option_row(STATUS_OPTIONS, |o| o == status, cursor_for(MeFocus::Status), true))
            .block(row_block("Status", me.focus == MeFocus::Status)),
        chunks[1],
    );
    f.render_widget(
        Paragraph::new(option_row(SKILL_OPTIONS, |o| me.skills.iter().any(|s| s == o), cursor_for(MeFocus::Skills), false))
            .wrap(Wrap { trim: false })
            .block(row_block("Skills", me.focus == MeFocus::Skills)),
        chunks[2],
    );
    f.render_widget(
        Paragraph::new(option_row(
            RHYTHM_OPTIONS,
            |o| me.rhythm_games.iter().any(|s| s == o),
            cursor_for(MeFocus::RhythmGames),
            false,
        ))
        .wrap(Wrap { trim: false })
        .block(row_block("Rhythm games", me.focus == MeFocus::RhythmGames)),
        chunks[3],
    );

    let items: Vec<ListItem> = user
        .events
        .iter()
        .map(|e| ListItem::new(format!("{}  {}  [{}]", e.title, format_timestamp_to_local(e.start), e.kind.label())))
        .collect();
    let events_title = format!("Joined events ({})", user.events.len());
    let events_focused = me.focus == MeFocus::Events;
    let list = List::new(items)
        .block(row_block(&events_title, events_focused))
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .highlight_symbol(if events_focused { "> " } else { "  " });
    f.render_stateful_widget(list, chunks[4], &mut me.events_state);

    let save_style = if me.focus == MeFocus::Save {
        Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };
    f.render_widget(Paragraph::new(Span::styled("[ Save profile ]", save_style)), chunks[5]);
}
