//! Config section: one card per configuration key.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::state::config::{format_status_message, format_value};
use crate::state::{ConfigEntry, ConfigState};

fn card(state: &ConfigState, entry: &ConfigEntry, selected: bool) -> ListItem<'static> {
    let item = &entry.item;
    let mut header = vec![Span::styled(item.key.clone(), Style::default().add_modifier(Modifier::BOLD))];
    if let Some(kind) = entry.kind() {
        header.push(Span::styled(format!(" [{}]", kind.label()), Style::default().fg(Color::Magenta)));
    }
    header.push(if item.ok {
        Span::styled(" OK", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ERR", Style::default().fg(Color::Red))
    });

    let mut lines = vec![Line::from(header)];
    if !item.description.is_empty() {
        lines.push(Line::from(Span::styled(item.description.clone(), Style::default().fg(Color::Gray))));
    }
    for line in format_value(&item.value).lines() {
        lines.push(Line::from(format!("  value: {}", line)));
    }

    let draft = if state.uses_picker(entry) {
        let options = state.options_for(&item.key);
        let name = options
            .iter()
            .find(|o| o.id.to_string() == entry.draft)
            .map(|o| format!("{} ({})", o.name, o.id))
            .unwrap_or_else(|| if entry.draft.is_empty() { "(None)".to_string() } else { entry.draft.clone() });
        format!("  draft: {} [Enter to pick]", name)
    } else if selected && state.editing {
        format!("  draft: {}_", entry.draft)
    } else {
        format!("  draft: {}", entry.draft)
    };
    lines.push(Line::from(Span::styled(draft, Style::default().fg(Color::Yellow))));

    if !item.message.is_empty() {
        let color = if item.ok { Color::DarkGray } else { Color::Red };
        for line in format_status_message(&item.message).lines() {
            lines.push(Line::from(Span::styled(format!("  {}", line), Style::default().fg(color))));
        }
    }
    lines.push(Line::from(""));
    ListItem::new(lines)
}

pub fn draw_config(f: &mut Frame, app: &mut App, area: Rect) {
    let state = &mut app.guild_config;
    let chunks = Layout::default()
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let mut header = vec![Line::from(vec![
        Span::raw("Guild: "),
        Span::styled(
            state.guild_name.clone().unwrap_or_else(|| "-".to_string()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        if state.loading { Span::styled("  loading...", Style::default().fg(Color::Yellow)) } else { Span::raw("") },
    ])];
    if !state.can_edit {
        header.push(Line::from(Span::styled(
            "Administrator permission required. Editing is disabled.",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    } else if let Some(notice) = &state.notice {
        header.push(Line::from(Span::styled(
            notice.lines().next().unwrap_or("").to_string(),
            Style::default().fg(Color::Red),
        )));
    }
    if let Some(error) = &state.options_error {
        header.push(Line::from(Span::styled(
            format!("Pickers unavailable: {}", error.lines().next().unwrap_or("")),
            Style::default().fg(Color::Yellow),
        )));
    }
    f.render_widget(
        Paragraph::new(header).wrap(Wrap { trim: false }).block(Block::default().borders(Borders::ALL).title("Config")),
        chunks[0],
    );

    let selected = state.list_state.selected();
    let items: Vec<ListItem> = state
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| card(state, entry, selected == Some(i)))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(format!("Items ({})", state.entries.len())))
        .highlight_style(Style::default().bg(Color::Rgb(30, 30, 45)))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, chunks[1], &mut state.list_state);
}
