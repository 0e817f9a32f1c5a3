//! Events section: filter bar, paged list and the selected event's detail.

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::api::{EventItem, EventKind};
use crate::app::App;
use crate::state::events::{safe_jump_url, LoadPhase};
use crate::state::EventsFocus;
use crate::ui::time_format::{format_relative, format_timestamp_to_local};

fn highlight() -> Style {
    Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
}

fn badge(text: &str, color: Color) -> Span<'static> {
    Span::styled(format!("[{}]", text), Style::default().fg(color).add_modifier(Modifier::BOLD))
}

pub fn draw_events(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    draw_list(f, app, chunks[0]);
    draw_detail(f, app, chunks[1]);
}

fn draw_list(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(2)])
        .split(area);

    let kind_spans = [EventKind::Ctftime, EventKind::Custom].into_iter().flat_map(|kind| {
        let style = if kind == app.events.kind { highlight() } else { Style::default().fg(Color::Gray) };
        [Span::styled(format!(" {} ", kind.label()), style), Span::raw(" ")]
    });
    let mut filter: Vec<Span> = vec![Span::raw("Kind: ")];
    filter.extend(kind_spans);
    filter.push(Span::raw("  Archived: "));
    filter.push(if app.events.archived {
        Span::styled("on", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("off", Style::default().fg(Color::Gray))
    });
    f.render_widget(
        Paragraph::new(Line::from(filter)).block(Block::default().borders(Borders::ALL).title("Filters")),
        chunks[0],
    );

    let items: Vec<ListItem> = app
        .events
        .events
        .iter()
        .map(|event| {
            let mut spans = vec![Span::raw(event.title.clone())];
            if event.is_running() {
                spans.push(Span::raw(" "));
                spans.push(badge("LIVE", Color::Green));
            }
            let when = Span::styled(
                format!("  {}", format_timestamp_to_local(event.start)),
                Style::default().fg(Color::DarkGray),
            );
            ListItem::new(vec![Line::from(spans), Line::from(when)])
        })
        .collect();

    let title = format!("{} events ({})", app.events.kind.label(), app.events.events.len());
    let border = if app.events.focus == EventsFocus::List { Color::Cyan } else { Color::Gray };
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title).border_style(Style::default().fg(border)))
        .highlight_style(highlight())
        .highlight_symbol("> ");
    f.render_stateful_widget(list, chunks[1], &mut app.events.list_state);

    let status = match (&app.events.notice, app.events.phase) {
        (Some(notice), _) => Span::styled(notice.lines().next().unwrap_or("").to_string(), Style::default().fg(Color::Red)),
        (None, LoadPhase::LoadingInitial) => Span::styled("Loading events...", Style::default().fg(Color::Yellow)),
        (None, _) if app.events.loading_more => Span::styled("Loading more...", Style::default().fg(Color::Yellow)),
        (None, LoadPhase::Loaded) if app.events.events.is_empty() => Span::raw("No events."),
        (None, LoadPhase::Loaded) if !app.events.has_more => Span::styled("End of list", Style::default().fg(Color::DarkGray)),
        _ => Span::raw(""),
    };
    f.render_widget(Paragraph::new(Line::from(status)), chunks[2]);
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<12}", label), Style::default().fg(Color::Gray)),
        Span::raw(value),
    ])
}

fn detail_lines(event: &EventItem) -> Vec<Line<'static>> {
    let mut title = vec![Span::styled(
        event.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if event.is_running() {
        title.push(Span::raw(" "));
        title.push(badge("RUNNING", Color::Green));
    }
    if event.archived {
        title.push(Span::raw(" "));
        title.push(badge("ARCHIVED", Color::Yellow));
    }

    let now = Local::now();
    let with_relative = |ts: Option<i64>| match format_relative(ts, now) {
        Some(rel) => format!("{} ({})", format_timestamp_to_local(ts), rel),
        None => format_timestamp_to_local(ts),
    };
    let channel = match &event.channel {
        Some(c) if !c.name.is_empty() => format!("#{}", c.name),
        Some(c) => c.id.to_string(),
        None => event.channel_id.as_ref().map(|id| id.to_string()).unwrap_or_else(|| "-".to_string()),
    };

    let mut lines = vec![
        Line::from(title),
        Line::from(""),
        field("Type", event.kind.label().to_string()),
        field("Event ID", event.event_id.as_ref().map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())),
        field("DB ID", event.id.to_string()),
        field("Start", with_relative(event.start)),
        field("Finish", with_relative(event.finish)),
        field("Channel", channel),
    ];
    if let Some(url) = safe_jump_url(event) {
        lines.push(field("Jump", url.to_string()));
    }
    lines
}

fn draw_detail(f: &mut Frame, app: &mut App, area: Rect) {
    let Some(event) = app.events.selected.as_ref() else {
        let text = if app.events.is_loading() { "Loading..." } else { "Select an event." };
        f.render_widget(
            Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Detail")),
            area,
        );
        return;
    };

    let lines = detail_lines(event);
    let chunks = Layout::default()
        .constraints([Constraint::Length(lines.len() as u16 + 2), Constraint::Min(0)])
        .split(area);
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Detail")),
        chunks[0],
    );

    let participants: Vec<ListItem> = event
        .users
        .iter()
        .map(|u| ListItem::new(format!("{}  ({})", u.display_name(), u.discord_id)))
        .collect();
    let title = format!("Participants ({})", event.users.len());
    let border = if app.events.focus == EventsFocus::Participants { Color::Cyan } else { Color::Gray };
    let list = List::new(participants)
        .block(Block::default().borders(Borders::ALL).title(title).border_style(Style::default().fg(border)))
        .highlight_style(highlight())
        .highlight_symbol("> ");
    f.render_stateful_widget(list, chunks[1], &mut app.events.participants_state);
}
