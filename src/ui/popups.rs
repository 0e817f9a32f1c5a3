//! Centered popups: the shared dialog used for alerts, confirmations and pickers.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::state::{Modal, ModalKind};

pub fn draw_centered_rect(r: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let popup_layout = Layout::default().direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2), Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ]).split(r);
    Layout::default().direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2), Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ]).split(popup_layout[1])[1]
}

pub fn draw_modal(f: &mut Frame, modal: &Modal) {
    let message_lines = modal.message_lines();
    let body_height: u16 = match &modal.kind {
        ModalKind::Alert | ModalKind::Confirm => 0,
        ModalKind::Input { .. } => 3,
        ModalKind::Select { options, .. } => (options.len() as u16 + 2).clamp(3, 12),
    };
    // message + body + buttons + paddings + borders
    let wanted = message_lines.len() as u16 + body_height + 6;
    let mut percent_y = 20u16;
    let mut area = draw_centered_rect(f.area(), 60, percent_y);
    while area.height < wanted && percent_y < 90 {
        percent_y += 5;
        area = draw_centered_rect(f.area(), 60, percent_y);
    }

    let border_color = match modal.kind {
        ModalKind::Alert if modal.title == "Failed" => Color::Red,
        ModalKind::Alert => Color::Green,
        _ => Color::Cyan,
    };
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", modal.title),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(body_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let message: Vec<Line> = message_lines.into_iter().map(Line::from).collect();
    f.render_widget(Paragraph::new(message).wrap(Wrap { trim: false }), chunks[0]);

    match &modal.kind {
        ModalKind::Input { label, placeholder } => {
            let value = modal.value();
            let text = if value.is_empty() {
                Span::styled(placeholder.as_str(), Style::default().fg(Color::DarkGray))
            } else {
                Span::raw(value)
            };
            f.render_widget(
                Paragraph::new(Line::from(text))
                    .block(Block::default().borders(Borders::ALL).title(label.as_str())),
                chunks[1],
            );
            let cursor_x = chunks[1].x + 1 + value.chars().count() as u16;
            if cursor_x < chunks[1].x + chunks[1].width.saturating_sub(1) {
                f.set_cursor_position((cursor_x, chunks[1].y + 1));
            }
        }
        ModalKind::Select { label, options } => {
            let items: Vec<ListItem> = options.iter().map(|o| ListItem::new(o.label.as_str())).collect();
            let mut state = ListState::default();
            state.select(Some(modal.selected_index()));
            let list = List::new(items)
                .block(Block::default().borders(Borders::ALL).title(label.as_str()))
                .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
                .highlight_symbol("> ");
            f.render_stateful_widget(list, chunks[1], &mut state);
        }
        ModalKind::Alert | ModalKind::Confirm => {}
    }

    let mut buttons = vec![Span::styled(
        format!("[ {} ]", modal.confirm_label),
        Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD),
    )];
    if modal.can_cancel() {
        buttons.push(Span::raw("  "));
        buttons.push(Span::styled(format!("[ {} ]", modal.cancel_label), Style::default().fg(Color::Red)));
    }
    f.render_widget(Paragraph::new(Line::from(buttons)).alignment(Alignment::Center), chunks[2]);

    let hint = match modal.kind {
        ModalKind::Alert => "[Enter]/[Esc] Close",
        ModalKind::Select { .. } => "[↑↓] Choose | [Enter] Confirm | [Esc] Cancel",
        _ => "[Enter] Confirm | [Esc] Cancel",
    };
    f.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray))).alignment(Alignment::Center),
        chunks[3],
    );
}
