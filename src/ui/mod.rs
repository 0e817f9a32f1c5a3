//! Main UI module. Re-exports submodules and provides the main entry point.

pub mod config;
pub mod events;
pub mod login;
pub mod me;
pub mod popups;
pub mod time_format;
pub mod top_bar;
pub mod users;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::state::Section;

pub fn ui(f: &mut Frame, app: &mut App) {
    let size = f.area();

    if !app.session.is_authenticated() {
        login::draw_login(f, app, size);
    } else {
        let chunks = Layout::default()
            .constraints([
                Constraint::Length(3), // Top bar
                Constraint::Min(0),    // Section
                Constraint::Length(3), // Footer
            ])
            .split(size);

        top_bar::draw_top_bar(f, app, chunks[0]);
        match app.ui.section {
            Section::Events => events::draw_events(f, app, chunks[1]),
            Section::Me => me::draw_me(f, app, chunks[1]),
            Section::Users => users::draw_users(f, app, chunks[1]),
            Section::Config => config::draw_config(f, app, chunks[1]),
        }
        draw_footer(f, app, chunks[2]);
    }

    if let Some(modal) = app.modal.current() {
        popups::draw_modal(f, modal);
    }
}

fn help_text(section: Section) -> &'static str {
    match section {
        Section::Events => "[↑↓] Select | [c] Kind | [a] Archived | [r] Refresh | [j] Join | [x] Archive | [l] Relink | [n] New | [u] Participants",
        Section::Me => "[↑↓] Row | [←→] Option | [Space] Toggle | [s] Save | [r] Reload",
        Section::Users => "[↑↓] Select | [e] Events | [Enter] Open | [Esc] Back | [r] Refresh",
        Section::Config => "[↑↓] Select | [Enter] Edit/Pick | [s] Save | [r] Refresh",
    }
}

fn draw_footer(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let footer_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(67), Constraint::Percentage(33)])
        .split(area);

    let help = format!(
        "{}\n[Tab]/[F1-F4] Sections | [Home] Events | [Ctrl+L] Logout | [Ctrl+C] Quit",
        help_text(app.ui.section)
    );
    f.render_widget(
        Paragraph::new(help)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::TOP)),
        footer_chunks[0],
    );

    let signed_in = app
        .session
        .signed_in_as()
        .map(|name| format!("Signed in as {}", name))
        .unwrap_or_default();
    let status = vec![
        Line::from(Span::styled(signed_in, Style::default().fg(Color::Yellow))),
        Line::from(Span::styled(app.config.github_url.as_str(), Style::default().fg(Color::Blue))),
    ];
    f.render_widget(
        Paragraph::new(status)
            .alignment(Alignment::Right)
            .block(Block::default().borders(Borders::TOP)),
        footer_chunks[1],
    );
}
