pub mod config;
pub mod events;
pub mod login;
pub mod me;
pub mod modal;
pub mod users;

use crate::app::App;
use crate::state::Section;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Main input handler dispatcher
pub fn handle_key_event(key: KeyEvent, app: &mut App) {
    // Windows reports releases as well
    if key.kind != KeyEventKind::Press {
        return;
    }

    // The dialog owns the keyboard while it is open
    if app.modal.is_open() {
        modal::handle_modal_input(key, app);
        return;
    }

    if handle_global_shortcuts(key, app) {
        return;
    }

    if app.session.checking {
        return;
    }

    if !app.session.is_authenticated() {
        login::handle_login_input(key, app);
        return;
    }

    match app.ui.section {
        Section::Events => events::handle_events_input(key, app),
        Section::Me => me::handle_me_input(key, app),
        Section::Users => users::handle_users_input(key, app),
        Section::Config => config::handle_config_input(key, app),
    }
}

/// Handle shortcuts that work in every section
fn handle_global_shortcuts(key: KeyEvent, app: &mut App) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.request_quit();
        return true;
    }
    if !app.session.is_authenticated() {
        return false;
    }
    // Free-text config editing keeps its keys
    if app.ui.section == Section::Config && app.guild_config.editing {
        return false;
    }

    match key.code {
        KeyCode::Tab => app.switch_section(app.ui.section.next()),
        KeyCode::BackTab => app.switch_section(app.ui.section.prev()),
        KeyCode::F(n @ 1..=4) => app.switch_section(Section::ALL[n as usize - 1]),
        // The brand in the top bar resets to the events list
        KeyCode::Home => app.switch_section(Section::Events),
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => app.logout(),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiResult, User};
    use crate::config::AppConfig;
    use crate::services::{ApiCommand, ApiResponse};
    use serde_json::json;
    use tokio::sync::mpsc;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn signed_in() -> (App, mpsc::UnboundedReceiver<ApiCommand>) {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = App::new(AppConfig::default(), tx);
        let user: User = serde_json::from_value(json!({ "discord_id": 1, "roles": ["admin"] })).unwrap();
        app.handle_api_response(ApiResponse::Session(ApiResult::success(200, Some(user))));
        while rx.try_recv().is_ok() {}
        (app, rx)
    }

    #[test]
    fn test_function_keys_switch_sections() {
        let (mut app, mut rx) = signed_in();
        handle_key_event(press(KeyCode::F(4)), &mut app);
        assert_eq!(app.ui.section, Section::Config);
        assert_eq!(rx.try_recv().ok(), Some(ApiCommand::LoadConfig));
        assert_eq!(rx.try_recv().ok(), Some(ApiCommand::LoadGuildOptions));

        handle_key_event(press(KeyCode::Tab), &mut app);
        assert_eq!(app.ui.section, Section::Events);
    }

    #[test]
    fn test_keys_ignored_while_checking_session() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = App::new(AppConfig::default(), tx);
        handle_key_event(press(KeyCode::Enter), &mut app);
        assert!(!app.modal.is_open());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_ctrl_c_asks_before_quitting() {
        let (mut app, _rx) = signed_in();
        handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &mut app);
        assert!(app.modal.is_open());
        handle_key_event(press(KeyCode::Esc), &mut app);
        assert!(!app.ui.should_quit);
        assert!(!app.modal.is_open());
    }
}
