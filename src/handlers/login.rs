use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle the sign-in screen
pub fn handle_login_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('l') => app.prompt_session_cookie(),
        KeyCode::Char('r') => app.start(),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}
