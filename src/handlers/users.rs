use crate::app::App;
use crate::state::UsersFocus;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle the roster and the selected member's events
pub fn handle_users_input(key: KeyEvent, app: &mut App) {
    match app.users.focus {
        UsersFocus::List => match key.code {
            KeyCode::Up => app.move_user_selection(-1),
            KeyCode::Down => app.move_user_selection(1),
            KeyCode::Right | KeyCode::Enter | KeyCode::Char('e') => app.users.focus_events(),
            KeyCode::Char('r') => {
                let load = app.users.begin_load();
                app.dispatch(load);
            }
            _ => {}
        },
        UsersFocus::Events => match key.code {
            KeyCode::Up => app.users.event_offset(-1),
            KeyCode::Down => app.users.event_offset(1),
            KeyCode::Enter => {
                if let Some(id) = app.users.highlighted_event() {
                    app.open_event(id);
                }
            }
            KeyCode::Esc | KeyCode::Left | KeyCode::Char('e') => app.users.focus_list(),
            _ => {}
        },
    }
}
