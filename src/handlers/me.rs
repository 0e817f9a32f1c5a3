use crate::app::App;
use crate::state::MeFocus;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle the profile form
pub fn handle_me_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Up => app.me.focus_prev(),
        KeyCode::Down => app.me.focus_next(),
        KeyCode::Left => app.me.move_cursor(-1),
        KeyCode::Right => app.me.move_cursor(1),
        KeyCode::Enter | KeyCode::Char(' ') => match app.me.focus {
            MeFocus::Events => {
                if let Some(id) = app.me.highlighted_event() {
                    app.open_event(id);
                }
            }
            MeFocus::Save => app.save_profile(),
            _ => app.me.activate(),
        },
        KeyCode::Char('s') => app.save_profile(),
        KeyCode::Char('r') => {
            let load = app.me.begin_load();
            app.dispatch(load);
        }
        _ => {}
    }
}
