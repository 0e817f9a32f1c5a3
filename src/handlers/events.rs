use crate::app::App;
use crate::services::ApiCommand;
use crate::state::EventsFocus;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle the events list and its detail pane
pub fn handle_events_input(key: KeyEvent, app: &mut App) {
    match app.events.focus {
        EventsFocus::List => handle_list_input(key, app),
        EventsFocus::Participants => handle_participants_input(key, app),
    }
}

fn handle_list_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Up => app.move_event_selection(-1),
        KeyCode::Down => app.move_event_selection(1),
        KeyCode::PageUp => app.move_event_selection(-10),
        KeyCode::PageDown => app.move_event_selection(10),
        KeyCode::Char('c') => {
            let reload = app.events.toggle_kind();
            app.nav.set_selected_event_id(None);
            app.dispatch(reload);
        }
        KeyCode::Char('a') => {
            let reload = app.events.toggle_archived();
            app.nav.set_selected_event_id(None);
            app.dispatch(reload);
        }
        KeyCode::Char('r') => {
            let reload = app.events.reload();
            app.dispatch(reload);
            app.dispatch(ApiCommand::LoadTextChannels);
        }
        KeyCode::Char('j') => app.prompt_join(),
        KeyCode::Char('x') => app.prompt_archive(),
        KeyCode::Char('l') => app.prompt_relink(),
        KeyCode::Char('n') => app.prompt_create_event(),
        KeyCode::Char('u') | KeyCode::Right | KeyCode::Enter => app.events.focus_participants(),
        _ => {}
    }
}

fn handle_participants_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Up => app.events.participant_offset(-1),
        KeyCode::Down => app.events.participant_offset(1),
        KeyCode::Enter => {
            if let Some(id) = app.events.highlighted_participant() {
                app.open_user(id);
            }
        }
        KeyCode::Esc | KeyCode::Left | KeyCode::Char('u') => app.events.focus_list(),
        _ => {}
    }
}
