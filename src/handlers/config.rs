use crate::app::App;
use crate::services::ApiCommand;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle the guild configuration list
pub fn handle_config_input(key: KeyEvent, app: &mut App) {
    if app.guild_config.editing {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => app.guild_config.end_edit(),
            KeyCode::Backspace => app.guild_config.pop_char(),
            KeyCode::Char(c) => app.guild_config.push_char(c),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Up => app.guild_config.select_offset(-1),
        KeyCode::Down => app.guild_config.select_offset(1),
        KeyCode::Enter => match app.guild_config.picker() {
            Some(picker) => app.modal.open(picker),
            None => {
                app.guild_config.begin_edit();
            }
        },
        KeyCode::Char('s') => app.save_config(),
        KeyCode::Char('r') => {
            let load = app.guild_config.begin_load();
            app.dispatch(load);
            app.dispatch(ApiCommand::LoadGuildOptions);
        }
        _ => {}
    }
}
