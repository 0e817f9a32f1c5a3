use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle input while a dialog is open
pub fn handle_modal_input(key: KeyEvent, app: &mut App) {
    let can_cancel = app.modal.current().is_some_and(|m| m.can_cancel());

    match key.code {
        KeyCode::Enter => app.confirm_modal(),
        // Alerts have no cancel; Esc acknowledges them instead
        KeyCode::Esc if can_cancel => app.cancel_modal(),
        KeyCode::Esc => app.confirm_modal(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if can_cancel {
                app.cancel_modal();
            } else {
                app.confirm_modal();
            }
        }
        KeyCode::Up => {
            if let Some(modal) = app.modal.current_mut() {
                modal.select_offset(-1);
            }
        }
        KeyCode::Down => {
            if let Some(modal) = app.modal.current_mut() {
                modal.select_offset(1);
            }
        }
        KeyCode::Backspace => {
            if let Some(modal) = app.modal.current_mut() {
                modal.pop_char();
            }
        }
        KeyCode::Char(c) => {
            if let Some(modal) = app.modal.current_mut() {
                modal.push_char(c);
            }
        }
        _ => {}
    }
}
